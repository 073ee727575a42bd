// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Recipient list parsing.
//!
//! Recipient inputs are free-text strings delimited by commas or
//! semicolons. Entries are trimmed and empty entries dropped; what remains
//! must look like email addresses. Validation happens before any dispatch
//! network call.

use fleet_report_domain::DomainError;

/// Parses a required recipient list.
///
/// # Errors
///
/// Returns an error if no entries remain after splitting and trimming, or
/// if any entry is not a plausible email address.
pub fn parse_recipients(raw: &str) -> Result<Vec<String>, DomainError> {
    let entries = split_address_list(raw);
    if entries.is_empty() {
        return Err(DomainError::EmptyRecipients);
    }
    for entry in &entries {
        validate_address(entry)?;
    }
    Ok(entries)
}

/// Parses an optional (cc/bcc) recipient list; empty input is fine.
///
/// # Errors
///
/// Returns an error if a non-empty entry is not a plausible email address.
pub fn parse_optional_recipients(raw: &str) -> Result<Vec<String>, DomainError> {
    let entries = split_address_list(raw);
    for entry in &entries {
        validate_address(entry)?;
    }
    Ok(entries)
}

/// Splits on `,` and `;`, trims, drops empties.
fn split_address_list(raw: &str) -> Vec<String> {
    raw.split([',', ';'])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Shape check only: exactly one `@`, a non-empty local part, and a domain
/// with an interior dot. Deliverability is the mail collaborator's problem.
fn validate_address(addr: &str) -> Result<(), DomainError> {
    let Some((local, domain)) = addr.split_once('@') else {
        return Err(DomainError::InvalidRecipient(addr.to_string()));
    };
    if local.is_empty()
        || domain.contains('@')
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || addr.contains(char::is_whitespace)
    {
        return Err(DomainError::InvalidRecipient(addr.to_string()));
    }
    Ok(())
}
