// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mail dispatch surface.
//!
//! SMTP transport is an external collaborator. The API layer dispatches
//! through [`ReportMailer`] and treats whatever sits behind it as opaque;
//! the default wiring is [`LoggingMailer`], which records the dispatch in
//! the log stream instead of sending anything.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::info;

/// A rendered report ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingReport {
    /// Subject line.
    pub subject: String,
    /// Validated recipient addresses.
    pub recipients: Vec<String>,
    /// Validated cc addresses (may be empty).
    pub cc: Vec<String>,
    /// Validated bcc addresses (may be empty).
    pub bcc: Vec<String>,
    /// The rendered report document.
    pub body: String,
}

/// The transport's account of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailReceipt {
    /// Transport-assigned message identifier.
    pub message_id: u64,
    /// Recipients the transport accepted.
    pub accepted: Vec<String>,
    /// Recipients the transport rejected.
    pub rejected: Vec<String>,
}

/// Errors from the mail transport.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MailerError {
    /// The transport refused the whole message.
    #[error("Mail transport rejected the message: {0}")]
    Rejected(String),
    /// The transport could not be reached.
    #[error("Mail transport unavailable: {0}")]
    Unavailable(String),
}

/// Mail transport seam.
pub trait ReportMailer {
    /// Dispatches a rendered report.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport refuses the message outright.
    /// Per-recipient rejections are reported in the receipt instead.
    fn send(&self, report: &OutgoingReport) -> Result<MailReceipt, MailerError>;
}

/// Default transport: logs the dispatch instead of sending it.
#[derive(Debug, Default)]
pub struct LoggingMailer {
    counter: AtomicU64,
}

impl LoggingMailer {
    /// Creates a logging mailer with message ids starting at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }
}

impl ReportMailer for LoggingMailer {
    fn send(&self, report: &OutgoingReport) -> Result<MailReceipt, MailerError> {
        let message_id = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            message_id,
            subject = %report.subject,
            recipients = report.recipients.len(),
            cc = report.cc.len(),
            bcc = report.bcc.len(),
            body_bytes = report.body.len(),
            "Dispatched report email"
        );
        Ok(MailReceipt {
            message_id,
            accepted: report.recipients.clone(),
            rejected: Vec::new(),
        })
    }
}
