// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Grouping display transform.
//!
//! Grouping is a pure transform applied to the single fetched page: rows are
//! partitioned by the ordered grouping keys (outermost key first) into a
//! tree of group headers and leaf rows. It never re-fetches, re-sorts or
//! drops rows.
//!
//! ## Invariants
//!
//! - Every node's `count` equals the number of leaf rows in its subtree.
//! - The sum of leaf rows across the tree equals the input row count.
//! - Group labels appear in order of first appearance in the input page.

use fleet_report_domain::{GroupKey, ReportRecord};

/// One node of the grouped display tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupNode {
    /// The key this node groups by.
    pub key: GroupKey,
    /// The display label (a roster period code, rank or category name).
    pub label: String,
    /// Number of leaf rows in this subtree.
    pub count: usize,
    /// Child groups (non-leaf nodes).
    pub children: Vec<GroupNode>,
    /// Leaf rows (leaf nodes only).
    pub rows: Vec<ReportRecord>,
}

impl GroupNode {
    /// Recomputes the leaf-row count of this subtree from scratch.
    #[must_use]
    pub fn leaf_rows(&self) -> usize {
        if self.children.is_empty() {
            self.rows.len()
        } else {
            self.children.iter().map(Self::leaf_rows).sum()
        }
    }
}

/// A fetched page arranged for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedPage {
    /// Group tree; empty when no grouping keys were requested.
    pub groups: Vec<GroupNode>,
    /// The rows themselves when no grouping keys were requested.
    pub flat: Vec<ReportRecord>,
}

impl GroupedPage {
    /// Total leaf rows across the page, however it is arranged.
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.flat.len() + self.groups.iter().map(GroupNode::leaf_rows).sum::<usize>()
    }
}

/// Partitions a fetched page by the ordered grouping keys.
///
/// With no keys the page passes through flat. Aggregation counts are
/// recomputed on every call, so a changed key set can never leave stale
/// header counts behind.
#[must_use]
pub fn group_rows(rows: &[ReportRecord], keys: &[GroupKey]) -> GroupedPage {
    if keys.is_empty() {
        return GroupedPage {
            groups: Vec::new(),
            flat: rows.to_vec(),
        };
    }
    GroupedPage {
        groups: build_level(rows, keys),
        flat: Vec::new(),
    }
}

/// Builds one level of the tree, recursing into the remaining keys.
fn build_level(rows: &[ReportRecord], keys: &[GroupKey]) -> Vec<GroupNode> {
    let Some((key, rest)) = keys.split_first() else {
        return Vec::new();
    };

    // Partition preserving first-appearance order. Pages are at most one
    // page-size long, so a linear label scan is fine.
    let mut labels: Vec<String> = Vec::new();
    let mut buckets: Vec<Vec<ReportRecord>> = Vec::new();
    for row in rows {
        let label = row.group_label(*key);
        match labels.iter().position(|existing| *existing == label) {
            Some(index) => buckets[index].push(row.clone()),
            None => {
                labels.push(label);
                buckets.push(vec![row.clone()]);
            }
        }
    }

    labels
        .into_iter()
        .zip(buckets)
        .map(|(label, bucket)| {
            if rest.is_empty() {
                GroupNode {
                    key: *key,
                    label,
                    count: bucket.len(),
                    children: Vec::new(),
                    rows: bucket,
                }
            } else {
                let children = build_level(&bucket, rest);
                GroupNode {
                    key: *key,
                    label,
                    count: bucket.len(),
                    children,
                    rows: Vec::new(),
                }
            }
        })
        .collect()
}
