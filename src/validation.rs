//! Structural audit of a prefix tree.
//!
//! The arena format is compact but easy to corrupt from the outside (a
//! truncated or hand-edited file deserializes without complaint), so the
//! sets expose an `audit` walk that re-checks every structural invariant
//! and collects node statistics along the way:
//!
//! - every pointer is a sentinel or lands on an in-bounds, pair-aligned
//!   node of the kind its tag bit declares
//! - skip nodes carry a packable segment (1..=31 bits) and never an
//!   Absent child
//! - no regular node has both children Present (the merge pass must have
//!   collapsed it)
//! - the tree is actually a tree: no cell is reached twice
//! - free-list entries are in bounds, pair-aligned, and disjoint from
//!   live paths
//!
//! Violations are reported as human-readable strings rather than panics
//! so the auditor itself is safe to run on corrupt data.

use crate::tree::{self, PrefixTree, ABSENT, PRESENT};

/// Outcome of a structural audit walk.
#[derive(Debug, Clone, Default)]
pub struct TreeReport {
    /// Count of two-cell branch nodes.
    pub regular_nodes: usize,
    /// Count of path-compression nodes.
    pub skip_nodes: usize,
    /// Node pairs currently parked on the free list.
    pub free_nodes: usize,
    /// Deepest bit depth reached by the walk.
    pub max_depth: u32,
    /// Histogram of skip segment lengths (index = length in bits).
    pub skip_len_histogram: [usize; 32],
    /// Invariant violations; empty for a healthy tree.
    pub issues: Vec<String>,
}

impl TreeReport {
    /// True iff the walk found no invariant violations.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Total count of live nodes of either kind.
    pub fn live_nodes(&self) -> usize {
        self.regular_nodes + self.skip_nodes
    }
}

pub(crate) fn audit_tree(tree: &PrefixTree) -> TreeReport {
    let mut report = TreeReport {
        free_nodes: tree.free_list.len(),
        ..TreeReport::default()
    };
    if tree.nodes.is_empty() {
        return report;
    }
    if tree.nodes.len() < 2 {
        report
            .issues
            .push(format!("arena holds {} cells, fewer than the reserved header", tree.nodes.len()));
        return report;
    }

    let mut live = vec![false; tree.nodes.len()];
    walk(tree, tree.nodes[1], 0, &mut live, &mut report);

    for &free_idx in &tree.free_list {
        let idx = free_idx as usize;
        if free_idx & 1 != 0 || idx + 1 >= tree.nodes.len() {
            report
                .issues
                .push(format!("free-list entry {} is misaligned or out of bounds", free_idx));
        } else if live[idx] {
            report
                .issues
                .push(format!("free-list entry {} is reachable from the root", free_idx));
        }
    }
    report
}

fn walk(tree: &PrefixTree, ptr: u32, depth: u32, live: &mut [bool], report: &mut TreeReport) {
    if depth > report.max_depth {
        report.max_depth = depth;
    }
    if ptr <= PRESENT {
        return;
    }
    if depth >= 128 {
        report
            .issues
            .push(format!("pointer {:#x} sits below 128 consumed bits", ptr));
        return;
    }
    let idx = tree::ptr_to_idx(ptr) as usize;
    if idx < 2 || idx & 1 != 0 {
        report
            .issues
            .push(format!("pointer {:#x} is not pair-aligned past the header", ptr));
        return;
    }
    if idx + 1 >= tree.nodes.len() {
        report
            .issues
            .push(format!("pointer {:#x} points past the arena end", ptr));
        return;
    }
    if live[idx] {
        report
            .issues
            .push(format!("cell {} is reached by more than one path", idx));
        return;
    }
    live[idx] = true;

    if tree::is_skip_node(ptr) {
        let word = tree.nodes[idx];
        if word < 2 {
            report
                .issues
                .push(format!("skip node at cell {} has unpackable word {}", idx, word));
            return;
        }
        let (_, seg_len) = tree::unpack_segment(word);
        report.skip_nodes += 1;
        report.skip_len_histogram[seg_len as usize] += 1;
        let child = tree.nodes[idx + 1];
        if child == ABSENT {
            report
                .issues
                .push(format!("skip node at cell {} has an absent child", idx));
        }
        walk(tree, child, depth + seg_len, live, report);
    } else {
        report.regular_nodes += 1;
        let left = tree.nodes[idx];
        let right = tree.nodes[idx + 1];
        if left == PRESENT && right == PRESENT {
            report
                .issues
                .push(format!("regular node at cell {} has both children present", idx));
        }
        walk(tree, left, depth + 1, live, report);
        walk(tree, right, depth + 1, live, report);
    }
}
