//! # Derived Tree View
//!
//! The store keeps files flat, keyed by path. The hierarchical view the
//! file explorer renders is *derived*: directories are synthesized from the
//! non-final path segments, never stored. This module owns that derivation.
//!
//! ## Shape
//!
//! The tree is a tagged union, [`TreeNode`]: a `File` leaf carrying display
//! metadata, or a `Directory` carrying an ordered list of children. Builders
//! fold each surviving path over its slash-separated segments; the last
//! segment becomes a file node, every other segment an implicit directory.
//!
//! ## Ordering
//!
//! Output order is part of the contract. At every level directories sort
//! before files, then siblings sort by the requested [`SortKey`], and every
//! remaining tie is broken by full path comparison. Given the same entries,
//! filter, and key, the output is byte-for-byte reproducible — no map
//! iteration order leaks through.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::language::PLAINTEXT;
use crate::model::FileEntry;

/// Sibling ordering applied within each directory level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Case-insensitive by segment name.
    #[default]
    Name,
    /// Most recently modified first; directories fall back to name order.
    Modified,
    /// By language tag, unknown (plaintext) last.
    Type,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "modified" => Ok(SortKey::Modified),
            "type" => Ok(SortKey::Type),
            other => Err(format!("Invalid sort key: {}", other)),
        }
    }
}

/// One node of the derived display tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    Directory {
        name: String,
        path: String,
        children: Vec<TreeNode>,
    },
    File {
        name: String,
        path: String,
        language: String,
        modified_at: DateTime<Utc>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::Directory { name, .. } | TreeNode::File { name, .. } => name,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            TreeNode::Directory { path, .. } | TreeNode::File { path, .. } => path,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, TreeNode::Directory { .. })
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Directory { children, .. } => children,
            TreeNode::File { .. } => &[],
        }
    }
}

/// Build the display tree for a set of entries.
///
/// Pure function: filters entries whose path does not contain `filter` as a
/// case-insensitive substring (empty filter keeps everything), folds the
/// survivors into a tree, and sorts every level by `sort`.
pub fn build_tree(entries: &[FileEntry], filter: &str, sort: SortKey) -> Vec<TreeNode> {
    let filter_lower = filter.to_lowercase();

    let survivors: Vec<&FileEntry> = entries
        .iter()
        .filter(|entry| filter_lower.is_empty() || entry.path.to_lowercase().contains(&filter_lower))
        .collect();

    let items: Vec<(Vec<&str>, &FileEntry)> = survivors
        .iter()
        .map(|entry| (entry.path.split('/').collect(), *entry))
        .collect();

    build_level(items, "", sort)
}

/// Fold one level of path segments into nodes and recurse into directories.
///
/// Grouping uses a BTreeMap so the pre-sort order is already deterministic.
fn build_level(items: Vec<(Vec<&str>, &FileEntry)>, prefix: &str, sort: SortKey) -> Vec<TreeNode> {
    let mut groups: BTreeMap<&str, Vec<(Vec<&str>, &FileEntry)>> = BTreeMap::new();
    for (segments, entry) in items {
        let head = segments[0];
        groups
            .entry(head)
            .or_default()
            .push((segments[1..].to_vec(), entry));
    }

    let mut nodes = Vec::new();
    for (segment, members) in groups {
        let path = if prefix.is_empty() {
            segment.to_string()
        } else {
            format!("{}/{}", prefix, segment)
        };

        // A segment can name both a file and a directory ("a" and "a/b" are
        // distinct keys); emit a node for each side that exists.
        let (leaves, nested): (Vec<_>, Vec<_>) =
            members.into_iter().partition(|(rest, _)| rest.is_empty());

        if !nested.is_empty() {
            let children = build_level(nested, &path, sort);
            nodes.push(TreeNode::Directory {
                name: segment.to_string(),
                path: path.clone(),
                children,
            });
        }

        for (_, entry) in leaves {
            nodes.push(TreeNode::File {
                name: segment.to_string(),
                path: path.clone(),
                language: entry.language.clone(),
                modified_at: entry.modified_at,
            });
        }
    }

    sort_siblings(&mut nodes, sort);
    nodes
}

fn sort_siblings(nodes: &mut [TreeNode], sort: SortKey) {
    nodes.sort_by(|a, b| {
        // Directories always come first
        match (a.is_directory(), b.is_directory()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }

        let by_key = match (sort, a, b) {
            (
                SortKey::Modified,
                TreeNode::File { modified_at: ma, .. },
                TreeNode::File { modified_at: mb, .. },
            ) => mb.cmp(ma),
            (
                SortKey::Type,
                TreeNode::File { language: la, .. },
                TreeNode::File { language: lb, .. },
            ) => (la.as_str() == PLAINTEXT, la).cmp(&(lb.as_str() == PLAINTEXT, lb)),
            // Name key, and directories under every key
            _ => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
        };

        by_key.then_with(|| a.path().cmp(b.path()))
    });
}
