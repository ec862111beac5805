//! Tree projection over flat parent-id lists (departments, goal hierarchy).
//!
//! Expand/collapse state is a set of node ids owned by the page, never stored
//! on the entities. An item whose parent id does not exist in the snapshot is
//! treated as a root rather than dropped.

use std::collections::{HashMap, HashSet};

pub trait TreeItem: Clone {
    fn id(&self) -> &str;
    fn parent_id(&self) -> Option<&str>;
}

fn normalized_parent<'a, T: TreeItem>(item: &'a T, existing: &HashSet<&str>) -> Option<&'a str> {
    match item.parent_id() {
        Some(pid) if existing.contains(pid) => Some(pid),
        _ => None,
    }
}

fn children_index<T: TreeItem>(items: &[T]) -> HashMap<Option<String>, Vec<T>> {
    let existing: HashSet<&str> = items.iter().map(|i| i.id()).collect();
    let mut index: HashMap<Option<String>, Vec<T>> = HashMap::new();
    for item in items {
        let parent = normalized_parent(item, &existing).map(|s| s.to_string());
        index.entry(parent).or_default().push(item.clone());
    }
    index
}

/// DFS projection of the tree into visible rows with their depth. A node's
/// children are emitted only when its id is in the expanded set.
pub fn visible_rows<T: TreeItem>(items: &[T], expanded: &HashSet<String>) -> Vec<(T, usize)> {
    let index = children_index(items);
    let mut rows = Vec::new();
    if let Some(roots) = index.get(&None) {
        for root in roots {
            push_rows(root, 0, &index, expanded, &mut rows);
        }
    }
    rows
}

fn push_rows<T: TreeItem>(
    node: &T,
    depth: usize,
    index: &HashMap<Option<String>, Vec<T>>,
    expanded: &HashSet<String>,
    out: &mut Vec<(T, usize)>,
) {
    out.push((node.clone(), depth));
    if !expanded.contains(node.id()) {
        return;
    }
    if let Some(children) = index.get(&Some(node.id().to_string())) {
        for child in children {
            push_rows(child, depth + 1, index, expanded, out);
        }
    }
}

pub fn has_children<T: TreeItem>(items: &[T], id: &str) -> bool {
    items.iter().any(|i| i.parent_id() == Some(id))
}

/// Full id set of the current snapshot, for expand-all over the materialized
/// tree rather than a fixed depth.
pub fn all_ids<T: TreeItem>(items: &[T]) -> HashSet<String> {
    items.iter().map(|i| i.id().to_string()).collect()
}

/// Ids of every descendant of `root_id`, computed by traversal from the full
/// snapshot seeded at that node.
pub fn descendant_ids<T: TreeItem>(items: &[T], root_id: &str) -> HashSet<String> {
    let index = children_index(items);
    let mut result = HashSet::new();
    let mut stack = vec![root_id.to_string()];
    while let Some(current) = stack.pop() {
        if let Some(children) = index.get(&Some(current)) {
            for child in children {
                if result.insert(child.id().to_string()) {
                    stack.push(child.id().to_string());
                }
            }
        }
    }
    result
}

/// Candidate parents for the node being edited: everything except the node
/// itself and all of its descendants. Offering an excluded node must be
/// impossible through the control, so the control is built from this list.
pub fn parent_candidates<T: TreeItem>(items: &[T], edited_id: Option<&str>) -> Vec<T> {
    let Some(edited_id) = edited_id else {
        return items.to_vec();
    };
    let excluded = descendant_ids(items, edited_id);
    items
        .iter()
        .filter(|i| i.id() != edited_id && !excluded.contains(i.id()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Node {
        id: String,
        parent: Option<String>,
    }

    impl TreeItem for Node {
        fn id(&self) -> &str {
            &self.id
        }
        fn parent_id(&self) -> Option<&str> {
            self.parent.as_deref()
        }
    }

    fn node(id: &str, parent: Option<&str>) -> Node {
        Node {
            id: id.to_string(),
            parent: parent.map(|p| p.to_string()),
        }
    }

    /// A → B → C plus a sibling subtree root D.
    fn sample() -> Vec<Node> {
        vec![
            node("A", None),
            node("B", Some("A")),
            node("C", Some("B")),
            node("D", None),
        ]
    }

    #[test]
    fn collapsed_tree_shows_only_roots() {
        let rows = visible_rows(&sample(), &HashSet::new());
        let ids: Vec<&str> = rows.iter().map(|(n, _)| n.id.as_str()).collect();
        assert_eq!(ids, ["A", "D"]);
    }

    #[test]
    fn expanding_a_node_reveals_its_children_with_depth() {
        let mut expanded = HashSet::new();
        expanded.insert("A".to_string());
        let rows = visible_rows(&sample(), &expanded);
        let ids: Vec<(&str, usize)> = rows.iter().map(|(n, d)| (n.id.as_str(), *d)).collect();
        assert_eq!(ids, [("A", 0), ("B", 1), ("D", 0)]);
    }

    #[test]
    fn expand_all_uses_the_full_id_set() {
        let expanded = all_ids(&sample());
        let rows = visible_rows(&sample(), &expanded);
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn editing_b_excludes_b_and_c_but_offers_a_and_d() {
        let candidates = parent_candidates(&sample(), Some("B"));
        let ids: Vec<&str> = candidates.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["A", "D"]);
    }

    #[test]
    fn new_node_may_pick_any_parent() {
        assert_eq!(parent_candidates(&sample(), None).len(), 4);
    }

    #[test]
    fn descendants_are_transitive() {
        let descendants = descendant_ids(&sample(), "A");
        assert!(descendants.contains("B"));
        assert!(descendants.contains("C"));
        assert!(!descendants.contains("D"));
    }

    #[test]
    fn orphaned_parent_id_becomes_root() {
        let items = vec![node("A", None), node("B", Some("missing"))];
        let rows = visible_rows(&items, &HashSet::new());
        assert_eq!(rows.len(), 2);
    }
}
