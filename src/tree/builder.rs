//! The hierarchy builder: flat records in, one rooted tree out.
//!
//! ```text
//! id=1 (no parents)      ┐                 Person[1]
//! id=2 paiId=1           │  build          ├── Person[2]
//! id=3 paiId=1           │ ───────▶        └── Person[3]
//! ```
//!
//! With several parentless records the ancestries are joined under a
//! synthetic root; with none, there is no tree to build and the result is
//! `None`.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::node::TreeNode;
use crate::record::{PersonId, PersonRecord};

/// One record's place in the tree under construction. Children are slot
/// indices; the owned [`TreeNode`] structure is materialized at the end.
#[derive(Debug)]
struct Slot {
    record: PersonRecord,
    children: Vec<usize>,
}

/// Build a single rooted display tree from a flat record collection.
///
/// The input is scanned once, in order:
/// - a record whose `pai_id` resolves to a known id becomes a child of
///   that record, in discovery order;
/// - a record with neither parent reference set becomes a root candidate;
/// - anything else (dangling `pai_id`, or only `mae_id` set) is silently
///   left out of the tree. Use [`super::check_records`] to surface these.
///
/// Zero root candidates yield `None`; one yields that node as the root;
/// several are joined under a synthetic root in encounter order.
///
/// The builder is total: it never panics and never mutates its input.
/// Duplicate ids resolve first-wins; later occurrences are ignored.
pub fn build_hierarchy(records: &[PersonRecord]) -> Option<TreeNode> {
    let mut slots: Vec<Slot> = Vec::with_capacity(records.len());
    let mut by_id: HashMap<PersonId, usize> = HashMap::with_capacity(records.len());

    // Lookup over cloned records, first occurrence of an id wins.
    for record in records {
        if let Entry::Vacant(entry) = by_id.entry(record.id) {
            entry.insert(slots.len());
            slots.push(Slot {
                record: record.clone(),
                children: Vec::new(),
            });
        }
    }

    let mut roots: Vec<usize> = Vec::new();

    for idx in 0..slots.len() {
        let pai_id = slots[idx].record.pai_id;
        match pai_id.and_then(|id| by_id.get(&id).copied()) {
            Some(parent) => slots[parent].children.push(idx),
            None => {
                if slots[idx].record.is_root_candidate() {
                    roots.push(idx);
                }
            }
        }
    }

    let mut slots: Vec<Option<Slot>> = slots.into_iter().map(Some).collect();

    match roots.as_slice() {
        [] => None,
        [root] => take_subtree(&mut slots, *root),
        many => {
            let children: Vec<TreeNode> = many
                .iter()
                .filter_map(|&root| take_subtree(&mut slots, root))
                .collect();
            Some(TreeNode::virtual_root(children))
        }
    }
}

/// Move a slot and its descendants out of the arena as an owned subtree.
///
/// Each slot is taken at most once, so a self-referential record (its own
/// parent) cannot loop: the second visit finds the slot empty and stops.
fn take_subtree(slots: &mut [Option<Slot>], idx: usize) -> Option<TreeNode> {
    let slot = slots[idx].take()?;
    let children: Vec<TreeNode> = slot
        .children
        .iter()
        .filter_map(|&child| take_subtree(slots, child))
        .collect();
    Some(TreeNode::person_with_children(slot.record, children))
}
