//! Tree node produced by the hierarchy builder.

use core::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::record::{PersonId, PersonRecord};

/// Reserved id of the synthetic root. Real records must never use it.
pub const VIRTUAL_ROOT_ID: PersonId = 0;

/// Fixed display label of the synthetic root.
pub const VIRTUAL_ROOT_LABEL: &str = "Family trunk";

/// A node in the display tree.
///
/// Nodes either wrap a real person record or are the synthetic root
/// introduced to join multiple disconnected ancestries. Each node is owned
/// by exactly one parent; `children` ordering is the order in which the
/// child relationships were discovered while scanning the input.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    /// What this node represents.
    pub content: NodeContent,
    /// Child nodes, in discovery order.
    pub children: Vec<TreeNode>,
}

/// Content of a tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeContent {
    /// A real person record, payload carried through unchanged.
    Person(PersonRecord),
    /// The synthetic root. Not a person; detail lookups yield nothing.
    VirtualRoot,
}

impl TreeNode {
    /// Create a childless node wrapping a person record.
    pub fn person(record: PersonRecord) -> Self {
        Self {
            content: NodeContent::Person(record),
            children: Vec::new(),
        }
    }

    /// Create a person node with its children already attached.
    pub fn person_with_children(record: PersonRecord, children: Vec<TreeNode>) -> Self {
        Self {
            content: NodeContent::Person(record),
            children,
        }
    }

    /// Create the synthetic root over the given subtrees.
    pub fn virtual_root(children: Vec<TreeNode>) -> Self {
        Self {
            content: NodeContent::VirtualRoot,
            children,
        }
    }

    /// Node id; [`VIRTUAL_ROOT_ID`] for the synthetic root.
    pub fn id(&self) -> PersonId {
        match &self.content {
            NodeContent::Person(rec) => rec.id,
            NodeContent::VirtualRoot => VIRTUAL_ROOT_ID,
        }
    }

    /// Display label: the record's `name` detail, or the fixed synthetic
    /// root label, or empty when the record carries no name.
    pub fn label(&self) -> &str {
        match &self.content {
            NodeContent::Person(rec) => rec.name().unwrap_or(""),
            NodeContent::VirtualRoot => VIRTUAL_ROOT_LABEL,
        }
    }

    /// Check if this is the synthetic root.
    pub fn is_virtual(&self) -> bool {
        matches!(self.content, NodeContent::VirtualRoot)
    }

    /// Check if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Get the wrapped record, if this node represents a real person.
    pub fn as_person(&self) -> Option<&PersonRecord> {
        match &self.content {
            NodeContent::Person(rec) => Some(rec),
            NodeContent::VirtualRoot => None,
        }
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// A tree node always contains at least itself.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Depth of this subtree (a childless node has depth 1).
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(TreeNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Iterate over this subtree in pre-order (`self` first).
    pub fn iter(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Find a node by id anywhere in this subtree.
    pub fn find(&self, id: PersonId) -> Option<&TreeNode> {
        self.iter().find(|node| node.id() == id)
    }
}

/// Pre-order iterator over a subtree.
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.content {
            NodeContent::Person(rec) => write!(f, "Person[{}]: {}", rec.id, self.label()),
            NodeContent::VirtualRoot => write!(f, "VirtualRoot: {}", VIRTUAL_ROOT_LABEL),
        }
    }
}

/// Serializes to the nested document a hierarchical layout consumes:
/// the record's own fields flattened, then `children` as an array of the
/// same shape. The synthetic root serializes as
/// `{ "id": 0, "name": <label>, "children": [...] }`.
impl Serialize for TreeNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        match &self.content {
            NodeContent::Person(rec) => {
                map.serialize_entry("id", &rec.id)?;
                map.serialize_entry("paiId", &rec.pai_id)?;
                map.serialize_entry("maeId", &rec.mae_id)?;
                for (key, value) in &rec.details {
                    map.serialize_entry(key, value)?;
                }
            }
            NodeContent::VirtualRoot => {
                map.serialize_entry("id", &VIRTUAL_ROOT_ID)?;
                map.serialize_entry("name", VIRTUAL_ROOT_LABEL)?;
            }
        }
        map.serialize_entry("children", &self.children)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(id: PersonId, name: &str) -> TreeNode {
        TreeNode::person(PersonRecord::new(id).with_detail("name", name))
    }

    #[test]
    fn test_person_node_accessors() {
        let node = named(5, "Eva");
        assert_eq!(node.id(), 5);
        assert_eq!(node.label(), "Eva");
        assert!(!node.is_virtual());
        assert!(node.is_leaf());
        assert!(node.as_person().is_some());
    }

    #[test]
    fn test_virtual_root_is_not_a_person() {
        let root = TreeNode::virtual_root(vec![named(1, "A"), named(2, "B")]);
        assert!(root.is_virtual());
        assert_eq!(root.id(), VIRTUAL_ROOT_ID);
        assert_eq!(root.label(), VIRTUAL_ROOT_LABEL);
        assert!(root.as_person().is_none());
        assert_eq!(root.children.len(), 2);
    }

    #[test]
    fn test_preorder_iteration_and_len() {
        let tree = TreeNode::person_with_children(
            PersonRecord::new(1),
            vec![
                TreeNode::person_with_children(PersonRecord::new(2), vec![named(4, "D")]),
                named(3, "C"),
            ],
        );
        let order: Vec<PersonId> = tree.iter().map(|n| n.id()).collect();
        assert_eq!(order, vec![1, 2, 4, 3]);
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn test_find_by_id() {
        let tree = TreeNode::person_with_children(PersonRecord::new(1), vec![named(9, "Nina")]);
        assert_eq!(tree.find(9).map(|n| n.label()), Some("Nina"));
        assert!(tree.find(42).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(named(3, "Ana").to_string(), "Person[3]: Ana");
        assert_eq!(
            TreeNode::virtual_root(Vec::new()).to_string(),
            format!("VirtualRoot: {VIRTUAL_ROOT_LABEL}")
        );
    }

    #[test]
    fn test_serialize_nested_shape() {
        let tree = TreeNode::person_with_children(
            PersonRecord::new(1).with_detail("name", "Ana"),
            vec![named(2, "Bruno")],
        );
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Ana");
        assert_eq!(json["children"][0]["id"], 2);
        assert_eq!(json["children"][0]["children"], serde_json::json!([]));
    }

    #[test]
    fn test_serialize_virtual_root() {
        let json = serde_json::to_value(TreeNode::virtual_root(vec![named(1, "A")])).unwrap();
        assert_eq!(json["id"], 0);
        assert_eq!(json["name"], VIRTUAL_ROOT_LABEL);
        assert_eq!(json["children"].as_array().unwrap().len(), 1);
    }
}
