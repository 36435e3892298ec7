//! # lineage
//!
//! Flat genealogical records → one rooted display tree.
//!
//! A person record references its parents by id. The builder turns a
//! collection of such records into the nested structure a hierarchical
//! layout engine consumes, synthesizing a virtual root when multiple
//! disconnected ancestries are present:
//!
//! ```
//! use lineage::{build_hierarchy, records_from_json};
//!
//! let records = records_from_json(
//!     r#"[
//!         {"id": 1, "paiId": null, "maeId": null, "name": "Ana"},
//!         {"id": 2, "paiId": 1,    "maeId": null, "name": "Bruno"}
//!     ]"#,
//! ).unwrap();
//!
//! let tree = build_hierarchy(&records).expect("one root candidate");
//! assert_eq!(tree.label(), "Ana");
//! assert_eq!(tree.children[0].label(), "Bruno");
//! ```
//!
//! The builder is a pure function: no shared state, no mutation of its
//! input, the same tree for the same input every time. Loading the record
//! JSON and rendering the tree are the caller's concern.

/// Error types used across `lineage`.
pub mod error;
pub mod record;
pub mod tree;


pub use error::{Error, Result};
pub use record::{records_from_json, PersonId, PersonRecord};
pub use tree::{
    build_hierarchy, check_records, NodeContent, Severity, TreeNode, ValidationIssue,
    ValidationReport, VIRTUAL_ROOT_ID, VIRTUAL_ROOT_LABEL,
};
