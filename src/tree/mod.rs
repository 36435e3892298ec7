//! Display-tree construction from flat person records.
//!
//! # The Shape of the Problem
//!
//! Genealogical data arrives flat — one record per person, parents
//! referenced by id — but hierarchical layout wants a single rooted tree:
//!
//! ```text
//! Input (flat)                │ Output (tree)
//! ────────────────────────────┼──────────────────────
//! {id:1}                      │ VirtualRoot
//! {id:2, paiId:1}             │ ├── Person[1]
//! {id:5}                      │ │   └── Person[2]
//! {id:6, paiId:5}             │ └── Person[5]
//!                             │     └── Person[6]
//! ```
//!
//! Real data is messy: several disconnected ancestries (joined under a
//! synthetic root), references that resolve to nothing, records with only
//! a mother link, duplicate ids. [`build_hierarchy`] tolerates all of it
//! and always produces either one connected tree or `None` — never a
//! forest, never a panic. [`check_records`] reports what the builder
//! silently tolerated.
//!
//! # Module Overview
//!
//! - [`builder`]: the one-shot flat-to-tree transform
//! - [`node`]: the [`TreeNode`] output model and its renderer-facing
//!   serialization
//! - [`validate`]: advisory diagnostics over the input collection

mod builder;
mod node;
mod validate;

pub use builder::build_hierarchy;
pub use node::{Descendants, NodeContent, TreeNode, VIRTUAL_ROOT_ID, VIRTUAL_ROOT_LABEL};
pub use validate::{check_records, Severity, ValidationIssue, ValidationReport};
