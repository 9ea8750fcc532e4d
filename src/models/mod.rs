//! Data Models
//!
//! Core data structures used throughout the crate:
//!
//! - `GraphNode` - universal node model for all object types
//! - `TypeSchema` / `TypeSchemaProvider` - per-type field and edge metadata
//! - `folder_structure` - the standard per-user folder bootstrap layout

pub mod folder_structure;
mod node;
mod schema;

pub use node::{
    ChildRef, GraphNode, ParentRef, ValidationError, CHILDREN_LABEL, CHILD_OF_LABEL, FOLDER_TYPE,
    ROOT_NODE_ID,
};
pub use schema::{
    CheckboxField, DateField, NumberField, RadioField, RadioOption, StandardSchemaProvider,
    TypeSchema, TypeSchemaProvider,
};
