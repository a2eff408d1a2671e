//! Typed labeled field types and registry
//!
//! `typed-labeled-fields` defines field kinds whose items pair a main value
//! with an optional free-text label and, for typed kinds, an optional type
//! reference. It knows nothing about how items are displayed; formatter
//! settings are stored verbatim on each definition for the display layer to
//! interpret.
//!
//! # Architecture
//!
//! - **Closed kinds**: every field is one of the [`FieldKind`] variants
//! - **YAML on disk**: one `.yaml` file per field definition
//! - **Host lookups**: referenced entities are resolved through [`ReferenceLookup`]
//! - **Default seeding**: `with_defaults()` writes defaults that don't exist, preserves customizations

pub mod context;
pub mod error;
pub mod types;
pub mod validation;

pub use context::{FieldDefaults, FieldsContext, FieldsContextBuilder};
pub use error::{FieldsError, Result};
pub use types::{
    is_empty_reference, FieldDef, FieldItem, FieldKind, FormatterSettings, ItemValue,
    OriginStatementValue, PropertySettings, StorageSettings, TitleValue, ValueShape,
};
pub use validation::{validate_item, validate_items, validate_references, ReferenceLookup, Violation};
