//! Display preference resolution for typed labeled fields
//!
//! Items of a labeled field are shown grouped under a display label and
//! optionally prefixed. Both choices are driven by ordered preference lists:
//! the first applicable source wins, and every list ends in a source that
//! always applies.
//!
//! # Architecture
//!
//! - **Sources**: closed enums ([`LabelSource`], [`PrefixSource`]) with a static exclusion table
//! - **Variants**: formatters are table data ([`LABELED`], [`TYPED_LABELED`]) over one algorithm
//! - **Pure resolution**: [`resolve_label`], [`resolve_value`] and [`group_items`] never do I/O
//! - **Hydration at the edge**: [`DisplayItem::hydrate`] resolves referenced labels up front
//! - **Settings tables**: [`PreferenceTable`] turns edited rows back into a preference list
//!
//! # Example
//!
//! ```
//! use typed_labeled_fields::FormatterSettings;
//! use typed_labeled_fields_display::{DisplayItem, DisplayPreferences, TYPED_LABELED};
//!
//! let prefs = DisplayPreferences::from_settings(&TYPED_LABELED, &FormatterSettings::new());
//! let items = vec![DisplayItem::text("Subject", "Lyon").with_type_label("Place")];
//! let group = prefs.view(&items).unwrap();
//! assert_eq!(group.labels().collect::<Vec<_>>(), vec!["Place"]);
//! ```

pub mod error;
pub mod formatter;
pub mod group;
pub mod item;
pub mod preference;
pub mod resolve;
pub mod source;
pub mod table;
pub mod variant;

pub use error::{DisplayError, Result};
pub use formatter::{view_field, DisplayPreferences};
pub use group::{group_items, FieldGroup, Group};
pub use item::{DisplayItem, MainValue};
pub use preference::{options_for, PreferenceList};
pub use resolve::{resolve_label, resolve_prefix, resolve_value, Body, RenderedValue};
pub use source::{LabelSource, PrefixSource, Source, Vocabulary};
pub use table::{PreferenceTable, Region, RowInput, TableRow};
pub use variant::{variant_for, PrefixSlot, Variant, LABELED, TYPED_LABELED};
