//! Field item validation.
//!
//! Synchronous checks (lengths, value shape, conditional requirement of the
//! main property) run against the field definition alone. Reference checks
//! need to look entities up and go through [`ReferenceLookup`].

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::types::{
    FieldDef, FieldItem, ItemValue, ValueShape, PROPERTY_LABEL, PROPERTY_TARGET, PROPERTY_TITLE,
    PROPERTY_TYPE_TARGET,
};

/// Resolves referenced entities to their display labels.
///
/// Implemented by the host that owns the referenced entities. Returns `None`
/// when the entity does not exist or cannot be loaded.
#[async_trait]
pub trait ReferenceLookup: Send + Sync {
    async fn label(&self, entity_type: &str, id: &str) -> Option<String>;
}

/// A single failed constraint, addressed as `<delta>` or `<delta>.<property>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl Violation {
    fn at(delta: usize, property: Option<&str>, message: String) -> Self {
        let path = match property {
            Some(p) => format!("{delta}.{p}"),
            None => delta.to_string(),
        };
        Self { path, message }
    }
}

/// Run the synchronous constraints over every item of a field.
pub fn validate_items(def: &FieldDef, items: &[FieldItem]) -> Vec<Violation> {
    let violations: Vec<Violation> = items
        .iter()
        .enumerate()
        .flat_map(|(delta, item)| validate_item(def, delta, item))
        .collect();
    debug!(
        field = %def.name,
        items = items.len(),
        violations = violations.len(),
        "validated field items"
    );
    violations
}

/// Run the synchronous constraints over one item.
pub fn validate_item(def: &FieldDef, delta: usize, item: &FieldItem) -> Vec<Violation> {
    let mut violations = Vec::new();
    let name = def.display_label();

    let expected = def.kind.value_shape();
    if item.value.shape() != expected {
        violations.push(Violation::at(
            delta,
            None,
            format!("{name}: expected a {} value", shape_name(expected)),
        ));
        return violations;
    }

    if !def.kind.is_typed() && item.type_target().is_some() {
        violations.push(Violation::at(
            delta,
            Some(PROPERTY_TYPE_TARGET),
            format!("{name}: does not accept a type"),
        ));
    }

    let storage = def.effective_storage();
    if let (Some(label), Some(max)) = (item.label(), storage.max_length(PROPERTY_LABEL)) {
        if label.chars().count() > max as usize {
            violations.push(Violation::at(
                delta,
                Some(PROPERTY_LABEL),
                format!("The label for {name}: may not be longer than {max} characters."),
            ));
        }
    }
    for (property, value) in item.value.properties() {
        let Some(max) = storage.max_length(property) else {
            continue;
        };
        if value.chars().count() > max as usize {
            violations.push(Violation::at(
                delta,
                Some(property),
                format!("{name}: may not be longer than {max} characters."),
            ));
        }
    }

    if item.is_empty() && has_secondary_input(def, item) {
        let (property, title) = match def.kind.main_property() {
            Some(p) => (Some(p), property_title(p)),
            None => (None, "Place, agent or date"),
        };
        violations.push(Violation::at(
            delta,
            property,
            format!("{title} field is required."),
        ));
    }

    violations
}

/// Whether anything other than the main property has been filled in.
fn has_secondary_input(def: &FieldDef, item: &FieldItem) -> bool {
    if item.label().is_some() || item.type_target().is_some() {
        return true;
    }
    let main = def.kind.main_property();
    item.value
        .properties()
        .into_iter()
        .any(|(property, value)| Some(property) != main && !value.trim().is_empty())
}

fn property_title(property: &str) -> &'static str {
    match property {
        PROPERTY_TARGET => "Entity",
        PROPERTY_TITLE => "Title",
        _ => "Value",
    }
}

fn shape_name(shape: ValueShape) -> &'static str {
    match shape {
        ValueShape::Text => "text",
        ValueShape::Uri => "uri",
        ValueShape::Reference => "reference",
        ValueShape::Title => "title",
        ValueShape::OriginStatement => "origin-statement",
    }
}

/// Check that every non-empty reference on the items points at an existing
/// entity. Empty references (`""` or `"0"`) are valid.
pub async fn validate_references(
    def: &FieldDef,
    items: &[FieldItem],
    lookup: &dyn ReferenceLookup,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (delta, item) in items.iter().enumerate() {
        if let Some(id) = item.type_target() {
            match def.type_target_type.as_deref() {
                Some(entity_type) => {
                    if lookup.label(entity_type, id).await.is_none() {
                        violations.push(missing_reference(
                            delta,
                            PROPERTY_TYPE_TARGET,
                            entity_type,
                            id,
                        ));
                    }
                }
                None => {
                    warn!(field = %def.name, "type reference set but no type target configured");
                }
            }
        }

        if let ItemValue::Reference { target_id } = &item.value {
            if item.value.is_empty() {
                continue;
            }
            match def.target_type.as_deref() {
                Some(entity_type) => {
                    if lookup.label(entity_type, target_id).await.is_none() {
                        violations.push(missing_reference(
                            delta,
                            PROPERTY_TARGET,
                            entity_type,
                            target_id,
                        ));
                    }
                }
                None => {
                    warn!(field = %def.name, "entity reference set but no target type configured");
                }
            }
        }
    }
    violations
}

fn missing_reference(delta: usize, property: &str, entity_type: &str, id: &str) -> Violation {
    Violation::at(
        delta,
        Some(property),
        format!("The referenced entity ({entity_type}: {id}) does not exist."),
    )
}
