//! Display items: the per-item data preference resolution reads.

use tracing::debug;
use typed_labeled_fields::{FieldDef, FieldItem, ItemValue, ReferenceLookup};

/// Main value of an item, reduced to what display needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainValue {
    /// Plain text, possibly spanning several lines.
    Text(String),
    /// A URI rendered as a link.
    Uri(String),
    /// An entity reference and the referenced entity's display label, if it
    /// could be resolved.
    Reference {
        target_id: String,
        label: Option<String>,
    },
}

/// One field item ready for display.
///
/// Referenced labels are resolved before resolution runs, so resolving over
/// a display item never performs lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub label: Option<String>,
    /// Display label of the item's type reference.
    pub type_label: Option<String>,
    /// Display name of the owning field.
    pub field_label: String,
    pub value: MainValue,
}

impl DisplayItem {
    pub fn new(field_label: impl Into<String>, value: MainValue) -> Self {
        Self {
            label: None,
            type_label: None,
            field_label: field_label.into(),
            value,
        }
    }

    /// A plain text item.
    pub fn text(field_label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field_label, MainValue::Text(value.into()))
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_type_label(mut self, type_label: impl Into<String>) -> Self {
        self.type_label = Some(type_label.into());
        self
    }

    /// The label, if present and non-empty.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.is_empty())
    }

    /// The type's display label, if present and non-empty.
    pub fn type_label(&self) -> Option<&str> {
        self.type_label.as_deref().filter(|l| !l.is_empty())
    }

    /// Build a display item from a stored field item.
    ///
    /// The type label and any referenced entity label are looked up once
    /// each. A failed lookup leaves that source empty, so resolution falls
    /// through to the next preference instead of failing.
    pub async fn hydrate(def: &FieldDef, item: &FieldItem, lookup: &dyn ReferenceLookup) -> Self {
        let type_label = match (def.kind.is_typed(), item.type_target()) {
            (true, Some(id)) => lookup_label(def, def.type_target_type.as_deref(), id, lookup).await,
            _ => None,
        };

        let value = match &item.value {
            ItemValue::Text { value } => MainValue::Text(value.clone()),
            ItemValue::Uri { value } => MainValue::Uri(value.clone()),
            ItemValue::Reference { target_id } => MainValue::Reference {
                target_id: target_id.clone(),
                label: lookup_label(def, def.target_type.as_deref(), target_id, lookup).await,
            },
            ItemValue::Title(title) => MainValue::Text(title.to_string()),
            ItemValue::OriginStatement(origin) => MainValue::Text(origin.to_string()),
        };

        Self {
            label: item.label().map(str::to_string),
            type_label,
            field_label: def.display_label().to_string(),
            value,
        }
    }

    /// Hydrate every item of a field, in order.
    pub async fn hydrate_all(
        def: &FieldDef,
        items: &[FieldItem],
        lookup: &dyn ReferenceLookup,
    ) -> Vec<Self> {
        let mut hydrated = Vec::with_capacity(items.len());
        for item in items {
            hydrated.push(Self::hydrate(def, item, lookup).await);
        }
        hydrated
    }
}

async fn lookup_label(
    def: &FieldDef,
    entity_type: Option<&str>,
    id: &str,
    lookup: &dyn ReferenceLookup,
) -> Option<String> {
    let Some(entity_type) = entity_type else {
        debug!(field = %def.name, id, "no target entity type configured");
        return None;
    };
    let label = lookup.label(entity_type, id).await;
    if label.is_none() {
        debug!(field = %def.name, entity_type, id, "referenced entity not found");
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use typed_labeled_fields::{FieldKind, OriginStatementValue, TitleValue};

    struct Terms;

    #[async_trait]
    impl ReferenceLookup for Terms {
        async fn label(&self, entity_type: &str, id: &str) -> Option<String> {
            match (entity_type, id) {
                ("taxonomy_term", "1") => Some("Place".into()),
                ("node", "7") => Some("Seven Pillars".into()),
                _ => None,
            }
        }
    }

    fn typed_field(kind: FieldKind) -> FieldDef {
        let mut def = FieldDef::new("subject", "Subject", kind);
        def.type_target_type = Some("taxonomy_term".into());
        def.target_type = Some("node".into());
        def
    }

    #[test]
    fn blank_label_is_absent() {
        let item = DisplayItem::text("Genre", "x").with_label("").with_type_label("");
        assert_eq!(item.label(), None);
        assert_eq!(item.type_label(), None);
    }

    #[tokio::test]
    async fn hydrate_resolves_type_label() {
        let def = typed_field(FieldKind::TypedLabeledTextShort);
        let item = FieldItem::new(ItemValue::Text {
            value: "Lyon".into(),
        })
        .with_label("Regional")
        .with_type("1");
        let display = DisplayItem::hydrate(&def, &item, &Terms).await;
        assert_eq!(
            display,
            DisplayItem::text("Subject", "Lyon")
                .with_label("Regional")
                .with_type_label("Place")
        );
    }

    #[tokio::test]
    async fn missing_type_is_inapplicable() {
        let def = typed_field(FieldKind::TypedLabeledTextShort);
        let item = FieldItem::new(ItemValue::Text {
            value: "Lyon".into(),
        })
        .with_type("404");
        let display = DisplayItem::hydrate(&def, &item, &Terms).await;
        assert_eq!(display.type_label, None);
    }

    #[tokio::test]
    async fn untyped_kind_ignores_type() {
        let def = typed_field(FieldKind::LabeledEntityReference);
        let item = FieldItem::new(ItemValue::Reference {
            target_id: "7".into(),
        })
        .with_type("1");
        let display = DisplayItem::hydrate(&def, &item, &Terms).await;
        assert_eq!(display.type_label, None);
        assert_eq!(
            display.value,
            MainValue::Reference {
                target_id: "7".into(),
                label: Some("Seven Pillars".into()),
            }
        );
    }

    #[tokio::test]
    async fn composite_values_are_stringified() {
        let def = typed_field(FieldKind::TypedLabeledTitle);
        let items = vec![
            FieldItem::new(ItemValue::Title(TitleValue {
                title: "Dune".into(),
                subtitle: "A novel".into(),
                ..Default::default()
            })),
            FieldItem::new(ItemValue::OriginStatement(OriginStatementValue {
                place: "Philadelphia".into(),
                agent: "Chilton".into(),
                ..Default::default()
            })),
        ];
        let display = DisplayItem::hydrate_all(&def, &items, &Terms).await;
        assert_eq!(display[0].value, MainValue::Text("Dune: A novel".into()));
        assert_eq!(display[1].value, MainValue::Text("Philadelphia: Chilton".into()));
    }
}
