//! Core field types for the typed labeled fields registry.
//!
//! A field definition names a field, picks one of the closed set of
//! [`FieldKind`]s and carries the storage and formatter settings for it.
//! Field items are the stored values: an optional label, an optional type
//! reference and a main value whose shape depends on the kind.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use ulid::Ulid;

pub const PROPERTY_LABEL: &str = "label";
pub const PROPERTY_TYPE_TARGET: &str = "type_target_id";
pub const PROPERTY_TARGET: &str = "target_id";
pub const PROPERTY_VALUE: &str = "value";

pub const PROPERTY_NONSORT: &str = "nonsort";
pub const PROPERTY_TITLE: &str = "title";
pub const PROPERTY_SUBTITLE: &str = "subtitle";
pub const PROPERTY_PARTNUMBER: &str = "partnumber";
pub const PROPERTY_PARTNAME: &str = "partname";

pub const PROPERTY_PLACE: &str = "place";
pub const PROPERTY_AGENT: &str = "agent";
pub const PROPERTY_DATE: &str = "date";
pub const PROPERTY_ADDITIONAL: &str = "additional";

/// Maximum stored length of a URL value.
pub const URL_LENGTH: u32 = 2048;

/// The kind of a field. Determines which properties an item carries and
/// the shape of its main value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Label plus an entity reference. Has no type property.
    LabeledEntityReference,
    TypedLabeledEntityReference,
    TypedLabeledTextShort,
    TypedLabeledTextLong,
    TypedLabeledTitle,
    TypedLabeledOriginStatement,
    TypedLabeledUrl,
    TypedIdentifier,
}

/// Shape of the main value of a field item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    Text,
    Uri,
    Reference,
    Title,
    OriginStatement,
}

impl FieldKind {
    /// Every kind, in declaration order.
    pub const ALL: [FieldKind; 8] = [
        FieldKind::LabeledEntityReference,
        FieldKind::TypedLabeledEntityReference,
        FieldKind::TypedLabeledTextShort,
        FieldKind::TypedLabeledTextLong,
        FieldKind::TypedLabeledTitle,
        FieldKind::TypedLabeledOriginStatement,
        FieldKind::TypedLabeledUrl,
        FieldKind::TypedIdentifier,
    ];

    /// Persisted identifier of the kind.
    pub fn id(self) -> &'static str {
        match self {
            FieldKind::LabeledEntityReference => "labeled_entity_reference",
            FieldKind::TypedLabeledEntityReference => "typed_labeled_entity_reference",
            FieldKind::TypedLabeledTextShort => "typed_labeled_text_short",
            FieldKind::TypedLabeledTextLong => "typed_labeled_text_long",
            FieldKind::TypedLabeledTitle => "typed_labeled_title",
            FieldKind::TypedLabeledOriginStatement => "typed_labeled_origin_statement",
            FieldKind::TypedLabeledUrl => "typed_labeled_url",
            FieldKind::TypedIdentifier => "typed_identifier",
        }
    }

    /// Whether items of this kind carry a type reference.
    pub fn is_typed(self) -> bool {
        !matches!(self, FieldKind::LabeledEntityReference)
    }

    pub fn value_shape(self) -> ValueShape {
        match self {
            FieldKind::LabeledEntityReference | FieldKind::TypedLabeledEntityReference => {
                ValueShape::Reference
            }
            FieldKind::TypedLabeledTextShort
            | FieldKind::TypedLabeledTextLong
            | FieldKind::TypedIdentifier => ValueShape::Text,
            FieldKind::TypedLabeledUrl => ValueShape::Uri,
            FieldKind::TypedLabeledTitle => ValueShape::Title,
            FieldKind::TypedLabeledOriginStatement => ValueShape::OriginStatement,
        }
    }

    /// The property that must be filled for an item to count as present.
    ///
    /// Origin statements have none: any one of place, agent or date will do.
    pub fn main_property(self) -> Option<&'static str> {
        match self.value_shape() {
            ValueShape::Reference => Some(PROPERTY_TARGET),
            ValueShape::Text | ValueShape::Uri => Some(PROPERTY_VALUE),
            ValueShape::Title => Some(PROPERTY_TITLE),
            ValueShape::OriginStatement => None,
        }
    }

    /// Storage settings a new field of this kind starts with.
    pub fn default_storage(self) -> StorageSettings {
        let mut storage = StorageSettings::default();
        storage.insert(PROPERTY_LABEL, PropertySettings::bounded(255));
        match self {
            FieldKind::LabeledEntityReference | FieldKind::TypedLabeledEntityReference => {}
            FieldKind::TypedLabeledTextShort => {
                storage.insert(PROPERTY_VALUE, PropertySettings::bounded(255));
            }
            FieldKind::TypedLabeledTextLong | FieldKind::TypedIdentifier => {
                storage.insert(PROPERTY_VALUE, PropertySettings::default());
            }
            FieldKind::TypedLabeledUrl => {
                storage.insert(PROPERTY_VALUE, PropertySettings::bounded(URL_LENGTH));
            }
            FieldKind::TypedLabeledTitle => {
                storage.insert(PROPERTY_NONSORT, PropertySettings::bounded(32));
                storage.insert(PROPERTY_TITLE, PropertySettings::bounded(1024));
                storage.insert(PROPERTY_SUBTITLE, PropertySettings::bounded(1024));
                storage.insert(PROPERTY_PARTNUMBER, PropertySettings::bounded(255));
                storage.insert(PROPERTY_PARTNAME, PropertySettings::bounded(255));
            }
            FieldKind::TypedLabeledOriginStatement => {
                storage.insert(PROPERTY_PLACE, PropertySettings::bounded(512));
                storage.insert(PROPERTY_AGENT, PropertySettings::bounded(255));
                storage.insert(PROPERTY_DATE, PropertySettings::bounded(255));
                storage.insert(PROPERTY_ADDITIONAL, PropertySettings::bounded(1024));
            }
        }
        storage
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Storage settings of a single item property.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PropertySettings {
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default)]
    pub is_ascii: bool,
    #[serde(
        default,
        deserialize_with = "lenient_length",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_length: Option<u32>,
}

impl PropertySettings {
    pub fn bounded(max_length: u32) -> Self {
        Self {
            max_length: Some(max_length),
            ..Self::default()
        }
    }
}

/// Accept lengths stored either as integers or as numeric strings.
fn lenient_length<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Stored {
        Number(u32),
        Text(String),
    }

    match Option::<Stored>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Stored::Number(n)) => Ok(Some(n)),
        Some(Stored::Text(s)) => s
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid max_length: {s:?}"))),
    }
}

/// Per-property storage settings, keyed by property name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct StorageSettings(BTreeMap<String, PropertySettings>);

impl StorageSettings {
    pub fn insert(&mut self, property: &str, settings: PropertySettings) {
        self.0.insert(property.to_string(), settings);
    }

    pub fn get(&self, property: &str) -> Option<&PropertySettings> {
        self.0.get(property)
    }

    /// Maximum length of the given property, if it is bounded.
    pub fn max_length(&self, property: &str) -> Option<u32> {
        self.get(property).and_then(|s| s.max_length)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fill in properties missing from `self` with those of `defaults`.
    fn merged_over(&self, defaults: StorageSettings) -> StorageSettings {
        let mut merged = defaults;
        for (property, settings) in &self.0 {
            merged.0.insert(property.clone(), settings.clone());
        }
        merged
    }
}

/// Persisted formatter settings: setting name to an ordered list of source
/// identifiers.
///
/// Stored verbatim; interpreting the identifiers is up to the display layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FormatterSettings(BTreeMap<String, Vec<String>>);

impl FormatterSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, setting: &str) -> Option<&[String]> {
        self.0.get(setting).map(Vec::as_slice)
    }

    pub fn set<I, S>(&mut self, setting: &str, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0
            .insert(setting.to_string(), ids.into_iter().map(Into::into).collect());
    }

    /// Builder-style variant of [`FormatterSettings::set`].
    pub fn with<I, S>(mut self, setting: &str, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(setting, ids);
        self
    }

    pub fn contains(&self, setting: &str) -> bool {
        self.0.contains_key(setting)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// A field definition: the complete schema for one field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDef {
    pub id: Ulid,
    /// Machine name, unique within the registry.
    pub name: String,
    /// Human readable name shown to readers.
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub kind: FieldKind,
    /// Entity type the main value of reference kinds points at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    /// Entity type the type property points at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_target_type: Option<String>,
    #[serde(default, skip_serializing_if = "StorageSettings::is_empty")]
    pub storage: StorageSettings,
    /// Default linked data predicate used when the type property is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_data: Option<String>,
    #[serde(default, skip_serializing_if = "FormatterSettings::is_empty")]
    pub display: FormatterSettings,
}

impl FieldDef {
    /// A field of the given kind with default storage and no formatter settings.
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: Ulid::new(),
            name: name.into(),
            label: label.into(),
            description: None,
            kind,
            target_type: None,
            type_target_type: None,
            storage: kind.default_storage(),
            linked_data: None,
            display: FormatterSettings::default(),
        }
    }

    /// The display name, falling back to the machine name when unset.
    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            &self.name
        } else {
            &self.label
        }
    }

    /// Stored storage settings with any missing property filled from the
    /// kind's defaults.
    pub fn effective_storage(&self) -> StorageSettings {
        self.storage.merged_over(self.kind.default_storage())
    }
}

/// Title parts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TitleValue {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub nonsort: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub partnumber: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub partname: String,
}

static TRAILING_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" *: *$").expect("valid trailing colon pattern"));
static TERMINAL_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[….!-?] *$").expect("valid terminal punctuation pattern"));
static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,] *$").expect("valid trailing comma pattern"));

impl fmt::Display for TitleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = format!("{}{}", self.nonsort, self.title);
        if !self.subtitle.is_empty() {
            s = TRAILING_COLON.replace(&s, "").into_owned();
            s.push_str(": ");
            s.push_str(&self.subtitle);
        }
        if !self.partnumber.is_empty() {
            s.push_str(if TERMINAL_PUNCTUATION.is_match(&s) { " " } else { ". " });
            s.push_str(&self.partnumber);
            if !self.partname.is_empty() {
                s.push_str(if TRAILING_COMMA.is_match(&s) { " " } else { ", " });
                s.push_str(&self.partname);
            }
        } else if !self.partname.is_empty() {
            s.push_str(if TERMINAL_PUNCTUATION.is_match(&s) { " " } else { ". " });
            s.push_str(&self.partname);
        }
        f.write_str(&s)
    }
}

/// Origin statement parts: where, by whom and when something was produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OriginStatementValue {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub place: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub agent: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub additional: String,
}

impl fmt::Display for OriginStatementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = self.place.trim().to_string();
        let agent = self.agent.trim();
        if !agent.is_empty() {
            if s.is_empty() {
                s = agent.to_string();
            } else {
                s.push_str(": ");
                s.push_str(agent);
            }
        }
        let date = self.date.trim();
        if !date.is_empty() {
            if s.is_empty() {
                s = date.to_string();
            } else {
                s.push_str(", ");
                s.push_str(date);
            }
        }
        let additional = self.additional.trim();
        if !additional.is_empty() {
            s.push_str(&format!(" ({additional})"));
        }
        f.write_str(&s)
    }
}

/// The main value of a field item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ItemValue {
    Text { value: String },
    Uri { value: String },
    Reference { target_id: String },
    Title(TitleValue),
    OriginStatement(OriginStatementValue),
}

impl ItemValue {
    pub fn shape(&self) -> ValueShape {
        match self {
            ItemValue::Text { .. } => ValueShape::Text,
            ItemValue::Uri { .. } => ValueShape::Uri,
            ItemValue::Reference { .. } => ValueShape::Reference,
            ItemValue::Title(_) => ValueShape::Title,
            ItemValue::OriginStatement(_) => ValueShape::OriginStatement,
        }
    }

    /// Whether the main value is missing.
    pub fn is_empty(&self) -> bool {
        match self {
            ItemValue::Text { value } | ItemValue::Uri { value } => value.is_empty(),
            ItemValue::Reference { target_id } => is_empty_reference(target_id),
            ItemValue::Title(t) => t.title.is_empty(),
            ItemValue::OriginStatement(o) => {
                o.place.trim().is_empty() && o.agent.trim().is_empty() && o.date.trim().is_empty()
            }
        }
    }

    /// Named string properties of the value, for length checks.
    pub fn properties(&self) -> Vec<(&'static str, &str)> {
        match self {
            ItemValue::Text { value } | ItemValue::Uri { value } => vec![(PROPERTY_VALUE, value)],
            ItemValue::Reference { target_id } => vec![(PROPERTY_TARGET, target_id)],
            ItemValue::Title(t) => vec![
                (PROPERTY_NONSORT, &t.nonsort),
                (PROPERTY_TITLE, &t.title),
                (PROPERTY_SUBTITLE, &t.subtitle),
                (PROPERTY_PARTNUMBER, &t.partnumber),
                (PROPERTY_PARTNAME, &t.partname),
            ],
            ItemValue::OriginStatement(o) => vec![
                (PROPERTY_PLACE, &o.place),
                (PROPERTY_AGENT, &o.agent),
                (PROPERTY_DATE, &o.date),
                (PROPERTY_ADDITIONAL, &o.additional),
            ],
        }
    }
}

/// `"0"` and the empty string both mean "no reference".
pub fn is_empty_reference(target_id: &str) -> bool {
    target_id.is_empty() || target_id == "0"
}

/// A single stored value of a field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_target_id: Option<String>,
    pub value: ItemValue,
}

impl FieldItem {
    pub fn new(value: ItemValue) -> Self {
        Self {
            label: None,
            type_target_id: None,
            value,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_type(mut self, target_id: impl Into<String>) -> Self {
        self.type_target_id = Some(target_id.into());
        self
    }

    /// The label, if one is set and non-empty.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.is_empty())
    }

    /// The type reference target, if one is set.
    pub fn type_target(&self) -> Option<&str> {
        self.type_target_id
            .as_deref()
            .filter(|id| !is_empty_reference(id))
    }

    /// Only the main value decides emptiness; a lone label or type does not.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(nonsort: &str, title: &str, subtitle: &str, number: &str, name: &str) -> TitleValue {
        TitleValue {
            nonsort: nonsort.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            partnumber: number.into(),
            partname: name.into(),
        }
    }

    #[test]
    fn field_def_yaml_round_trip() {
        let mut field = FieldDef::new("genre", "Genre", FieldKind::TypedLabeledTextShort);
        field.type_target_type = Some("taxonomy_term".into());
        field
            .display
            .set("display_label_source", ["label", "field"]);
        let yaml = serde_yaml_ng::to_string(&field).unwrap();
        let parsed: FieldDef = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(field, parsed);
        assert!(yaml.contains("kind: typed_labeled_text_short"));
    }

    #[test]
    fn stored_max_length_accepts_strings() {
        let yaml = r#"
id: 00000000000000000000000001
name: subject
label: Subject
kind: typed_labeled_text_short
storage:
  label:
    max_length: "128"
  value:
    max_length: 64
"#;
        let field: FieldDef = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(field.storage.max_length(PROPERTY_LABEL), Some(128));
        assert_eq!(field.storage.max_length(PROPERTY_VALUE), Some(64));
    }

    #[test]
    fn stored_max_length_rejects_garbage() {
        let yaml = r#"
label:
  max_length: "lots"
"#;
        assert!(serde_yaml_ng::from_str::<StorageSettings>(yaml).is_err());
    }

    #[test]
    fn value_length_is_read_from_value_settings() {
        let yaml = r#"
id: 00000000000000000000000001
name: subject
label: Subject
kind: typed_labeled_text_short
storage:
  label:
    max_length: 10
  value:
    max_length: 40
"#;
        let field: FieldDef = serde_yaml_ng::from_str(yaml).unwrap();
        let storage = field.effective_storage();
        assert_eq!(storage.max_length(PROPERTY_LABEL), Some(10));
        assert_eq!(storage.max_length(PROPERTY_VALUE), Some(40));
    }

    #[test]
    fn effective_storage_fills_missing_properties() {
        let mut field = FieldDef::new("link", "Link", FieldKind::TypedLabeledUrl);
        field.storage = StorageSettings::default();
        let storage = field.effective_storage();
        assert_eq!(storage.max_length(PROPERTY_LABEL), Some(255));
        assert_eq!(storage.max_length(PROPERTY_VALUE), Some(URL_LENGTH));
    }

    #[test]
    fn default_storage_per_kind() {
        let title = FieldKind::TypedLabeledTitle.default_storage();
        assert_eq!(title.max_length(PROPERTY_NONSORT), Some(32));
        assert_eq!(title.max_length(PROPERTY_SUBTITLE), Some(1024));
        let origin = FieldKind::TypedLabeledOriginStatement.default_storage();
        assert_eq!(origin.max_length(PROPERTY_PLACE), Some(512));
        let long = FieldKind::TypedLabeledTextLong.default_storage();
        assert_eq!(long.max_length(PROPERTY_VALUE), None);
    }

    #[test]
    fn only_labeled_reference_is_untyped() {
        for kind in FieldKind::ALL {
            assert_eq!(kind.is_typed(), kind != FieldKind::LabeledEntityReference);
        }
    }

    #[test]
    fn display_label_falls_back_to_name() {
        let field = FieldDef::new("genre", "", FieldKind::TypedLabeledTextShort);
        assert_eq!(field.display_label(), "genre");
    }

    #[test]
    fn title_with_subtitle_strips_trailing_colon() {
        let t = title("The ", "Hobbit :", "There and Back Again", "", "");
        assert_eq!(t.to_string(), "The Hobbit: There and Back Again");
    }

    #[test]
    fn title_part_number_and_name() {
        let t = title("", "Annals", "", "Part 2", "Winter");
        assert_eq!(t.to_string(), "Annals. Part 2, Winter");
    }

    #[test]
    fn title_part_number_after_terminal_punctuation() {
        let t = title("", "Why?", "", "Volume 3", "");
        assert_eq!(t.to_string(), "Why? Volume 3");
    }

    #[test]
    fn title_part_name_after_trailing_comma() {
        let t = title("", "Letters", "", "Book 1,", "Youth");
        assert_eq!(t.to_string(), "Letters. Book 1, Youth");
    }

    #[test]
    fn title_part_name_without_number() {
        let t = title("", "Collected works", "", "", "Poems");
        assert_eq!(t.to_string(), "Collected works. Poems");
    }

    #[test]
    fn origin_statement_full() {
        let o = OriginStatementValue {
            place: " London ".into(),
            agent: "Penguin".into(),
            date: "1954".into(),
            additional: "reprint".into(),
        };
        assert_eq!(o.to_string(), "London: Penguin, 1954 (reprint)");
    }

    #[test]
    fn origin_statement_partial() {
        let agent_only = OriginStatementValue {
            agent: "Penguin".into(),
            ..Default::default()
        };
        assert_eq!(agent_only.to_string(), "Penguin");

        let date_only = OriginStatementValue {
            date: "1954".into(),
            ..Default::default()
        };
        assert_eq!(date_only.to_string(), "1954");
    }

    #[test]
    fn item_emptiness_ignores_label_and_type() {
        let item = FieldItem::new(ItemValue::Text {
            value: String::new(),
        })
        .with_label("Fiction")
        .with_type("12");
        assert!(item.is_empty());

        let reference = FieldItem::new(ItemValue::Reference {
            target_id: "0".into(),
        });
        assert!(reference.is_empty());
    }

    #[test]
    fn blank_label_and_zero_type_count_as_absent() {
        let item = FieldItem::new(ItemValue::Text {
            value: "x".into(),
        })
        .with_label("")
        .with_type("0");
        assert_eq!(item.label(), None);
        assert_eq!(item.type_target(), None);
    }

    #[test]
    fn item_value_yaml_is_tagged() {
        let item = FieldItem::new(ItemValue::Title(title("", "Dune", "", "", "")))
            .with_label("Main");
        let yaml = serde_yaml_ng::to_string(&item).unwrap();
        assert!(yaml.contains("kind: title"));
        let parsed: FieldItem = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(item, parsed);
    }
}
