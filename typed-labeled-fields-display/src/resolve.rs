//! Label and prefix resolution over a single item.

use std::fmt;

use url::Url;

use crate::error::{DisplayError, Result};
use crate::item::{DisplayItem, MainValue};
use crate::preference::PreferenceList;
use crate::source::{LabelSource, PrefixSource};

/// The value part of a rendered item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Text with line breaks normalized to `\n`.
    Text(String),
    /// A hyperlink whose text is the URI itself.
    Link { text: String, url: Url },
}

impl Body {
    pub fn text(&self) -> &str {
        match self {
            Body::Text(text) => text,
            Body::Link { text, .. } => text,
        }
    }
}

/// One item as displayed: an optional prefix followed by the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedValue {
    pub prefix: Option<String>,
    pub body: Body,
}

impl fmt::Display for RenderedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            f.write_str(prefix)?;
        }
        f.write_str(self.body.text())
    }
}

/// Pick the display label of `item`: the first applicable source in
/// `labels` together with its text.
pub fn resolve_label(
    item: &DisplayItem,
    labels: &PreferenceList<LabelSource>,
) -> Result<(LabelSource, String)> {
    for source in labels.iter() {
        let text = match source {
            LabelSource::Label => item.label(),
            LabelSource::Type => item.type_label(),
            LabelSource::Field => Some(item.field_label.as_str()),
        };
        if let Some(text) = text {
            return Ok((source, text.to_string()));
        }
    }
    Err(DisplayError::UnresolvableLabel {
        field: item.field_label.clone(),
    })
}

/// The prefix chosen by the first applicable source in `prefixes`.
///
/// `None` means no prefix, either because `none` won or because no source
/// applied.
pub fn resolve_prefix(item: &DisplayItem, prefixes: &PreferenceList<PrefixSource>) -> Option<String> {
    let label = item.label();
    let type_label = item.type_label();
    for source in prefixes.iter() {
        match (source, label, type_label) {
            (PrefixSource::Label, Some(label), _) => return Some(format!("{label}: ")),
            (PrefixSource::LabelAndType, Some(label), Some(type_label)) => {
                return Some(format!("{label}: {type_label}: "))
            }
            (PrefixSource::Type, _, Some(type_label)) => return Some(format!("{type_label}: ")),
            (PrefixSource::TypeAndLabel, Some(label), Some(type_label)) => {
                return Some(format!("{type_label}: {label}: "))
            }
            (PrefixSource::None, _, _) => return None,
            _ => {}
        }
    }
    None
}

/// Render `item` with the prefix `prefixes` selects.
pub fn resolve_value(item: &DisplayItem, prefixes: &PreferenceList<PrefixSource>) -> RenderedValue {
    RenderedValue {
        prefix: resolve_prefix(item, prefixes),
        body: base_value(&item.value),
    }
}

fn base_value(value: &MainValue) -> Body {
    match value {
        MainValue::Text(text) => Body::Text(normalize_line_breaks(text)),
        MainValue::Uri(uri) => match Url::parse(uri) {
            Ok(url) => Body::Link {
                text: uri.clone(),
                url,
            },
            Err(_) => Body::Text(uri.clone()),
        },
        MainValue::Reference { target_id, label } => Body::Text(match label {
            Some(label) => normalize_line_breaks(label),
            None => target_id.clone(),
        }),
    }
}

fn normalize_line_breaks(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::TYPED_LABELED;

    fn labels(ids: &[&str]) -> PreferenceList<LabelSource> {
        PreferenceList::from_configuration(ids, &TYPED_LABELED.label_vocabulary)
    }

    fn prefixes(ids: &[&str]) -> PreferenceList<PrefixSource> {
        let slot = TYPED_LABELED.slot(LabelSource::Field).unwrap();
        PreferenceList::from_configuration(ids, &slot.vocabulary)
    }

    fn place() -> DisplayItem {
        DisplayItem::text("Subject", "Lyon")
            .with_label("Regional")
            .with_type_label("Place")
    }

    #[test]
    fn first_applicable_label_wins() {
        let item = DisplayItem::text("Subject", "Lyon").with_type_label("Place");
        assert_eq!(
            resolve_label(&item, &labels(&["label", "type", "field"])).unwrap(),
            (LabelSource::Type, "Place".to_string())
        );
        assert_eq!(
            resolve_label(&DisplayItem::text("Subject", "x"), &labels(&["label", "type"])).unwrap(),
            (LabelSource::Field, "Subject".to_string())
        );
    }

    #[test]
    fn composite_prefixes() {
        let item = place();
        let rendered = resolve_value(&item, &prefixes(&["label_and_type"]));
        assert_eq!(rendered.to_string(), "Regional: Place: Lyon");
        let rendered = resolve_value(&item, &prefixes(&["type_and_label"]));
        assert_eq!(rendered.prefix.as_deref(), Some("Place: Regional: "));
    }

    #[test]
    fn composite_prefix_needs_both_parts() {
        let item = DisplayItem::text("Subject", "Lyon").with_label("Regional");
        let rendered = resolve_value(&item, &prefixes(&["type_and_label", "type", "label"]));
        assert_eq!(rendered.prefix.as_deref(), Some("Regional: "));
    }

    #[test]
    fn none_stops_resolution() {
        let rendered = resolve_value(&place(), &prefixes(&["none", "label"]));
        assert_eq!(rendered.prefix, None);
        assert_eq!(rendered.to_string(), "Lyon");
    }

    #[test]
    fn line_breaks_are_normalized() {
        let item = DisplayItem::text("Notes", "one\r\ntwo\rthree\nfour");
        let rendered = resolve_value(&item, &prefixes(&[]));
        assert_eq!(rendered.body, Body::Text("one\ntwo\nthree\nfour".into()));
    }

    #[test]
    fn uri_renders_as_link() {
        let item = DisplayItem::new("Homepage", MainValue::Uri("https://example.org/a".into()));
        let rendered = resolve_value(&item, &prefixes(&[]));
        match rendered.body {
            Body::Link { text, url } => {
                assert_eq!(text, "https://example.org/a");
                assert_eq!(url.host_str(), Some("example.org"));
            }
            other => panic!("expected a link, got {other:?}"),
        }
    }

    #[test]
    fn invalid_uri_renders_as_text() {
        let item = DisplayItem::new("Homepage", MainValue::Uri("not a uri".into()));
        let rendered = resolve_value(&item, &prefixes(&[]));
        assert_eq!(rendered.body, Body::Text("not a uri".into()));
    }

    #[test]
    fn reference_label_line_breaks_are_normalized() {
        let item = DisplayItem::new(
            "Related",
            MainValue::Reference {
                target_id: "7".into(),
                label: Some("Seven\r\nPillars".into()),
            },
        );
        let rendered = resolve_value(&item, &prefixes(&[]));
        assert_eq!(rendered.body, Body::Text("Seven\nPillars".into()));
    }

    #[test]
    fn unresolved_reference_renders_target_id() {
        let item = DisplayItem::new(
            "Related",
            MainValue::Reference {
                target_id: "42".into(),
                label: None,
            },
        );
        assert_eq!(resolve_value(&item, &prefixes(&[])).to_string(), "42");
    }
}
