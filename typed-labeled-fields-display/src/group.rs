//! Grouping rendered items under their display labels.

use indexmap::IndexMap;

use crate::error::Result;
use crate::item::DisplayItem;
use crate::preference::PreferenceList;
use crate::resolve::{resolve_label, resolve_value, RenderedValue};
use crate::source::{LabelSource, PrefixSource};

/// Rendered items keyed by display label.
///
/// Labels keep the order in which they were first produced and items keep
/// their input order within a label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldGroup(IndexMap<String, Vec<RenderedValue>>);

/// One label and the items displayed under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group<'a> {
    pub label: &'a str,
    pub items: &'a [RenderedValue],
}

impl FieldGroup {
    pub fn groups(&self) -> impl Iterator<Item = Group<'_>> {
        self.0.iter().map(|(label, items)| Group { label, items })
    }

    pub fn get(&self, label: &str) -> Option<&[RenderedValue]> {
        self.0.get(label).map(Vec::as_slice)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, label: String, value: RenderedValue) {
        self.0.entry(label).or_default().push(value);
    }
}

/// Resolve and group `items`.
///
/// `prefixes_for` picks the prefix preferences for the label source that won
/// each item. Its errors abort grouping.
pub fn group_items<'p, F>(
    items: &[DisplayItem],
    labels: &PreferenceList<LabelSource>,
    mut prefixes_for: F,
) -> Result<FieldGroup>
where
    F: FnMut(LabelSource) -> Result<&'p PreferenceList<PrefixSource>>,
{
    let mut group = FieldGroup::default();
    for item in items {
        let (source, label) = resolve_label(item, labels)?;
        let value = resolve_value(item, prefixes_for(source)?);
        group.push(label, value);
    }
    Ok(group)
}
