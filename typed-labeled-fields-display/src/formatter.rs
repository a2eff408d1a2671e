//! A formatter's resolved display preferences.

use indexmap::IndexMap;
use tracing::debug;
use typed_labeled_fields::{FieldDef, FieldItem, FormatterSettings, ReferenceLookup};

use crate::error::{DisplayError, Result};
use crate::group::{group_items, FieldGroup};
use crate::item::DisplayItem;
use crate::preference::{options_for, PreferenceList};
use crate::source::{LabelSource, PrefixSource, Source};
use crate::table::PreferenceTable;
use crate::variant::{variant_for, PrefixSlot, Variant, SETTING_LABEL_SOURCE};

/// The label preferences of one formatter and a prefix list per slot.
#[derive(Debug, Clone)]
pub struct DisplayPreferences {
    variant: &'static Variant,
    labels: PreferenceList<LabelSource>,
    prefixes: IndexMap<LabelSource, PreferenceList<PrefixSource>>,
}

impl DisplayPreferences {
    /// Read preferences from stored settings.
    ///
    /// Settings that are missing fall back to the variant's defaults. Fixed
    /// slots always use their defaults.
    pub fn from_settings(variant: &'static Variant, settings: &FormatterSettings) -> Self {
        let labels = match settings.get(SETTING_LABEL_SOURCE) {
            Some(ids) => PreferenceList::from_configuration(ids, &variant.label_vocabulary),
            None => PreferenceList::from_sources(
                variant.label_defaults.iter().copied(),
                &variant.label_vocabulary,
            ),
        };

        let prefixes = variant
            .slots
            .iter()
            .map(|slot| (slot.governing, slot_preferences(slot, settings)))
            .collect();

        Self {
            variant,
            labels,
            prefixes,
        }
    }

    /// Read preferences while settings are being edited.
    ///
    /// A setting present in `pending` wins over the saved one.
    pub fn from_edit(
        variant: &'static Variant,
        pending: &FormatterSettings,
        saved: &FormatterSettings,
    ) -> Self {
        let mut merged = saved.clone();
        for (setting, ids) in pending.iter() {
            merged.set(setting, ids.iter().map(String::as_str));
        }
        Self::from_settings(variant, &merged)
    }

    /// Preferences for a field definition, from its stored display settings.
    pub fn for_field(def: &FieldDef) -> Result<Self> {
        let variant = variant_for(def.kind).ok_or(DisplayError::NoFormatter { kind: def.kind })?;
        Ok(Self::from_settings(variant, &def.display))
    }

    pub fn variant(&self) -> &'static Variant {
        self.variant
    }

    pub fn label_list(&self) -> &PreferenceList<LabelSource> {
        &self.labels
    }

    /// The prefix preferences used when `label_source` won.
    pub fn prefix_list_for(&self, label_source: LabelSource) -> Result<&PreferenceList<PrefixSource>> {
        self.prefixes
            .get(&label_source)
            .ok_or_else(|| self.unmapped(label_source))
    }

    /// Replace the label preferences.
    pub fn set_label_list(&mut self, labels: PreferenceList<LabelSource>) {
        self.labels = labels;
    }

    /// Replace the prefix preferences of an editable slot. Fixed slots keep
    /// their defaults.
    pub fn set_prefix_list(
        &mut self,
        governing: LabelSource,
        prefixes: PreferenceList<PrefixSource>,
    ) -> Result<()> {
        let slot = self.slot(governing)?;
        if !slot.editable {
            debug!(variant = self.variant.name, slot = slot.setting, "ignoring edit of a fixed slot");
            return Ok(());
        }
        self.prefixes.insert(governing, prefixes);
        Ok(())
    }

    /// Every label source of the variant with its description.
    pub fn label_options(&self) -> IndexMap<LabelSource, &'static str> {
        self.variant
            .label_vocabulary
            .sources()
            .iter()
            .map(|s| (*s, s.description()))
            .collect()
    }

    /// Prefix sources that may be offered for the slot governed by
    /// `governing`, given the current label preferences.
    pub fn options(&self, governing: LabelSource) -> Result<IndexMap<PrefixSource, &'static str>> {
        Ok(options_for(self.slot(governing)?, &self.labels))
    }

    pub fn label_table(&self) -> PreferenceTable<LabelSource> {
        PreferenceTable::build(
            &self.labels,
            self.label_options(),
            &self.variant.label_vocabulary,
        )
    }

    pub fn prefix_table(&self, governing: LabelSource) -> Result<PreferenceTable<PrefixSource>> {
        let slot = self.slot(governing)?;
        Ok(PreferenceTable::build(
            self.prefix_list_for(governing)?,
            options_for(slot, &self.labels),
            &slot.vocabulary,
        ))
    }

    /// Group and render `items`.
    pub fn view(&self, items: &[DisplayItem]) -> Result<FieldGroup> {
        group_items(items, &self.labels, |source| self.prefix_list_for(source))
    }

    /// Settings to persist. Fixed slots are not stored.
    pub fn to_settings(&self) -> FormatterSettings {
        let mut settings = FormatterSettings::new();
        settings.set(SETTING_LABEL_SOURCE, self.labels.ids());
        for slot in self.variant.slots.iter().filter(|s| s.editable) {
            if let Some(list) = self.prefixes.get(&slot.governing) {
                settings.set(slot.setting, list.ids());
            }
        }
        settings
    }

    fn slot(&self, governing: LabelSource) -> Result<&'static PrefixSlot> {
        self.variant
            .slot(governing)
            .ok_or_else(|| self.unmapped(governing))
    }

    fn unmapped(&self, label_source: LabelSource) -> DisplayError {
        DisplayError::UnmappedLabelSource {
            variant: self.variant.name,
            label_source: label_source.id(),
        }
    }
}

fn slot_preferences(slot: &PrefixSlot, settings: &FormatterSettings) -> PreferenceList<PrefixSource> {
    match settings.get(slot.setting).filter(|_| slot.editable) {
        Some(ids) => PreferenceList::from_configuration(ids, &slot.vocabulary),
        None => PreferenceList::from_sources(slot.defaults.iter().copied(), &slot.vocabulary),
    }
}

/// Hydrate and display the items of a field with its stored preferences.
pub async fn view_field(
    def: &FieldDef,
    items: &[FieldItem],
    lookup: &dyn ReferenceLookup,
) -> Result<FieldGroup> {
    let preferences = DisplayPreferences::for_field(def)?;
    let items: Vec<FieldItem> = items.iter().filter(|i| !i.is_empty()).cloned().collect();
    let display = DisplayItem::hydrate_all(def, &items, lookup).await;
    preferences.view(&display)
}
