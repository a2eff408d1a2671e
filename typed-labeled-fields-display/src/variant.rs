//! Formatter variants as table data.
//!
//! Both formatters run the same resolution; they differ only in which
//! sources they know about, their defaults and their prefix slots.

use typed_labeled_fields::{FieldKind, FormatterSettings};

use crate::source::{LabelSource, PrefixSource, Source, Vocabulary};

/// Setting holding the label source preferences.
pub const SETTING_LABEL_SOURCE: &str = "display_label_source";
pub const SETTING_PREFIX_FOR_LABEL: &str = "display_value_prefix_source_for_label";
pub const SETTING_PREFIX_FOR_TYPE: &str = "display_value_prefix_source_for_type";
pub const SETTING_PREFIX_FOR_FIELD: &str = "display_value_prefix_source_for_field";

/// Description of the label source settings table.
pub const LABEL_SOURCE_DESCRIPTION: &str = "Display label source preferred order";

/// The prefix preferences used when one particular label source won.
#[derive(Debug, Clone, Copy)]
pub struct PrefixSlot {
    /// Label source whose win selects this slot.
    pub governing: LabelSource,
    pub setting: &'static str,
    /// Candidates this slot may ever offer, and its required fallback.
    pub vocabulary: Vocabulary<PrefixSource>,
    pub defaults: &'static [PrefixSource],
    /// Fixed slots ignore stored settings and always use their defaults.
    pub editable: bool,
    pub description: &'static str,
}

/// One formatter's source vocabulary, defaults and prefix slots.
#[derive(Debug)]
pub struct Variant {
    pub name: &'static str,
    pub label_vocabulary: Vocabulary<LabelSource>,
    pub label_defaults: &'static [LabelSource],
    pub slots: &'static [PrefixSlot],
}

impl Variant {
    /// The prefix slot governed by `label_source`.
    pub fn slot(&self, label_source: LabelSource) -> Option<&PrefixSlot> {
        self.slots.iter().find(|s| s.governing == label_source)
    }

    /// Settings a freshly configured formatter starts with.
    pub fn default_settings(&self) -> FormatterSettings {
        let mut settings = FormatterSettings::new();
        settings.set(
            SETTING_LABEL_SOURCE,
            self.label_defaults.iter().map(|s| s.id()),
        );
        for slot in self.slots.iter().filter(|s| s.editable) {
            settings.set(slot.setting, slot.defaults.iter().map(|s| s.id()));
        }
        settings
    }
}

static ALL_PREFIXES: [PrefixSource; 5] = [
    PrefixSource::Label,
    PrefixSource::LabelAndType,
    PrefixSource::Type,
    PrefixSource::TypeAndLabel,
    PrefixSource::None,
];

/// Two-source formatter for labeled entity references.
pub static LABELED: Variant = Variant {
    name: "labeled",
    label_vocabulary: Vocabulary::new(
        &[LabelSource::Label, LabelSource::Field],
        LabelSource::Field,
    ),
    label_defaults: &[LabelSource::Label, LabelSource::Field],
    slots: &[
        PrefixSlot {
            governing: LabelSource::Label,
            setting: SETTING_PREFIX_FOR_LABEL,
            vocabulary: Vocabulary::new(&[PrefixSource::None], PrefixSource::None),
            defaults: &[PrefixSource::None],
            editable: false,
            description: "Value Prefix Source (When \"Label value\" is the display label source)",
        },
        PrefixSlot {
            governing: LabelSource::Field,
            setting: SETTING_PREFIX_FOR_FIELD,
            vocabulary: Vocabulary::new(
                &[PrefixSource::Label, PrefixSource::None],
                PrefixSource::None,
            ),
            defaults: &[PrefixSource::Label, PrefixSource::None],
            editable: true,
            description: "Value Prefix Source (When \"Field name\" is the display label source)",
        },
    ],
};

/// Four-source formatter for every typed labeled kind.
pub static TYPED_LABELED: Variant = Variant {
    name: "typed_labeled",
    label_vocabulary: Vocabulary::new(
        &[LabelSource::Label, LabelSource::Type, LabelSource::Field],
        LabelSource::Field,
    ),
    label_defaults: &[LabelSource::Type, LabelSource::Field],
    slots: &[
        PrefixSlot {
            governing: LabelSource::Label,
            setting: SETTING_PREFIX_FOR_LABEL,
            vocabulary: Vocabulary::new(&[PrefixSource::None], PrefixSource::None),
            defaults: &[PrefixSource::None],
            editable: true,
            description: "Value Prefix Source (When \"Label value\" is the display label source)",
        },
        PrefixSlot {
            governing: LabelSource::Type,
            setting: SETTING_PREFIX_FOR_TYPE,
            vocabulary: Vocabulary::new(
                &[PrefixSource::Label, PrefixSource::None],
                PrefixSource::None,
            ),
            defaults: &[PrefixSource::Label],
            editable: true,
            description: "Value Prefix Source (When \"Type value\" is the display label source)",
        },
        PrefixSlot {
            governing: LabelSource::Field,
            setting: SETTING_PREFIX_FOR_FIELD,
            vocabulary: Vocabulary::new(&ALL_PREFIXES, PrefixSource::None),
            defaults: &[
                PrefixSource::TypeAndLabel,
                PrefixSource::Label,
                PrefixSource::Type,
                PrefixSource::LabelAndType,
                PrefixSource::None,
            ],
            editable: true,
            description: "Value Prefix Source (When \"Field name\" is the display label source)",
        },
    ],
};

/// The formatter variant used to display fields of `kind`, if any.
pub fn variant_for(kind: FieldKind) -> Option<&'static Variant> {
    match kind {
        FieldKind::LabeledEntityReference => Some(&LABELED),
        FieldKind::TypedLabeledEntityReference
        | FieldKind::TypedLabeledTextShort
        | FieldKind::TypedLabeledTextLong
        | FieldKind::TypedLabeledTitle
        | FieldKind::TypedLabeledOriginStatement
        | FieldKind::TypedLabeledUrl => Some(&TYPED_LABELED),
        FieldKind::TypedIdentifier => None,
    }
}
