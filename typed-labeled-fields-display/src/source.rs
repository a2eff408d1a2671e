//! Display sources and the static exclusion table.
//!
//! A source names where a piece of display text comes from. Label sources
//! decide the heading an item is grouped under; prefix sources decide what
//! is written in front of the item's value.

use std::fmt;
use std::hash::Hash;

/// A closed set of source identifiers persisted as strings.
pub trait Source: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Persisted identifier.
    fn id(self) -> &'static str;

    /// Parse a persisted identifier.
    fn from_id(id: &str) -> Option<Self>;

    /// Human readable explanation shown next to the option in settings.
    fn description(self) -> &'static str;
}

/// Where the display label of an item comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelSource {
    /// The item's own label, when present.
    Label,
    /// The display label of the item's type, when present.
    Type,
    /// The field's display name. Always present.
    Field,
}

impl Source for LabelSource {
    fn id(self) -> &'static str {
        match self {
            LabelSource::Label => "label",
            LabelSource::Type => "type",
            LabelSource::Field => "field",
        }
    }

    fn from_id(id: &str) -> Option<Self> {
        match id {
            "label" => Some(LabelSource::Label),
            "type" => Some(LabelSource::Type),
            "field" => Some(LabelSource::Field),
            _ => None,
        }
    }

    fn description(self) -> &'static str {
        match self {
            LabelSource::Label => "Prefer the fields \"Label value\" when present",
            LabelSource::Type => "Prefer the fields \"Type value\" when present",
            LabelSource::Field => "Prefer the fields \"Field name\"",
        }
    }
}

/// What is written in front of an item's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixSource {
    Label,
    LabelAndType,
    Type,
    TypeAndLabel,
    /// No prefix. Always applicable.
    None,
}

impl Source for PrefixSource {
    fn id(self) -> &'static str {
        match self {
            PrefixSource::Label => "label",
            PrefixSource::LabelAndType => "label_and_type",
            PrefixSource::Type => "type",
            PrefixSource::TypeAndLabel => "type_and_label",
            PrefixSource::None => "none",
        }
    }

    fn from_id(id: &str) -> Option<Self> {
        match id {
            "label" => Some(PrefixSource::Label),
            "label_and_type" => Some(PrefixSource::LabelAndType),
            "type" => Some(PrefixSource::Type),
            "type_and_label" => Some(PrefixSource::TypeAndLabel),
            "none" => Some(PrefixSource::None),
            _ => None,
        }
    }

    fn description(self) -> &'static str {
        match self {
            PrefixSource::Label => {
                "Prefer to prefix the field value with \"Label value\" when present"
            }
            PrefixSource::LabelAndType => {
                "Prefer to prefix the field value with \"Label value and Type value\" when both are present"
            }
            PrefixSource::Type => "Prefer to prefix the field value with \"Type value\" when present",
            PrefixSource::TypeAndLabel => {
                "Prefer to prefix the field value with \"Type value and Label value\" when both are present"
            }
            PrefixSource::None => "Do not apply a prefix to the field value",
        }
    }
}

impl PrefixSource {
    /// Label sources that, ranked ahead of the governing label source, make
    /// this prefix redundant with the label already used for grouping.
    pub fn excluded_by(self) -> &'static [LabelSource] {
        match self {
            PrefixSource::Label => &[LabelSource::Field, LabelSource::Label],
            PrefixSource::LabelAndType => {
                &[LabelSource::Field, LabelSource::Label, LabelSource::Type]
            }
            PrefixSource::Type => &[LabelSource::Field, LabelSource::Type],
            PrefixSource::TypeAndLabel => {
                &[LabelSource::Field, LabelSource::Type, LabelSource::Label]
            }
            PrefixSource::None => &[],
        }
    }
}

/// The sources a preference list may hold, in declaration order, and the
/// one source that must never be removed.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary<S: 'static> {
    sources: &'static [S],
    required: S,
}

impl<S: 'static> Vocabulary<S> {
    pub const fn new(sources: &'static [S], required: S) -> Self {
        Self { sources, required }
    }
}

impl<S: Source> Vocabulary<S> {
    pub fn sources(&self) -> &'static [S] {
        self.sources
    }

    pub fn required(&self) -> S {
        self.required
    }

    pub fn contains(&self, source: S) -> bool {
        self.sources.contains(&source)
    }

    /// Parse an identifier, rejecting sources outside this vocabulary.
    pub fn parse(&self, id: &str) -> Option<S> {
        S::from_id(id).filter(|s| self.contains(*s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIXES: [PrefixSource; 5] = [
        PrefixSource::Label,
        PrefixSource::LabelAndType,
        PrefixSource::Type,
        PrefixSource::TypeAndLabel,
        PrefixSource::None,
    ];

    #[test]
    fn ids_round_trip() {
        for source in [LabelSource::Label, LabelSource::Type, LabelSource::Field] {
            assert_eq!(LabelSource::from_id(source.id()), Some(source));
        }
        for source in PREFIXES {
            assert_eq!(PrefixSource::from_id(source.id()), Some(source));
        }
        assert_eq!(LabelSource::from_id("none"), None);
        assert_eq!(PrefixSource::from_id("field"), None);
    }

    #[test]
    fn field_excludes_every_real_prefix() {
        for source in PREFIXES {
            let excluded = source.excluded_by().contains(&LabelSource::Field);
            assert_eq!(excluded, source != PrefixSource::None);
        }
    }

    #[test]
    fn composite_prefixes_are_excluded_by_both_parts() {
        for source in [PrefixSource::LabelAndType, PrefixSource::TypeAndLabel] {
            assert!(source.excluded_by().contains(&LabelSource::Label));
            assert!(source.excluded_by().contains(&LabelSource::Type));
        }
    }

    #[test]
    fn vocabulary_rejects_foreign_sources() {
        static SOURCES: [LabelSource; 2] = [LabelSource::Label, LabelSource::Field];
        let vocabulary = Vocabulary::new(&SOURCES, LabelSource::Field);
        assert_eq!(vocabulary.parse("label"), Some(LabelSource::Label));
        assert_eq!(vocabulary.parse("type"), None);
        assert_eq!(vocabulary.parse("bogus"), None);
        assert_eq!(vocabulary.required(), LabelSource::Field);
    }
}
