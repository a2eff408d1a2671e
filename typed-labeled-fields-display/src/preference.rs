//! Ordered source preferences and the options a prefix slot may offer.

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::source::{LabelSource, PrefixSource, Source, Vocabulary};
use crate::variant::PrefixSlot;

/// An ordered list of distinct sources, most preferred first.
///
/// Always contains the vocabulary's required source, so resolution over the
/// list has a terminal fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceList<S> {
    sources: Vec<S>,
}

impl<S: Source> PreferenceList<S> {
    /// Build a list from stored identifiers.
    ///
    /// Identifiers outside the vocabulary and repeats are dropped. The
    /// required source is appended when missing, which repairs settings
    /// stored before it was mandatory.
    pub fn from_configuration<I, T>(saved: I, vocabulary: &Vocabulary<S>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut parsed = Vec::new();
        for id in saved {
            let id = id.as_ref();
            match vocabulary.parse(id) {
                Some(source) => parsed.push(source),
                None => warn!(id, "dropping unknown display preference"),
            }
        }
        Self::from_sources(parsed, vocabulary)
    }

    /// Build a list from already parsed sources, applying the same repair as
    /// [`PreferenceList::from_configuration`].
    pub fn from_sources<I>(sources: I, vocabulary: &Vocabulary<S>) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut list: Vec<S> = Vec::new();
        for source in sources {
            if vocabulary.contains(source) && !list.contains(&source) {
                list.push(source);
            }
        }
        let required = vocabulary.required();
        if !list.contains(&required) {
            debug!(required = required.id(), "appending required display preference");
            list.push(required);
        }
        Self { sources: list }
    }

    pub fn sources(&self) -> &[S] {
        &self.sources
    }

    pub fn iter(&self) -> impl Iterator<Item = S> + '_ {
        self.sources.iter().copied()
    }

    pub fn position(&self, source: S) -> Option<usize> {
        self.sources.iter().position(|s| *s == source)
    }

    pub fn contains(&self, source: S) -> bool {
        self.sources.contains(&source)
    }

    /// Sources ranked strictly ahead of `source`, or `None` if it is absent.
    pub fn preceding(&self, source: S) -> Option<&[S]> {
        self.position(source).map(|index| &self.sources[..index])
    }

    /// Persisted identifiers, in order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.id()).collect()
    }
}

/// Prefix sources legal to offer for `slot`, given the label preferences
/// that govern it, mapped to their descriptions in declaration order.
///
/// When the slot's governing label source is missing from the label list
/// only the required fallback is offered. Otherwise a candidate is dropped
/// when any label source ranked ahead of the governing one appears in the
/// candidate's exclusion set.
pub fn options_for(
    slot: &PrefixSlot,
    label_preferences: &PreferenceList<LabelSource>,
) -> IndexMap<PrefixSource, &'static str> {
    let required = slot.vocabulary.required();
    let Some(preceding) = label_preferences.preceding(slot.governing) else {
        return IndexMap::from([(required, required.description())]);
    };

    slot.vocabulary
        .sources()
        .iter()
        .copied()
        .filter(|candidate| {
            *candidate == required
                || !candidate
                    .excluded_by()
                    .iter()
                    .any(|label| preceding.contains(label))
        })
        .map(|candidate| (candidate, candidate.description()))
        .collect()
}
