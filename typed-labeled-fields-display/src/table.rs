//! Editing state behind a preference settings table.
//!
//! A table shows every offered option as a row. Rows in the visible region
//! form the preference list, ordered by weight; rows in the hidden region are
//! offered but ignored. The required option is locked to the visible region.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{DisplayError, Result};
use crate::preference::PreferenceList;
use crate::source::{Source, Vocabulary};

/// Where a row sits in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Visible,
    Hidden,
}

/// One option as shown in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow<S> {
    pub source: S,
    pub description: &'static str,
    pub weight: i64,
    pub region: Region,
    /// Locked rows cannot leave the visible region.
    pub locked: bool,
}

/// A row as submitted back from the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowInput {
    pub source: String,
    pub weight: i64,
    pub region: Region,
}

impl RowInput {
    pub fn new(source: impl Into<String>, weight: i64, region: Region) -> Self {
        Self {
            source: source.into(),
            weight,
            region,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PreferenceTable<S: 'static> {
    rows: Vec<TableRow<S>>,
    weight_delta: i64,
    options: IndexMap<S, &'static str>,
    vocabulary: Vocabulary<S>,
}

impl<S: Source> PreferenceTable<S> {
    /// Lay out `options` for editing `list`.
    pub fn build(
        list: &PreferenceList<S>,
        options: IndexMap<S, &'static str>,
        vocabulary: &Vocabulary<S>,
    ) -> Self {
        let required = vocabulary.required();
        let mut rows: Vec<TableRow<S>> = list
            .iter()
            .enumerate()
            .filter_map(|(index, source)| {
                options.get(&source).map(|description| TableRow {
                    source,
                    description: *description,
                    weight: index as i64,
                    region: Region::Visible,
                    locked: source == required,
                })
            })
            .collect();

        for (source, description) in &options {
            if !list.contains(*source) {
                rows.push(TableRow {
                    source: *source,
                    description: *description,
                    weight: 0,
                    region: Region::Hidden,
                    locked: *source == required,
                });
            }
        }

        let weight_delta = (options.len() as i64 + 1) / 2;
        Self {
            rows,
            weight_delta,
            options,
            vocabulary: *vocabulary,
        }
    }

    /// Visible rows by weight, then hidden rows.
    pub fn rows(&self) -> &[TableRow<S>] {
        &self.rows
    }

    /// Weights range over `-delta..=delta`.
    pub fn weight_delta(&self) -> i64 {
        self.weight_delta
    }

    /// Turn submitted rows into a preference list.
    ///
    /// Rows naming sources that were not offered are dropped. Visible rows
    /// are ordered by weight, keeping submission order between equal
    /// weights.
    pub fn submit<I>(&self, rows: I) -> Result<PreferenceList<S>>
    where
        I: IntoIterator<Item = RowInput>,
    {
        let mut visible: Vec<(i64, S)> = Vec::new();
        for row in rows {
            let Some(source) = S::from_id(&row.source).filter(|s| self.options.contains_key(s))
            else {
                warn!(source = %row.source, "ignoring row for an option that was not offered");
                continue;
            };
            if row.region == Region::Visible {
                visible.push((row.weight, source));
            }
        }
        visible.sort_by_key(|(weight, _)| *weight);

        let required = self.vocabulary.required();
        if !visible.iter().any(|(_, source)| *source == required) {
            return Err(DisplayError::RequiredOptionHidden {
                option: required.description(),
            });
        }

        let list = PreferenceList::from_sources(visible.into_iter().map(|(_, s)| s), &self.vocabulary);
        debug!(order = ?list.ids(), "preference table submitted");
        Ok(list)
    }
}
