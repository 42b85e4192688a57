//! Named case rows built from labeled values.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use scenarios::LabeledValue;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{CaseConfig, DuplicatePolicy};
use crate::error::{CaseError, CaseResult};

/// One named case handed to a test runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseRow<T> {
    /// Position of the value in the source sequence.
    pub index: usize,
    /// Display name of the case, the quoted label.
    pub name: String,
    /// Case data.
    pub data: T,
}

impl<T> CaseRow<T> {
    /// Unwrap into the case data.
    #[must_use]
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Ordered, named cases built from a sequence of labeled values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CaseTable<T> {
    rows: Vec<CaseRow<T>>,
}

impl<T> CaseTable<T> {
    /// Build a table from `values` with the default [`CaseConfig`].
    ///
    /// # Errors
    ///
    /// See [`CaseTable::build`].
    pub fn from_values<I>(values: I) -> CaseResult<Self>
    where
        I: IntoIterator<Item = LabeledValue<T>>,
    {
        Self::build(values, &CaseConfig::default())
    }

    /// Build a table from `values`, applying the policies in `config`.
    ///
    /// Rows keep the order of `values`. Under [`DuplicatePolicy::Suffix`] a
    /// repeated name gets ` #<n>` appended to its label, with `n` the smallest
    /// number from 2 whose suffixed name is not taken yet. Without clashes
    /// from other rows `n` is the occurrence count of the name.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::EmptyLabel`] when empty labels are disallowed and a
    /// value renders one, and [`CaseError::DuplicateName`] when duplicates are
    /// rejected and two values render the same name.
    pub fn build<I>(values: I, config: &CaseConfig) -> CaseResult<Self>
    where
        I: IntoIterator<Item = LabeledValue<T>>,
    {
        let mut first_seen: HashMap<String, usize> = HashMap::new();
        let mut rows = Vec::new();

        for (index, value) in values.into_iter().enumerate() {
            let label = value.effective_label().into_owned();
            if label.is_empty() && !config.allow_empty_labels {
                return Err(CaseError::EmptyLabel { index });
            }

            let name = value.to_string();
            let previous = first_seen.get(&name).copied();
            let (value, name) = match previous {
                None => (value, name),
                Some(first) => match config.duplicates {
                    DuplicatePolicy::Reject => {
                        return Err(CaseError::DuplicateName {
                            name,
                            first,
                            duplicate: index,
                        });
                    }
                    DuplicatePolicy::Allow => {
                        debug!(index, first, name = %name, "keeping duplicate case name");
                        (value, name)
                    }
                    DuplicatePolicy::Suffix => {
                        let occurrence = (2_usize..)
                            .find(|n| !first_seen.contains_key(&quoted(&format!("{label} #{n}"))))
                            .unwrap_or(2);
                        let value = value.with_appended_label(format!("#{occurrence}"));
                        let renamed = value.to_string();
                        warn!(
                            index,
                            first,
                            name = %name,
                            renamed = %renamed,
                            "duplicate case name; appending occurrence suffix"
                        );
                        (value, renamed)
                    }
                },
            };

            if let Entry::Vacant(entry) = first_seen.entry(name.clone()) {
                entry.insert(index);
            }
            rows.push(CaseRow {
                index,
                name,
                data: value.into_data(),
            });
        }

        debug!(
            rows = rows.len(),
            duplicates = config.duplicates.as_str(),
            "case table built"
        );
        Ok(Self { rows })
    }

    /// Rows in source order.
    #[must_use]
    pub fn rows(&self) -> &[CaseRow<T>] {
        &self.rows
    }

    /// Consume the table, returning its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<CaseRow<T>> {
        self.rows
    }

    /// Display names in source order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.name.as_str())
    }

    /// Iterate over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, CaseRow<T>> {
        self.rows.iter()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T: Serialize> CaseTable<T> {
    /// Serialise the rows as a compact JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::Serialize`] when the case data cannot be serialised.
    pub fn to_json(&self) -> CaseResult<String> {
        serde_json::to_string(&self.rows).map_err(|source| CaseError::Serialize { source })
    }

    /// Serialise the rows as an indented JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::Serialize`] when the case data cannot be serialised.
    pub fn to_json_pretty(&self) -> CaseResult<String> {
        serde_json::to_string_pretty(&self.rows).map_err(|source| CaseError::Serialize { source })
    }
}

impl<T> IntoIterator for CaseTable<T> {
    type Item = CaseRow<T>;
    type IntoIter = std::vec::IntoIter<CaseRow<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a CaseTable<T> {
    type Item = &'a CaseRow<T>;
    type IntoIter = std::slice::Iter<'a, CaseRow<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

fn quoted(label: &str) -> String {
    format!("\"{label}\"")
}
