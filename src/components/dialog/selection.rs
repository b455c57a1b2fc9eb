//! Selection state shared by the checkbox dialog and the list popup.

use serde::{Deserialize, Serialize};

/// Whether a list accepts one identifier or many
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Radio semantics: zero or one selected identifier
    #[default]
    #[serde(alias = "radio")]
    Single,
    /// Checkbox semantics: any subset of the identifiers
    #[serde(alias = "switch")]
    Multi,
}

/// Currently selected identifiers
///
/// Serializes untagged so a single selection reads as `"a"` (or `null`) and a
/// multi selection as `["a", "b"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selection {
    Single(Option<String>),
    Multi(Vec<String>),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Single(None)
    }
}

impl Selection {
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Selection::Single(None),
            SelectionMode::Multi => Selection::Multi(Vec::new()),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            Selection::Single(_) => SelectionMode::Single,
            Selection::Multi(_) => SelectionMode::Multi,
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        match self {
            Selection::Single(value) => value.as_deref() == Some(id),
            Selection::Multi(values) => values.iter().any(|v| v == id),
        }
    }

    /// Selected identifiers in selection order
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Selection::Single(value) => value.as_deref().into_iter().collect(),
            Selection::Multi(values) => values.iter().map(String::as_str).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Selection::Single(value) => usize::from(value.is_some()),
            Selection::Multi(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks or unchecks `id`, returning whether the selection changed.
    ///
    /// Single mode: checking replaces the value, unchecking the selected id
    /// clears it. Multi mode: checking appends the id if absent, unchecking
    /// removes it.
    pub fn toggle(&mut self, id: &str, checked: bool) -> bool {
        match self {
            Selection::Single(value) => {
                if checked {
                    if value.as_deref() == Some(id) {
                        return false;
                    }
                    *value = Some(id.to_string());
                    true
                } else if value.as_deref() == Some(id) {
                    *value = None;
                    true
                } else {
                    false
                }
            }
            Selection::Multi(values) => {
                let present = values.iter().any(|v| v == id);
                if checked && !present {
                    values.push(id.to_string());
                    true
                } else if !checked && present {
                    values.retain(|v| v != id);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Flips the checked state of `id`
    pub fn flip(&mut self, id: &str) -> bool {
        let checked = !self.is_selected(id);
        self.toggle(id, checked)
    }

    /// Converts to `mode`, warning when the shapes disagree.
    ///
    /// A single value becomes a one-element list; a list handed to a single
    /// selection keeps its first element.
    pub fn coerce(self, mode: SelectionMode) -> Self {
        match (self, mode) {
            (selection @ Selection::Single(_), SelectionMode::Single)
            | (selection @ Selection::Multi(_), SelectionMode::Multi) => selection,
            (Selection::Single(value), SelectionMode::Multi) => {
                log::warn!("Multi selection given a single value {value:?}; wrapping it in a list");
                Selection::Multi(value.into_iter().collect())
            }
            (Selection::Multi(values), SelectionMode::Single) => {
                log::warn!("Single selection given a list {values:?}; keeping the first entry");
                Selection::Single(values.into_iter().next())
            }
        }
    }

    /// Drops identifiers that are not among `candidates` and duplicates,
    /// warning about each one dropped.
    pub fn retain_known<'a>(self, candidates: impl IntoIterator<Item = &'a str> + Clone) -> Self {
        let known = |id: &str| candidates.clone().into_iter().any(|c| c == id);
        match self {
            Selection::Single(Some(value)) if !known(&value) => {
                log::warn!("Selected value {value:?} is not one of the candidates; clearing it");
                Selection::Single(None)
            }
            Selection::Single(value) => Selection::Single(value),
            Selection::Multi(values) => {
                let mut kept: Vec<String> = Vec::with_capacity(values.len());
                for value in values {
                    if !known(&value) {
                        log::warn!("Selected value {value:?} is not one of the candidates; dropping it");
                    } else if kept.contains(&value) {
                        log::warn!("Selected value {value:?} listed twice; dropping the duplicate");
                    } else {
                        kept.push(value);
                    }
                }
                Selection::Multi(kept)
            }
        }
    }
}
