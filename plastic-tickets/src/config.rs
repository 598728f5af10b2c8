//! Table configuration types.

use crate::sort::SortDirection;

/// What [`rebuild`](crate::PlasticTable::rebuild) does when the body
/// container is not in the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingBodyPolicy {
    /// Log a warning and leave the document untouched.
    #[default]
    Ignore,
    /// Return [`TableError::MissingBody`](crate::TableError::MissingBody).
    Error,
}

/// Per-table configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Label of a sort button that is not active.
    pub neutral_glyph: String,
    /// Label of the active button on the first click.
    pub descending_glyph: String,
    /// Label of the active button on the second click.
    pub ascending_glyph: String,
    pub missing_body: MissingBodyPolicy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            neutral_glyph: "⇵".to_string(),
            descending_glyph: "🠗".to_string(),
            ascending_glyph: "🠕".to_string(),
            missing_body: MissingBodyPolicy::default(),
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the three button labels.
    pub fn glyphs(
        mut self,
        neutral: impl Into<String>,
        descending: impl Into<String>,
        ascending: impl Into<String>,
    ) -> Self {
        self.neutral_glyph = neutral.into();
        self.descending_glyph = descending.into();
        self.ascending_glyph = ascending.into();
        self
    }

    /// Set the missing body policy.
    pub fn missing_body(mut self, policy: MissingBodyPolicy) -> Self {
        self.missing_body = policy;
        self
    }

    /// Fail rebuilds whose body container is missing.
    pub fn strict(self) -> Self {
        self.missing_body(MissingBodyPolicy::Error)
    }

    /// Button label for a sort direction, or the neutral label for `None`.
    pub fn glyph(&self, direction: Option<SortDirection>) -> &str {
        match direction {
            None => &self.neutral_glyph,
            Some(SortDirection::Descending) => &self.descending_glyph,
            Some(SortDirection::Ascending) => &self.ascending_glyph,
        }
    }
}
