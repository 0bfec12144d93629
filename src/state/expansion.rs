//! Expansion tracker: per-building expand/collapse flags.
//!
//! DESIGN
//! ======
//! Pure data, no I/O. The key set is fixed at `reset_for` time from the
//! latest availability response, so toggling can never add a building and
//! keys from an older response cannot survive a reset.

#[cfg(test)]
#[path = "expansion_test.rs"]
mod expansion_test;

use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExpansionError {
    /// Toggle named a building outside the current key set.
    #[error("toggle for unknown building {0}")]
    UnknownBuildingToggle(String),
}

/// Building code -> expanded flag, in response order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionState {
    flags: IndexMap<String, bool>,
}

impl ExpansionState {
    /// Fresh state with every given building collapsed.
    #[must_use]
    pub fn reset_for<I, S>(building_codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let flags = building_codes
            .into_iter()
            .map(|code| (code.into(), false))
            .collect();
        Self { flags }
    }

    /// Flip one building's flag and return its new value.
    ///
    /// # Errors
    ///
    /// Returns [`ExpansionError::UnknownBuildingToggle`] and leaves state
    /// unchanged when `code` is not tracked.
    pub fn toggle(&mut self, code: &str) -> Result<bool, ExpansionError> {
        let flag = self
            .flags
            .get_mut(code)
            .ok_or_else(|| ExpansionError::UnknownBuildingToggle(code.to_owned()))?;
        *flag = !*flag;
        Ok(*flag)
    }

    /// Non-mutating form of [`Self::toggle`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::toggle`].
    pub fn toggled(&self, code: &str) -> Result<Self, ExpansionError> {
        let mut next = self.clone();
        next.toggle(code)?;
        Ok(next)
    }

    /// Whether `code` is expanded. Untracked codes read as collapsed.
    #[must_use]
    pub fn is_expanded(&self, code: &str) -> bool {
        self.flags.get(code).copied().unwrap_or(false)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.flags.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags.iter().map(|(code, expanded)| (code.as_str(), *expanded))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
