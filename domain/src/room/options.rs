//! The configured set of voting options

use serde::{Deserialize, Serialize};

/// The ordered, fixed set of options a room's participants vote between
/// (Value Object)
///
/// The configured order is significant: tallies and series preserve it, and
/// winner resolution breaks ties in favor of the earlier option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingOptions(Vec<String>);

impl VotingOptions {
    /// Create a new option set.
    ///
    /// # Panics
    /// Panics if `options` is empty.
    pub fn new(options: Vec<String>) -> Self {
        assert!(!options.is_empty(), "voting options cannot be empty");
        Self(options)
    }

    /// Try to create a new option set, returning `None` if empty.
    pub fn try_new(options: Vec<String>) -> Option<Self> {
        if options.is_empty() {
            None
        } else {
            Some(Self(options))
        }
    }

    /// Check whether `option` is a member of the set.
    pub fn contains(&self, option: &str) -> bool {
        self.0.iter().any(|o| o == option)
    }

    /// Iterate the options in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of configured options.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The options as a slice, in configured order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for VotingOptions {
    /// The classic two-option set for a class-attendance vote.
    fn default() -> Self {
        Self(vec!["Attend Class".to_string(), "Bunk Class".to_string()])
    }
}
