use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub description: String,
    pub done: bool,
}

impl Task {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Task {
            name: name.into(),
            description: description.into(),
            done: false,
        }
    }

    /// Returns display glyph: ✓=done, space=pending
    pub fn glyph(&self) -> &'static str {
        if self.done {
            "✓"
        } else {
            " "
        }
    }

    /// Case-insensitive name comparison used by mark-done and remove.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
