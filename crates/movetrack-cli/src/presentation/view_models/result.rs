use serde::Serialize;
use std::path::Path;

use super::common::{Guidance, StatusBadge};

/// Envelope handed to the renderer by every command. In JSON mode this is the whole output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResultViewModel<T: Serialize> {
    pub badge: StatusBadge,

    pub content: T,

    /// Snapshot file rewritten by this command
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_to: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Guidance>,
}

impl<T: Serialize> CommandResultViewModel<T> {
    pub fn new(badge: StatusBadge, content: T) -> Self {
        Self {
            badge,
            content,
            saved_to: None,
            suggestions: Vec::new(),
        }
    }

    pub fn suggest(mut self, guide: Guidance) -> Self {
        self.suggestions.push(guide);
        self
    }

    pub fn saved_to(mut self, path: Option<&Path>) -> Self {
        self.saved_to = path.map(|p| p.display().to_string());
        self
    }
}
