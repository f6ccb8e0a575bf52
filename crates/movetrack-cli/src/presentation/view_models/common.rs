use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Success,
    Info,
    Warning,
}

impl StatusLevel {
    pub fn icon(self) -> &'static str {
        match self {
            StatusLevel::Success => "✅",
            StatusLevel::Info => "ℹ️",
            StatusLevel::Warning => "⚠️",
        }
    }
}

/// Headline printed above a command's output
#[derive(Debug, Clone, Serialize)]
pub struct StatusBadge {
    pub level: StatusLevel,
    pub label: String,
}

impl StatusBadge {
    pub fn new(level: StatusLevel, label: impl Into<String>) -> Self {
        Self {
            level,
            label: label.into(),
        }
    }

    pub fn success(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Success, label)
    }

    pub fn info(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Info, label)
    }

    pub fn warning(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Warning, label)
    }

    /// `1 movement`, `3 movements`
    pub fn counted(level: StatusLevel, count: usize, noun: &str) -> Self {
        let label = if count == 1 {
            format!("1 {}", noun)
        } else {
            format!("{} {}s", count, noun)
        };
        Self::new(level, label)
    }
}

/// Follow-up the user may want, optionally with the command line to run
#[derive(Debug, Clone, Serialize)]
pub struct Guidance {
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Guidance {
    pub fn note(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: None,
        }
    }

    pub fn run(description: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: Some(command.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counted_label() {
        let one = StatusBadge::counted(StatusLevel::Success, 1, "movement");
        assert_eq!(one.label, "1 movement");

        let none = StatusBadge::counted(StatusLevel::Info, 0, "supplier");
        assert_eq!(none.label, "0 suppliers");
    }
}
