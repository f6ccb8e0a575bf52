use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Display;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, StatusBadge, StatusLevel};

/// Writes results to stdout, as pretty JSON or as text. Colors only when stdout is a terminal.
pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            color: std::io::stdout().is_terminal(),
        }
    }

    fn headline(&self, badge: &StatusBadge) -> String {
        if !self.color {
            return badge.label.clone();
        }
        match badge.level {
            StatusLevel::Success => badge.label.green().bold().to_string(),
            StatusLevel::Info => badge.label.bold().to_string(),
            StatusLevel::Warning => badge.label.yellow().bold().to_string(),
        }
    }

    fn accent(&self, text: &str) -> String {
        if self.color {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        println!("{} {}", result.badge.level.icon(), self.headline(&result.badge));
        println!();
        print!("{}", result.content);

        if let Some(path) = &result.saved_to {
            println!("\nSaved to {}", self.accent(path));
        }

        if !result.suggestions.is_empty() {
            println!("\nTips:");
            for tip in &result.suggestions {
                match &tip.command {
                    Some(cmd) => println!("  • {}: {}", tip.description, self.accent(cmd)),
                    None => println!("  • {}", tip.description),
                }
            }
        }

        Ok(())
    }
}
