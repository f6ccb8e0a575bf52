//! Assertions over `--format json` output.

use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashSet;

fn movements(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["movements"]
        .as_array()
        .context("Expected 'content.movements' array in JSON")
}

/// Assert that JSON output contains expected number of movements.
pub fn assert_movement_count(json: &Value, expected: usize) -> Result<()> {
    let movements = movements(json)?;
    if movements.len() != expected {
        anyhow::bail!("Expected {} movements, got {}", expected, movements.len());
    }
    Ok(())
}

/// Assert that no two movements share an id.
pub fn assert_unique_ids(json: &Value) -> Result<()> {
    let mut seen = HashSet::new();
    for (i, movement) in movements(json)?.iter().enumerate() {
        let id = movement["id"]
            .as_str()
            .with_context(|| format!("Movement {} missing id", i))?;
        if !seen.insert(id.to_string()) {
            anyhow::bail!("Duplicate movement id {} at position {}", id, i);
        }
    }
    Ok(())
}

/// Assert the license plates, newest first.
pub fn assert_plates(json: &Value, expected: &[&str]) -> Result<()> {
    let plates: Vec<&str> = movements(json)?
        .iter()
        .map(|m| m["licensePlate"].as_str().unwrap_or_default())
        .collect();
    if plates != expected {
        anyhow::bail!("Expected plates {:?}, got {:?}", expected, plates);
    }
    Ok(())
}
