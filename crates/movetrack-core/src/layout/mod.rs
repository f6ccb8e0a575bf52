//! Explicit display layouts.
//!
//! Rows are described by ordered `(label, accessor, formatter)` tables rather than by walking
//! object keys. Renderers only paint the resulting views.

mod movement;
mod supplier;

pub use movement::{MOVEMENT_COLUMNS, MovementColumn, MovementRow, movement_rows};
pub use supplier::{
    FieldDef, FieldFormat, FieldRow, SectionDef, SectionView, SupplierLayout, SupplierTab,
    SupplierView, layout_for,
};

/// Turn a camelCase field name into a title-cased label.
///
/// `firstRegistrationDate` → `First Registration Date`
pub fn humanize_key(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    for ch in key.chars() {
        if ch.is_uppercase() || words.is_empty() {
            words.push(String::new());
        }
        if let Some(word) = words.last_mut() {
            word.push(ch);
        }
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
