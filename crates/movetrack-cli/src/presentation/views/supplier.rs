use std::fmt;

use movetrack_core::layout::{SupplierTab, SupplierView};

use crate::presentation::view_models::SupplierViewModel;

impl fmt::Display for SupplierViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let SupplierView::Tabs { tabs, selected } = &self.view else {
            return writeln!(f, "No supplier data available for this vehicle.");
        };

        let bar: Vec<String> = tabs
            .iter()
            .enumerate()
            .map(|(index, tab)| {
                if index == *selected {
                    format!("[{}]", tab.label)
                } else {
                    tab.label.clone()
                }
            })
            .collect();
        writeln!(f, "{}", bar.join(" | "))?;

        if self.show_all {
            for tab in tabs {
                writeln!(f)?;
                write_tab(f, tab)?;
            }
        } else if let Some(tab) = self.view.selected() {
            writeln!(f)?;
            write_tab(f, tab)?;
        }
        Ok(())
    }
}

fn write_tab(f: &mut fmt::Formatter<'_>, tab: &SupplierTab) -> fmt::Result {
    writeln!(f, "== {} ==", tab.label)?;
    for section in &tab.sections {
        writeln!(f, "{}", section.title)?;
        let width = section
            .rows
            .iter()
            .map(|row| row.label.chars().count())
            .max()
            .unwrap_or(0);
        for row in &section.rows {
            writeln!(f, "  {:<width$}  {}", row.label, row.value, width = width)?;
        }
    }
    Ok(())
}
