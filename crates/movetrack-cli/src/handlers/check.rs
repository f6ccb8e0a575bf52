use anyhow::Result;
use std::path::Path;

use crate::csv_import;
use crate::presentation::presenters;
use crate::presentation::renderers::Renderer;

pub fn handle(file: &Path, renderer: &impl Renderer) -> Result<()> {
    let rows = csv_import::read_file(file)?;
    renderer.render(presenters::present_check_report(
        file.display().to_string(),
        &rows,
    ))
}
