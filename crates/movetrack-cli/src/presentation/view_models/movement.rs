use movetrack_types::MovementRecord;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementListViewModel {
    pub total: usize,
    pub movements: Vec<MovementRecord>,

    /// Plain-text rendering of `movements`; JSON consumers get the records themselves
    #[serde(skip)]
    pub table: MovementTable,
}

#[derive(Debug, Default)]
pub struct MovementTable {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

/// Outcome of `add` / `import`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestViewModel {
    pub added: usize,
    pub total: usize,
    pub files: Vec<String>,
    pub records: Vec<MovementRecord>,
}
