use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReportViewModel {
    pub file: String,
    pub rows: usize,
    pub problems: Vec<RowProblem>,
}

impl CheckReportViewModel {
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowProblem {
    /// 1-based data row (header excluded)
    pub row: usize,
    pub license_plate: String,
    pub missing: Vec<String>,
}
