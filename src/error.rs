use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum VardescError {
    #[error("sample list not found: {}", .0.display())]
    SampleListNotFound(PathBuf),
    #[error("not valid UTF-8: {}", .0.display())]
    InvalidEncoding(PathBuf),
    #[error("invalid sample identifier {0:?}: expected a country code followed by a 4-digit year")]
    InvalidSample(String),
    #[error("country not found for sample {sample:?} (code {code:?})")]
    CountryNotFound { sample: String, code: String },
    #[error("column {column:?} missing from reference table {}", .path.display())]
    MissingColumn { column: String, path: PathBuf },
    #[error("unsupported reference table format: {}", .0.display())]
    UnsupportedReferenceFormat(PathBuf),
    #[error("reference table is empty: {}", .0.display())]
    EmptyReferenceTable(PathBuf),
}
