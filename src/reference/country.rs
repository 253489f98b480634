use std::{collections::HashMap, path::Path};

use anyhow::Context;
use calamine::{open_workbook_auto, Reader};
use log::{debug, warn};

use crate::{error::VardescError, sample::identifier::Sample};

const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods"];
const CSV_EXTENSION: &str = "csv";

/// Country code to full country name, loaded once per run.
#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    names: HashMap<String, String>,
}

impl CountryTable {
    /// Load a reference table from the first sheet of a workbook or from a csv file. The first
    /// row holds the column names.
    pub fn load(path: &Path, code_column: &str, name_column: &str) -> anyhow::Result<CountryTable> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        let rows = if WORKBOOK_EXTENSIONS.contains(&extension.as_str()) {
            workbook_rows(path)?
        } else if extension == CSV_EXTENSION {
            csv_rows(path)?
        } else {
            return Err(VardescError::UnsupportedReferenceFormat(path.into()).into());
        };
        let table = Self::from_rows(path, &rows, code_column, name_column)?;
        debug!("{} countries loaded from {}", table.len(), path.display());
        Ok(table)
    }

    fn from_rows(
        path: &Path,
        rows: &[Vec<String>],
        code_column: &str,
        name_column: &str,
    ) -> anyhow::Result<CountryTable> {
        let Some((header, records)) = rows.split_first() else {
            return Err(VardescError::EmptyReferenceTable(path.into()).into());
        };
        let column = |name: &str| {
            header
                .iter()
                .position(|cell| cell.trim() == name)
                .ok_or_else(|| VardescError::MissingColumn {
                    column: name.to_owned(),
                    path: path.into(),
                })
        };
        let code_index = column(code_column)?;
        let name_index = column(name_column)?;

        let mut table = CountryTable::default();
        for record in records {
            let code = record.get(code_index).map(|c| c.trim()).unwrap_or_default();
            if code.is_empty() {
                continue;
            }
            let name = record.get(name_index).map(|n| n.trim()).unwrap_or_default();
            table.insert(code, name);
        }
        Ok(table)
    }

    /// Add a country; the first name seen for a code wins.
    pub fn insert(&mut self, code: &str, name: &str) {
        let code = code.to_lowercase();
        if let Some(existing) = self.names.get(&code) {
            warn!("duplicate country code {code:?}: keeping {existing:?}, ignoring {name:?}");
            return;
        }
        self.names.insert(code, name.to_owned());
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.names.get(&code.to_lowercase()).map(String::as_str)
    }

    /// Full country name for a sample's country code.
    pub fn country_of(&self, sample: &Sample) -> Result<&str, VardescError> {
        self.get(&sample.code)
            .ok_or_else(|| VardescError::CountryNotFound {
                sample: sample.id.clone(),
                code: sample.code.clone(),
            })
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }
}

fn workbook_rows(path: &Path) -> anyhow::Result<Vec<Vec<String>>> {
    let mut workbook =
        open_workbook_auto(path).with_context(|| format!("opening {}", path.display()))?;
    let Some(range) = workbook.worksheet_range_at(0) else {
        return Err(VardescError::EmptyReferenceTable(path.into()).into());
    };
    let range = range.with_context(|| format!("reading first sheet of {}", path.display()))?;
    Ok(range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect())
}

fn csv_rows(path: &Path) -> anyhow::Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut rows = vec![];
    for record in reader.records() {
        let record = record.with_context(|| format!("reading {}", path.display()))?;
        rows.push(record.iter().map(|field| field.to_owned()).collect());
    }
    Ok(rows)
}
