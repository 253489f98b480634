use std::sync::LazyLock;

use regex::Regex;

use crate::error::VardescError;

use super::symbol::{COUNTRY_CODE_LEN, DESC_SUFFIX, DOCX_EXTENSION, GEO_PREFIX};

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}").expect("year pattern"));

/// A survey sample such as `af2015` or `bd2022ir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Identifier as listed, lowercased.
    pub id: String,
    /// Country code, the first two characters of the identifier.
    pub code: String,
    /// First 4-digit run in the identifier.
    pub year: String,
    /// Uppercased identifier, cut after the year when a sub-survey suffix follows it.
    pub name: String,
}

impl Sample {
    pub fn parse(raw: &str) -> Result<Sample, VardescError> {
        let id = raw.trim().to_lowercase();
        let code = id.chars().take(COUNTRY_CODE_LEN).collect::<String>();
        if code.chars().count() < COUNTRY_CODE_LEN {
            return Err(VardescError::InvalidSample(id));
        }
        let Some(year) = YEAR.find(&id) else {
            return Err(VardescError::InvalidSample(id));
        };
        let name = if id.ends_with(|c: char| c.is_ascii_digit()) {
            id.to_uppercase()
        } else {
            // "bd2022ir" -> "BD2022"
            id[..year.end()].to_uppercase()
        };
        Ok(Sample {
            code,
            year: year.as_str().to_owned(),
            name,
            id,
        })
    }

    /// Output document name, e.g. `geo_sn2023_desc.docx`.
    pub fn document_name(&self) -> String {
        format!(
            "{}{}{}.{}",
            GEO_PREFIX,
            self.name.to_lowercase(),
            DESC_SUFFIX,
            DOCX_EXTENSION
        )
    }
}
