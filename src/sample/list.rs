use std::path::Path;

use anyhow::Context;
use log::debug;

use crate::error::VardescError;

use super::{decoder::decode_text, symbol::COMMENT};

/// Read sample identifiers, one per line, lowercased. Blank lines and lines starting with
/// `#` are skipped; order and duplicates are kept.
pub fn read_sample_list(path: &Path) -> anyhow::Result<Vec<String>> {
    if !path.exists() {
        return Err(VardescError::SampleListNotFound(path.into()).into());
    }
    let raw = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let contents =
        decode_text(&raw).ok_or_else(|| VardescError::InvalidEncoding(path.into()))?;
    let samples = parse_sample_list(&contents);
    debug!("{} samples listed in {}", samples.len(), path.display());
    Ok(samples)
}

pub fn parse_sample_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT))
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blanks_skipped() {
        let contents = "### to do\nAF2015\n\n  sn2023  \n# bd2022ir\r\nbd2022IR\naf2015\n";
        assert_eq!(
            parse_sample_list(contents),
            vec!["af2015", "sn2023", "bd2022ir", "af2015"]
        );
    }

    #[test]
    fn read_from_file_with_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        std::fs::write(&path, b"\xEF\xBB\xBFSN2023\r\nbd2022ir\r\n").unwrap();
        assert_eq!(read_sample_list(&path).unwrap(), vec!["sn2023", "bd2022ir"]);
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        std::fs::write(&path, b"sn2023\nbd\xFF2022\n").unwrap();
        let err = read_sample_list(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<VardescError>(),
            Some(VardescError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_sample_list(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<VardescError>(),
            Some(VardescError::SampleListNotFound(_))
        ));
    }
}
