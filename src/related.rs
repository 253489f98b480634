use std::{path::Path, sync::LazyLock};

use anyhow::Context;
use log::debug;
use regex::Regex;

use crate::sample::symbol::{DELETE, DOLLAR, GEO_PREFIX, SPREADSHEET_EXTENSION};

static YEAR_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}_\d{4}").expect("year range pattern"));

/// List workbooks in `dir` that define multi-year geography variables for a country, e.g.
/// `geo_bd1993_2022_a.xlsx`. Names are returned sorted.
pub fn find_related_files(dir: &Path, code: &str) -> anyhow::Result<Vec<String>> {
    let pattern = format!("{}{}", GEO_PREFIX, code.to_lowercase());
    let mut found = vec![];
    let entries = std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("listing {}", dir.display()))?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if !is_related(&name, &pattern) {
            continue;
        }
        // follows symlinks; dangling links and directories are skipped
        if entry.path().is_file() {
            found.push(name);
        }
    }
    found.sort();
    debug!("related files for {code}: {found:?}");
    Ok(found)
}

fn is_related(name: &str, pattern: &str) -> bool {
    let lower = name.to_lowercase();
    lower.ends_with(&format!(".{SPREADSHEET_EXTENSION}"))
        && lower.contains(pattern)
        && YEAR_RANGE.is_match(name)
        && !lower.contains(DELETE)
        && !lower.contains(DOLLAR)
}

/// `geo_bd1993_2022_a.xlsx` -> `geo_bd1993_2022`
pub fn variable_name(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name);
    match stem.rsplit_once('_') {
        Some((head, _)) => head.to_owned(),
        None => stem.to_owned(),
    }
}

/// Cleaned, de-duplicated variable names, sorted.
pub fn related_variables(dir: &Path, code: &str) -> anyhow::Result<Vec<String>> {
    let mut names = find_related_files(dir, code)?
        .iter()
        .map(|file| variable_name(file))
        .collect::<Vec<String>>();
    names.sort();
    names.dedup();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const PATTERN: &str = "geo_bd";

    #[test]
    fn inclusion() {
        assert!(is_related("geo_bd1993_2022_a.xlsx", PATTERN));
        assert!(is_related("GEO_BD1993_2022_A.XLSX", PATTERN));
        assert!(is_related("old_geo_bd1993_2014_x.xlsx", PATTERN));
    }

    #[test]
    fn exclusion() {
        assert!(!is_related("geo_bd1993_2022_a_DELETE.xlsx", PATTERN));
        assert!(!is_related("~$geo_bd1993_2022_a.xlsx", PATTERN));
        assert!(!is_related("geo_bd1993_2022_a.doc", PATTERN));
        assert!(!is_related("geo_bd2022_a.xlsx", PATTERN));
        assert!(!is_related("geo_bd1993-2022_a.xlsx", PATTERN));
        assert!(!is_related("geo_sn1992_2019_a.xlsx", PATTERN));
    }

    #[test]
    fn variable_names() {
        assert_eq!(variable_name("geo_bd1993_2022_a.xlsx"), "geo_bd1993_2022");
        assert_eq!(variable_name("geo_sn1992_2019_sn.xlsx"), "geo_sn1992_2019");
        assert_eq!(variable_name("geo.xlsx"), "geo");
    }

    #[test]
    fn scan_directory() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "geo_bd2000_2022_b.xlsx",
            "geo_bd1993_2022_a.xlsx",
            "geo_bd1993_2022_a.doc",
            "geo_bd1993_2022_c.xlsx",
            "geo_bd1993_2022_delete.xlsx",
            "~$geo_bd2000_2022_b.xlsx",
            "geo_bd2022_desc.xlsx",
            "geo_sn1992_2019_a.xlsx",
        ] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("geo_bd1990_2000_dir.xlsx")).unwrap();

        assert_eq!(
            find_related_files(dir.path(), "bd").unwrap(),
            vec![
                "geo_bd1993_2022_a.xlsx",
                "geo_bd1993_2022_c.xlsx",
                "geo_bd2000_2022_b.xlsx"
            ]
        );
        assert_eq!(
            related_variables(dir.path(), "BD").unwrap(),
            vec!["geo_bd1993_2022", "geo_bd2000_2022"]
        );
        assert!(related_variables(dir.path(), "kh").unwrap().is_empty());
    }

    #[test]
    fn duplicates_apart_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "geo_bd1993_2022_a.xlsx",
            "geo_bd1993_2022_b_x.xlsx",
            "geo_bd1993_2022_z.xlsx",
        ] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        assert_eq!(
            related_variables(dir.path(), "bd").unwrap(),
            vec!["geo_bd1993_2022", "geo_bd1993_2022_b"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("workbooks");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("bd.xlsx"), b"").unwrap();
        let geography = dir.path().join("geography");
        fs::create_dir(&geography).unwrap();
        std::os::unix::fs::symlink(
            target.join("bd.xlsx"),
            geography.join("geo_bd1993_2022_a.xlsx"),
        )
        .unwrap();
        std::os::unix::fs::symlink(
            target.join("gone.xlsx"),
            geography.join("geo_bd2000_2022_a.xlsx"),
        )
        .unwrap();
        assert_eq!(
            find_related_files(&geography, "bd").unwrap(),
            vec!["geo_bd1993_2022_a.xlsx"]
        );
    }

    #[test]
    fn missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_related_files(&dir.path().join("nope"), "bd").is_err());
    }
}
