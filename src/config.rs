use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};

const CONFIG_DIR_NAME: &str = "vardesc";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Text file listing one sample identifier per line.
    pub sample_list: PathBuf,
    /// Reference table mapping country codes to full names.
    pub countries: PathBuf,
    /// Directory holding existing geography variable workbooks.
    pub geography_dir: PathBuf,
    /// Directory the generated descriptions are written into.
    pub output_dir: PathBuf,
    pub code_column: String,
    pub name_column: String,
    /// Continue with the next sample when one fails.
    pub keep_going: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sample_list: "/pkg/ipums/dhs/variables/geography/templates/vardescs_to_generate.txt"
                .into(),
            countries: "/pkg/ipums/dhs/metadata/countries.xlsx".into(),
            geography_dir: "/pkg/ipums/dhs/variables/geography".into(),
            output_dir: "/pkg/ipums/dhs/variables/geography/templates/autogenerated_vardescs"
                .into(),
            code_column: "country".into(),
            name_column: "fullname".into(),
            keep_going: false,
        }
    }
}

impl Config {
    /// Read config from an explicit file, or from the user config directory when `path` is
    /// `None`. A missing default file yields `Config::default()`.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Config> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                // Linux: ~/.config/vardesc/config.toml
                let Some(dir) = dirs::config_dir() else {
                    return Ok(Config::default());
                };
                let path = dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
                if path.is_file() {
                    Self::from_file(&path)
                } else {
                    debug!("no config at {}, using defaults", path.display());
                    Ok(Config::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("invalid TOML in config file {}", path.display()))?;
        Ok(config)
    }
}
