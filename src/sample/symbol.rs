pub const COMMENT: char = '#';
pub const COUNTRY_CODE_LEN: usize = 2;
pub const GEO_PREFIX: &str = "geo_";
pub const VARIABLE_PREFIX: &str = "GEO_";
pub const SOURCE_PREFIX: &str = "V101_";
pub const DESC_SUFFIX: &str = "_desc";
pub const DOCX_EXTENSION: &str = "docx";
pub const SPREADSHEET_EXTENSION: &str = "xlsx";
pub const DELETE: &str = "delete";
pub const DOLLAR: &str = "$";
pub const CRVAR_OPEN: &str = "<crvar>";
pub const CRVAR_CLOSE: &str = "</crvar>";
