pub mod config;
pub mod error;
mod exporter;
mod generator;
mod reference;
mod related;
mod sample;
mod template;

pub use config::Config;
pub use error::VardescError;
pub use exporter::Exporter;
pub use generator::{write_description, Generator, Report};
pub use reference::CountryTable;
pub use related::{find_related_files, related_variables, variable_name};
pub use sample::{identifier::Sample, list::read_sample_list};
pub use template::{related_sentence, Description};
