mod export;
pub mod segment;

pub use export::Exporter;
