pub mod decoder;
pub mod identifier;
pub mod list;
pub mod symbol;
