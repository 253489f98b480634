mod country;

pub use country::CountryTable;
