pub mod category;
pub mod specimen;
pub mod table;

pub use category::{Category, CategoryDictionary, CategoryId};
pub use specimen::{Specimen, SpecimenGroupTable, SpecimenLabelTable};
pub use table::{CountTable, PercentTable, Row, Table};
