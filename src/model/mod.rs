//! Data model for raw and normalized tabular data

mod dataset;
mod join;
mod raw;
mod schema;
mod table;

pub use dataset::Dataset;
pub use join::{inner_join, KeyIndex};
pub use raw::{RawTable, RawTableSet, MISSING};
pub use schema::{Column, ColumnType};
pub use table::{CellValue, Row, Table};
