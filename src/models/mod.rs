pub mod row;

pub use row::{ColumnLayout, Correction, Row, Table};
