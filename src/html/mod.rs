//! HTML side of the pipeline: locate the table, scan its rows, write it back.

pub mod extract;
pub mod parser;
pub mod render;

pub use extract::{extract_table, extract_table_from_file};
pub use parser::parse_rows;
pub use render::render_table;
