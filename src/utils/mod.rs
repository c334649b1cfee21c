pub mod path;
pub mod time;

pub use path::is_html_file;
