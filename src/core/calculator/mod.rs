pub mod duration;

pub use duration::{row_duration, shift_bounds};
