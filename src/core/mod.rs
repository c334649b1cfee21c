pub mod calculator;
pub mod logic;
pub mod reconcile;
pub mod sorter;

pub use logic::{Core, Processed};
