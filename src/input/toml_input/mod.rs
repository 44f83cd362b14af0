//! The raw data as it is written in the input files, before it is checked
//! and turned into the types of the schedule.

mod catalog;
mod preferences;

pub use catalog::*;
pub use preferences::*;
