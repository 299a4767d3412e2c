pub mod tags;
pub mod types;

pub use tags::{TagCode, TagInfo};
pub use types::*;
