pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use time::{is_valid_time, sanitize_time, time_to_minutes};
