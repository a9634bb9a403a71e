pub mod day_summary;
pub mod fasting;
pub mod interval;
pub mod label;
pub mod time_entry;
