pub mod fasting;
pub mod initialize;
pub mod labels;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod queries;
