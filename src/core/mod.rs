pub mod add;
pub mod calculator;
pub mod config;
pub mod del;
pub mod edit;
pub mod labels;
pub mod log;
pub mod logic;
pub mod prompts;
pub mod recover;
