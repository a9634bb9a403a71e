pub mod add;
pub mod config;
pub mod coverage;
pub mod del;
pub mod edit;
pub mod export;
pub mod fasting;
pub mod gaps;
pub mod init;
pub mod label;
pub mod list;
pub mod log;
pub mod prompt;
pub mod recover;
pub mod summary;
pub mod timeline;
