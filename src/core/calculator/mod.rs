pub mod coverage;
pub mod gaps;
pub mod layout;
pub mod summary;
