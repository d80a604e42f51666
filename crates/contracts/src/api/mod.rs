pub mod catalog;
pub mod status;
