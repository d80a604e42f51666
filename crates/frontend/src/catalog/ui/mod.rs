pub mod details;
pub mod display;
pub mod list;
