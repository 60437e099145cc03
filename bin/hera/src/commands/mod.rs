pub mod catalog;
pub mod context;
pub mod status;
