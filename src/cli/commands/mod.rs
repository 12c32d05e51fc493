pub mod report;
pub mod questions;
pub mod template;
