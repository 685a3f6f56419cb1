//! Rendering of responses and batch reports

pub mod console;
pub mod formatter;
