//! Application-level configuration.
//!
//! - [`CompileParams`]: demo selection for the offline compilation stage

pub mod compile_params;

pub use compile_params::CompileParams;
