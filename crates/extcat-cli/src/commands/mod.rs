//! Command implementations for extcat-cli

pub mod convert;
pub mod extension;

pub use convert::run_convert;
pub use extension::{run_add_extension, run_list_extensions};
