//! CLI command implementations

mod clean;
mod generate;

pub use clean::cmd_clean;
pub use generate::cmd_generate;
