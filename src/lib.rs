pub mod commands;
pub mod context;
pub mod display;
pub mod error;
pub mod logging;
pub mod naming;
pub mod prompt;

pub use error::BranchError;
pub use naming::{BranchName, PunctuationPolicy, kebab_case, normalize};

#[cfg(test)]
pub mod test_utils;
