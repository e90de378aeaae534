// Public modules
pub mod error;
pub mod migrate;
pub mod plan;
pub mod rewrite;

// Internal modules - not part of public API
pub(crate) mod paths;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use migrate::{FileReport, MigrateResult};
pub use plan::FileTarget;
pub use rewrite::{ReplaceMode, RewriteRule, RuleOutcome};
