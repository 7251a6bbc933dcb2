//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Report commands, one per dashboard page
pub mod dashboard;

/// General utility commands
pub mod general;

/// Product lifecycle commands
pub mod product;

// Export commands
pub use dashboard::*;
pub use general::*;
pub use product::*;
