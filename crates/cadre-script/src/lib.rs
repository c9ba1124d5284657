//! Operation-chain analysis for CAD construction scripts
//!
//! Parses Python-syntax construction scripts (CadQuery-style call chains)
//! into a syntax tree and derives three views from it:
//!
//! - [`OperationExtractor`]: the ordered sequence of operation names
//! - [`ConstructionTree`]: an indented rendering of call nesting
//! - [`rename_operation`]: a structure-preserving operation rename
//!
//! # Example
//!
//! ```
//! use cadre_script::{ScriptTree, OperationExtractor};
//!
//! let script = ScriptTree::parse(
//!     r#"result = cq.Workplane("XY").box(60, 20, 10).fillet(2)"#,
//! ).unwrap();
//!
//! let mut extractor = OperationExtractor::new();
//! extractor.visit(&script);
//! assert_eq!(extractor.operations(), ["fillet", "box", "Workplane"]);
//! ```

// Core modules
mod error;
mod extract;
mod rename;
mod script;
mod tree;

// Re-exports
pub use error::ParseError;
pub use extract::OperationExtractor;
pub use rename::{rename_operation, RenameOutcome};
pub use script::ScriptTree;
pub use tree::{ConstructionEntry, ConstructionTree};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
