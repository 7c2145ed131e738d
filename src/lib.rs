//! Policy definition model and loader for the vigil security monitor.
//!
//! A policy document is YAML: a sequence of single-key items, each
//! declaring either a `rule` (a named, taggable expression matched against
//! runtime events) or a `macro` (a named expression fragment for reuse
//! inside rules). Loading decodes the document, classifies each item, maps
//! its fields onto the typed definition, and validates the result. The
//! expression language itself is opaque here; compiling and evaluating
//! expressions is the rule engine's job.
//!
//! # Example
//!
//! ```
//! use vigil_policy::load_policy;
//!
//! let yaml = r#"
//! - macro:
//!     id: sensitive_files
//!     expression: '["/etc/shadow", "/etc/passwd"]'
//! - rule:
//!     id: shadow_open
//!     expression: open.filename == "/etc/shadow"
//!     tags: {category: fim}
//! "#;
//!
//! let policy = load_policy(yaml.as_bytes()).unwrap();
//! assert_eq!(policy.rules.len(), 1);
//! assert_eq!(policy.macros.len(), 1);
//! assert_eq!(policy.rules[0].id, "shadow_open");
//! ```

mod error;
mod ident;
mod loader;
mod model;
mod parser;
mod validate;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::{PolicyError, Result, ValidationError};
pub use ident::{is_valid_id, ID_PATTERN};
pub use loader::{load_policy, load_policy_with, LoadOptions};
pub use model::{ItemKind, MacroDefinition, MacroId, Policy, RuleDefinition, RuleId};
