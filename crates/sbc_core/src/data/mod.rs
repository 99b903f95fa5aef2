//! Rule data
//!
//! - Rule book type and loaders (YAML / JSON)
//! - Embedded FC 26 default rule book

pub mod embedded;
pub mod rulebook;

pub use embedded::{default_rulebook, FC26_RULES_YAML};
pub use rulebook::{AsymmetryReport, RuleBook, RuleBookFile};
