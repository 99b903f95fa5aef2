//! # sbc_core - Squad Chemistry & Requirement Validation Engine
//!
//! Scores candidate lineups for squad-building challenges and checks them
//! against the challenge's scraped requirements.
//!
//! ## Features
//! - Per-player (0-3) and team (0-33) chemistry from position fit and
//!   club/nation/league links between adjacent slots
//! - Pluggable rule books: scoring constants, slot compatibility and
//!   formation graphs are data, loaded from YAML or JSON
//! - Itemized requirement validation that reports every violation at once
//! - JSON API for the page-automation layer
//!
//! Every operation is pure and synchronous. Missing data degrades to "absent"
//! (dead links, no neighbours, zero rating); only caller bugs such as a squad
//! without 11 slots or an unknown position code are errors.
//!
//! ```
//! use sbc_core::{validate, ChemistryEngine, Player, Position, Requirements};
//!
//! let mut squad = sbc_core::default_rulebook().formations().blank_squad("4-3-3").unwrap();
//! squad.place(0, Player::new("gk", 78, Position::GK).with_club("ACME")).unwrap();
//! squad.place(1, Player::new("lb", 74, Position::LB).with_club("ACME")).unwrap();
//!
//! let engine = ChemistryEngine::default();
//! assert_eq!(engine.team_chemistry(&squad), 2);
//! assert_eq!(engine.team_rating(&squad), 76);
//!
//! let result = validate(&squad, &Requirements { min_rating: Some(80), ..Default::default() });
//! assert!(!result.valid);
//! ```

pub mod api;
pub mod chemistry;
pub mod data;
pub mod error;
pub mod models;
pub mod validation;

pub use api::{evaluate_squad_json, evaluate_squad_json_with, request_schema};
pub use chemistry::{
    link, team_rating, ChemistryConfig, ChemistryEngine, ChemistryReport, CompatibilityTable,
    FormationGraph, FormationLibrary, LinkStrength, PositionFit, SlotChemistry,
};
pub use data::{default_rulebook, RuleBook};
pub use error::{Result, SbcError};
pub use models::{FormationSlot, Player, Position, Quality, Rarity, Requirements, Squad};
pub use validation::{validate, RequirementValidator, ValidationResult, Violation};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
