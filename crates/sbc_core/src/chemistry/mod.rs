//! Chemistry scoring
//!
//! - `position`: slot/position fit (perfect, compatible, wrong)
//! - `link`: pairwise club/nation/league links
//! - `formation`: per-formation adjacency graphs
//! - `engine`: per-player and team chemistry over a squad

pub mod config;
pub mod engine;
pub mod formation;
pub mod link;
pub mod position;

pub use config::ChemistryConfig;
pub use engine::{team_rating, ChemistryEngine, ChemistryReport, SlotChemistry};
pub use formation::{AsymmetricEdge, FormationGraph, FormationLibrary, FormationSpec};
pub use link::{link, LinkStrength};
pub use position::{CompatibilityTable, PositionFit};
