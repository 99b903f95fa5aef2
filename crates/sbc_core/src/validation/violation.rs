use crate::models::Quality;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute a composition cap groups players by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    League,
    Club,
    Nation,
}

impl GroupKind {
    pub fn label(&self) -> &'static str {
        match self {
            GroupKind::League => "league",
            GroupKind::Club => "club",
            GroupKind::Nation => "nation",
        }
    }
}

/// One failed requirement, with the measured value and the limit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    RatingBelowMinimum { rating: u8, minimum: u8 },
    ChemistryBelowMinimum { chemistry: u32, minimum: u8 },
    TooManyFromSameGroup {
        group: GroupKind,
        name: String,
        count: usize,
        max: u8,
    },
    NotEnoughQuality {
        quality: Quality,
        count: usize,
        minimum: u8,
    },
    NotEnoughRare { count: usize, minimum: u8 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::RatingBelowMinimum { rating, minimum } => {
                write!(f, "Team rating {rating} is below minimum {minimum}")
            }
            Violation::ChemistryBelowMinimum { chemistry, minimum } => {
                write!(f, "Team chemistry {chemistry} is below minimum {minimum}")
            }
            Violation::TooManyFromSameGroup {
                group,
                name,
                count,
                max,
            } => write!(
                f,
                "Too many players from same {}: {count} from {name} (max {max})",
                group.label()
            ),
            Violation::NotEnoughQuality {
                quality,
                count,
                minimum,
            } => write!(
                f,
                "Not enough {} players: {count} (min {minimum})",
                quality.label()
            ),
            Violation::NotEnoughRare { count, minimum } => {
                write!(f, "Not enough rare players: {count} (min {minimum})")
            }
        }
    }
}

/// Outcome of checking a squad against a challenge's requirements.
///
/// `issues` is the user-facing text; `violations` carries the same findings,
/// in the same order, as data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub issues: Vec<String>,
    pub violations: Vec<Violation>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self {
            valid: true,
            issues: Vec::new(),
            violations: Vec::new(),
        }
    }
}

impl ValidationResult {
    pub fn push(&mut self, violation: Violation) {
        self.valid = false;
        self.issues.push(violation.to_string());
        self.violations.push(violation);
    }
}
