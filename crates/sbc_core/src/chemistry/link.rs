//! Pairwise links between squad members

use super::config::ChemistryConfig;
use crate::models::Player;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LinkStrength {
    Dead,
    Medium,
    Strong,
}

impl LinkStrength {
    pub fn value(&self, config: &ChemistryConfig) -> u8 {
        match self {
            LinkStrength::Dead => config.link_dead,
            LinkStrength::Medium => config.link_medium,
            LinkStrength::Strong => config.link_strong,
        }
    }
}

/// Both sides present and equal. A missing field never matches.
fn shared(a: Option<&str>, b: Option<&str>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y)
}

/// Link between two (possibly empty) slots.
///
/// Only symmetric equality tests are used, so `link(a, b) == link(b, a)`.
pub fn link(a: Option<&Player>, b: Option<&Player>) -> LinkStrength {
    let (Some(a), Some(b)) = (a, b) else {
        return LinkStrength::Dead;
    };

    let same_club = shared(a.club.as_deref(), b.club.as_deref());
    let same_nation = shared(a.nation.as_deref(), b.nation.as_deref());
    let same_league = shared(a.league.as_deref(), b.league.as_deref());

    if same_club && same_nation {
        LinkStrength::Strong
    } else if same_club || same_nation || same_league {
        LinkStrength::Medium
    } else {
        LinkStrength::Dead
    }
}
