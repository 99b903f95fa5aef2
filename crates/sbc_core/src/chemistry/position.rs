//! Slot/position fit

use super::config::ChemistryConfig;
use crate::models::Position;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// How well a player's natural position suits a slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PositionFit {
    Perfect,
    Compatible,
    Wrong,
}

impl PositionFit {
    pub fn penalty(&self, config: &ChemistryConfig) -> u8 {
        match self {
            PositionFit::Perfect => 0,
            PositionFit::Compatible => config.wrong_position_penalty,
            PositionFit::Wrong => config.out_of_position_penalty,
        }
    }
}

/// Positions each slot accepts, keyed by the slot's required position.
///
/// Evaluated from the slot's side only: `LB` accepting `CB` says nothing about
/// whether `CB` accepts `LB`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompatibilityTable {
    accepts: BTreeMap<Position, BTreeSet<Position>>,
}

impl CompatibilityTable {
    pub fn new(accepts: BTreeMap<Position, BTreeSet<Position>>) -> Self {
        Self { accepts }
    }

    pub fn classify(&self, player_position: Position, slot_position: Position) -> PositionFit {
        if player_position == slot_position {
            return PositionFit::Perfect;
        }
        match self.accepts.get(&slot_position) {
            Some(set) if set.contains(&player_position) => PositionFit::Compatible,
            _ => PositionFit::Wrong,
        }
    }

    pub fn accepted_by(&self, slot_position: Position) -> impl Iterator<Item = Position> + '_ {
        self.accepts
            .get(&slot_position)
            .into_iter()
            .flatten()
            .copied()
    }

    /// `(slot, player)` pairs where the slot accepts the player position but
    /// the reverse does not hold.
    pub fn asymmetric_pairs(&self) -> Vec<(Position, Position)> {
        let mut pairs = Vec::new();
        for (&slot, accepted) in &self.accepts {
            for &player in accepted {
                if player == slot {
                    continue;
                }
                if self.classify(slot, player) != PositionFit::Compatible {
                    pairs.push((slot, player));
                }
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_rulebook;
    use proptest::prelude::*;
    use crate::models::Position::*;

    fn table() -> &'static CompatibilityTable {
        default_rulebook().compatibility()
    }

    #[test]
    fn test_cm_slot_accepts_neighbours() {
        for pos in [CDM, CAM, LM, RM] {
            assert_eq!(table().classify(pos, CM), PositionFit::Compatible);
        }
        assert_eq!(table().classify(ST, CM), PositionFit::Wrong);
    }

    #[test]
    fn test_compatibility_is_slot_perspective() {
        // CDM slot takes a CB, but a CB slot does not take a CDM.
        assert_eq!(table().classify(CB, CDM), PositionFit::Compatible);
        assert_eq!(table().classify(CDM, CB), PositionFit::Wrong);
        assert!(table().asymmetric_pairs().contains(&(CDM, CB)));
        assert!(!table().asymmetric_pairs().contains(&(LB, LWB)));
    }

    #[test]
    fn test_goalkeeper_slot_only_takes_goalkeepers() {
        for pos in Position::ALL.into_iter().filter(|p| !p.is_goalkeeper()) {
            assert_eq!(table().classify(pos, GK), PositionFit::Wrong);
        }
    }

    #[test]
    fn test_empty_table_only_knows_perfect() {
        let empty = CompatibilityTable::default();
        assert_eq!(empty.classify(CM, CM), PositionFit::Perfect);
        assert_eq!(empty.classify(CDM, CM), PositionFit::Wrong);
    }

    #[test]
    fn test_built_table_is_read_from_slot_side() {
        let table = CompatibilityTable::new(BTreeMap::from([(ST, BTreeSet::from([CF]))]));
        assert_eq!(table.classify(CF, ST), PositionFit::Compatible);
        assert_eq!(table.classify(ST, CF), PositionFit::Wrong);
        assert_eq!(table.accepted_by(ST).collect::<Vec<_>>(), [CF]);
        assert_eq!(table.asymmetric_pairs(), [(ST, CF)]);
    }

    #[test]
    fn test_penalties_follow_config() {
        let cfg = ChemistryConfig::default();
        assert_eq!(PositionFit::Perfect.penalty(&cfg), 0);
        assert_eq!(PositionFit::Compatible.penalty(&cfg), 1);
        assert_eq!(PositionFit::Wrong.penalty(&cfg), 3);
    }

    proptest! {
        #[test]
        fn prop_same_position_is_perfect(i in 0usize..Position::ALL.len()) {
            let p = Position::ALL[i];
            prop_assert_eq!(table().classify(p, p), PositionFit::Perfect);
        }
    }
}
