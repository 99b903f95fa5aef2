use super::link::link;
use super::position::PositionFit;
use crate::data::{default_rulebook, RuleBook};
use crate::error::Result;
use crate::models::{FormationSlot, Player, Position, Squad};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Per-slot breakdown of a chemistry score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SlotChemistry {
    pub index: usize,
    pub required_position: Position,
    pub player_id: String,
    pub player_position: Position,
    pub fit: PositionFit,
    pub penalty: u8,
    /// Sum of link values to occupied neighbours, before clamping.
    pub links: u32,
    pub chemistry: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChemistryReport {
    pub formation: String,
    pub known_formation: bool,
    pub players: Vec<SlotChemistry>,
    pub team_chemistry: u32,
    pub max_team_chemistry: u8,
    pub team_rating: u8,
}

/// Chemistry calculator bound to one rule book.
///
/// Stateless apart from the borrowed rules, so it is `Copy` and can be shared
/// freely between threads working on different squads.
#[derive(Debug, Clone, Copy)]
pub struct ChemistryEngine<'r> {
    rules: &'r RuleBook,
}

impl Default for ChemistryEngine<'static> {
    fn default() -> Self {
        Self::new(default_rulebook())
    }
}

impl<'r> ChemistryEngine<'r> {
    pub fn new(rules: &'r RuleBook) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'r RuleBook {
        self.rules
    }

    pub fn classify(&self, player_position: Position, slot_position: Position) -> PositionFit {
        self.rules
            .compatibility()
            .classify(player_position, slot_position)
    }

    /// Link value between two slots' occupants under this rule book.
    pub fn link_value(&self, a: Option<&Player>, b: Option<&Player>) -> u8 {
        link(a, b).value(self.rules.config())
    }

    /// Chemistry of `player` if it stood in slot `slot_index` of `squad`.
    ///
    /// The slot's current occupant (if any) is ignored; neighbours are read
    /// from the squad's own formation.
    pub fn player_chemistry(
        &self,
        player: &Player,
        slot_index: usize,
        squad: &Squad,
    ) -> Result<u8> {
        let slot = squad.slot(slot_index)?;
        let formation = squad.formation_id();
        Ok(self.score_slot(player, slot, squad, formation).chemistry)
    }

    pub fn team_chemistry(&self, squad: &Squad) -> u32 {
        self.team_chemistry_for(squad, squad.formation_id())
    }

    /// Team chemistry using `formation_id`'s adjacency instead of the squad's own.
    pub fn team_chemistry_for(&self, squad: &Squad, formation_id: &str) -> u32 {
        let total: u32 = squad
            .occupied()
            .map(|(slot, player)| self.score_slot(player, slot, squad, formation_id).chemistry)
            .map(u32::from)
            .sum();
        debug!(formation = formation_id, total, "team chemistry");
        total
    }

    pub fn team_rating(&self, squad: &Squad) -> u8 {
        team_rating(squad)
    }

    pub fn squad_report(&self, squad: &Squad) -> ChemistryReport {
        let formation = squad.formation_id();
        let players: Vec<SlotChemistry> = squad
            .occupied()
            .map(|(slot, player)| self.score_slot(player, slot, squad, formation))
            .collect();
        let team_chemistry = players.iter().map(|p| u32::from(p.chemistry)).sum();

        ChemistryReport {
            formation: formation.to_string(),
            known_formation: self.rules.formations().get(formation).is_some(),
            players,
            team_chemistry,
            max_team_chemistry: self.rules.config().max_team_chemistry,
            team_rating: team_rating(squad),
        }
    }

    fn score_slot(
        &self,
        player: &Player,
        slot: &FormationSlot,
        squad: &Squad,
        formation_id: &str,
    ) -> SlotChemistry {
        let config = self.rules.config();
        let fit = self.classify(player.position, slot.required_position);
        let penalty = fit.penalty(config);

        let links: u32 = self
            .rules
            .formations()
            .adjacent(formation_id, slot.index)
            .iter()
            .filter_map(|&i| squad.occupant(i))
            .map(|neighbour| u32::from(self.link_value(Some(player), Some(neighbour))))
            .sum();

        let raw = i64::from(links) - i64::from(penalty);
        let chemistry = raw.clamp(0, i64::from(config.max_player_chemistry)) as u8;
        trace!(
            slot = slot.index,
            player = %player.id,
            ?fit,
            links,
            chemistry,
            "slot chemistry"
        );

        SlotChemistry {
            index: slot.index,
            required_position: slot.required_position,
            player_id: player.id.clone(),
            player_position: player.position,
            fit,
            penalty,
            links,
            chemistry,
        }
    }
}

/// Mean rating of the occupants, rounded half up; 0 for an empty squad.
pub fn team_rating(squad: &Squad) -> u8 {
    let count = squad.occupied_count() as u32;
    if count == 0 {
        return 0;
    }
    let sum: u32 = squad.occupants().map(|p| u32::from(p.rating)).sum();
    ((2 * sum + count) / (2 * count)) as u8
}
