use super::player::{Player, Position};
use crate::error::{Result, SbcError};
use serde::{Deserialize, Serialize};

/// Number of slots in every squad.
pub const SQUAD_SIZE: usize = 11;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormationSlot {
    pub index: usize,
    pub required_position: Position,
    #[serde(default)]
    pub occupant: Option<Player>,
}

impl FormationSlot {
    pub fn vacant(index: usize, required_position: Position) -> Self {
        Self {
            index,
            required_position,
            occupant: None,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}

/// Eleven ordered slots plus the formation they are laid out in.
///
/// Only constructible through [`Squad::new`] (or deserialization, which goes
/// through the same check), so the slot count and slot numbering always hold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "RawSquad")]
pub struct Squad {
    formation_id: String,
    slots: Vec<FormationSlot>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSquad {
    formation_id: String,
    slots: Vec<FormationSlot>,
}

impl TryFrom<RawSquad> for Squad {
    type Error = SbcError;

    fn try_from(raw: RawSquad) -> Result<Self> {
        Squad::new(raw.formation_id, raw.slots)
    }
}

impl Squad {
    pub fn new(formation_id: impl Into<String>, slots: Vec<FormationSlot>) -> Result<Self> {
        if slots.len() != SQUAD_SIZE {
            return Err(SbcError::InvalidSquadSize {
                expected: SQUAD_SIZE,
                found: slots.len(),
            });
        }
        if let Some((_, slot)) = slots.iter().enumerate().find(|(i, slot)| slot.index != *i) {
            return Err(SbcError::InvalidSlotIndex { index: slot.index });
        }
        for player in slots.iter().filter_map(|s| s.occupant.as_ref()) {
            player.validate()?;
        }

        Ok(Self {
            formation_id: formation_id.into(),
            slots,
        })
    }

    /// Empty squad laid out from a formation template's positions, in slot order.
    pub fn empty(formation_id: impl Into<String>, positions: [Position; SQUAD_SIZE]) -> Self {
        let slots = positions
            .iter()
            .enumerate()
            .map(|(index, &pos)| FormationSlot::vacant(index, pos))
            .collect();
        Self {
            formation_id: formation_id.into(),
            slots,
        }
    }

    pub fn formation_id(&self) -> &str {
        &self.formation_id
    }

    pub fn slots(&self) -> &[FormationSlot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Result<&FormationSlot> {
        self.slots
            .get(index)
            .ok_or(SbcError::InvalidSlotIndex { index })
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut FormationSlot> {
        self.slots
            .get_mut(index)
            .ok_or(SbcError::InvalidSlotIndex { index })
    }

    pub fn occupant(&self, index: usize) -> Option<&Player> {
        self.slots.get(index).and_then(|s| s.occupant.as_ref())
    }

    /// Occupied slots paired with their players, in slot order.
    pub fn occupied(&self) -> impl Iterator<Item = (&FormationSlot, &Player)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.occupant.as_ref().map(|p| (slot, p)))
    }

    pub fn occupants(&self) -> impl Iterator<Item = &Player> {
        self.slots.iter().filter_map(|slot| slot.occupant.as_ref())
    }

    pub fn occupied_count(&self) -> usize {
        self.occupants().count()
    }

    pub fn empty_slot_indices(&self) -> Vec<usize> {
        self.slots
            .iter()
            .filter(|s| !s.is_occupied())
            .map(|s| s.index)
            .collect()
    }

    /// Puts `player` into slot `index`, returning whoever was there before.
    pub fn place(&mut self, index: usize, player: Player) -> Result<Option<Player>> {
        player.validate()?;
        let slot = self.slot_mut(index)?;
        Ok(slot.occupant.replace(player))
    }

    pub fn clear(&mut self, index: usize) -> Result<Option<Player>> {
        let slot = self.slot_mut(index)?;
        Ok(slot.occupant.take())
    }
}
