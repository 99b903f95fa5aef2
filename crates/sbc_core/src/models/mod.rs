pub mod player;
pub mod requirements;
pub mod squad;

pub use player::{Player, Position, Quality, Rarity, MAX_RATING};
pub use requirements::{Requirements, DEFAULT_FORMATION};
pub use squad::{FormationSlot, Squad, SQUAD_SIZE};
