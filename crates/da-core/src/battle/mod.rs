//! Turn-based battle demo
//!
//! The player levels up, finds equipment and faces ever larger waves of
//! randomly generated monsters until they fall.

mod combatant;
mod encounter;
mod item;

pub use combatant::{Combatant, CombatantKind};
pub use encounter::{
    Battle, BattleCommand, BattleError, RoundResult, defend, heal, roll_attack, spawn_monsters,
};
pub use item::{Item, ItemKind};
