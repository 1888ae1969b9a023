//! Player and monsters on the battlefield

use std::collections::BTreeMap;
use std::fmt;

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::battle::item::{Item, ItemKind};

/// What a combatant is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum CombatantKind {
    Player,
    Slime,
    Orc,
    Sprite,
    Dragon,
}

impl CombatantKind {
    /// Every kind a monster can be
    pub fn monsters() -> impl Iterator<Item = Self> {
        Self::iter().filter(|k| *k != CombatantKind::Player)
    }

    /// Centres of the strength and health rolls for a monster of `level`.
    ///
    /// Health is multiplied by five before rolling.
    pub fn stat_centres(self, level: i32) -> (f64, f64) {
        let l = f64::from(level);
        match self {
            CombatantKind::Player => (0.0, 0.0),
            CombatantKind::Slime => (l * 1.5, l * 1.25),
            CombatantKind::Orc => (l * 2.0, l * l * 1.25),
            CombatantKind::Sprite => (l * 1.75, l),
            CombatantKind::Dragon => (l * 6.0, l * l * 3.0),
        }
    }
}

/// Anything that fights
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combatant {
    pub kind: CombatantKind,
    pub strength: i32,
    pub health: i32,
    pub level: i32,
    /// Best item held of each kind
    pub inventory: BTreeMap<ItemKind, Item>,
}

impl Combatant {
    pub fn new(kind: CombatantKind, strength: i32, health: i32, level: i32) -> Self {
        Self {
            kind,
            strength,
            health,
            level,
            inventory: BTreeMap::new(),
        }
    }

    /// A fresh player before the first level-up
    pub fn player() -> Self {
        Self::new(CombatantKind::Player, 0, 1, 0)
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    fn bonus(&self, kind: ItemKind) -> i32 {
        self.inventory.get(&kind).map_or(0, |item| item.bonus)
    }

    /// Armor plus shield bonus
    pub fn armor_class(&self) -> i32 {
        self.bonus(ItemKind::Armor) + self.bonus(ItemKind::Shield)
    }

    /// Strength plus sword bonus
    pub fn potential_damage(&self) -> i32 {
        self.strength + self.bonus(ItemKind::Sword)
    }

    /// Keep `item` if it beats what is held of its kind. Returns whether it was kept.
    pub fn offer_item(&mut self, item: Item) -> bool {
        match self.inventory.get(&item.kind) {
            Some(held) if held.bonus >= item.bonus => false,
            _ => {
                self.inventory.insert(item.kind, item);
                true
            }
        }
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L:{} {}", self.level, self.kind)
    }
}
