//! Equipment found between waves

use std::fmt;

use strum::{Display, EnumIter};

/// Kind of equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum ItemKind {
    Sword,
    Armor,
    Shield,
}

/// A piece of equipment with its bonus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub kind: ItemKind,
    pub bonus: i32,
}

impl Item {
    pub const fn new(kind: ItemKind, bonus: i32) -> Self {
        Self { kind, bonus }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.kind, self.bonus)
    }
}
