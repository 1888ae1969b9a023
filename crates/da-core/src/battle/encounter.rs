//! Waves of monsters and the rounds fought against them

use strum::IntoEnumIterator;
use thiserror::Error;
use tracing::{debug, info};

use crate::battle::combatant::{Combatant, CombatantKind};
use crate::battle::item::{Item, ItemKind};
use crate::rng::GameRng;
use crate::{BAD_COMMAND_MESSAGE, MONSTER_ATTACK_PERCENT};

/// Battle command errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    #[error("there is no monster number {target} (choose 1 to {count})")]
    NoSuchMonster { target: usize, count: usize },

    #[error("the battle is over")]
    Finished,
}

/// What the player does this round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleCommand {
    /// Attack the monster with this 1-based number
    Attack(usize),
    Heal,
    /// Anything else typed at the prompt
    Unknown,
}

impl BattleCommand {
    /// 'a' still needs a target; returns `None` for it
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            'a' => None,
            'h' => Some(BattleCommand::Heal),
            _ => Some(BattleCommand::Unknown),
        }
    }
}

/// How a round left the battlefield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    Continue,
    /// Every monster of the wave is dead
    WaveCleared,
    PlayerDied,
}

/// Roll the damage `attacker` deals
pub fn roll_attack(attacker: &Combatant, rng: &mut GameRng) -> i32 {
    rng.gaussian_at_least(f64::from(attacker.potential_damage()), 2.0, 1)
}

/// Reduce `damage` by a defense roll and apply it. Returns the damage taken.
pub fn defend(defender: &mut Combatant, damage: i32, rng: &mut GameRng) -> i32 {
    let spread = if defender.level > 0 {
        1.0 / f64::from(defender.level)
    } else {
        0.0
    };
    let defense = rng.gaussian(f64::from(defender.armor_class()), spread) as i32;
    let taken = (damage - defense).max(0);
    defender.health -= taken;
    taken
}

/// Heal by a roll around strength. Returns the amount healed.
pub fn heal(combatant: &mut Combatant, rng: &mut GameRng) -> i32 {
    let amount = rng.gaussian_at_least(f64::from(combatant.strength), 3.0, 1);
    combatant.health += amount;
    amount
}

/// Generate a wave scaled to the player's level
pub fn spawn_monsters(player: &Combatant, rng: &mut GameRng) -> Vec<Combatant> {
    let plevel = f64::from(player.level);
    let count = rng.gaussian_at_least(plevel, plevel / 2.0, 1);
    let kinds: Vec<_> = CombatantKind::monsters().collect();

    (0..count)
        .map(|_| {
            let level = rng.gaussian_at_least(plevel, plevel / 4.0, 1);
            let kind = rng.choose(&kinds).copied().unwrap_or(CombatantKind::Slime);
            let (strength_centre, health_centre) = kind.stat_centres(level);
            let l = f64::from(level);
            let strength = rng.gaussian_at_least(strength_centre, l / 4.0, 1);
            let health = rng.gaussian_at_least(health_centre * 5.0, l / 2.0, 1);
            Combatant::new(kind, strength, health, level)
        })
        .collect()
}

/// The whole fight: one player against successive waves
#[derive(Debug, Clone)]
pub struct Battle {
    pub player: Combatant,
    pub monsters: Vec<Combatant>,
    pub rng: GameRng,
    /// Waves started so far
    pub wave: u32,
    /// Messages for the current round
    pub messages: Vec<String>,
}

impl Battle {
    pub fn new(rng: GameRng) -> Self {
        Self {
            player: Combatant::player(),
            monsters: Vec::new(),
            rng,
            wave: 0,
            messages: Vec::new(),
        }
    }

    pub fn message(&mut self, msg: impl Into<String>) {
        self.messages.push(msg.into());
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    pub fn is_over(&self) -> bool {
        self.player.is_dead()
    }

    /// Level the player up and send in the next wave
    pub fn start_wave(&mut self) -> Result<(), BattleError> {
        if self.is_over() {
            return Err(BattleError::Finished);
        }
        self.clear_messages();
        self.level_up();
        self.monsters = spawn_monsters(&self.player, &mut self.rng);
        self.wave += 1;
        self.message(format!("{} monster(s) approaches!!", self.monsters.len()));
        info!(wave = self.wave, monsters = self.monsters.len(), level = self.player.level, "wave started");
        Ok(())
    }

    /// Gain a level, health, strength and a chance at new equipment
    pub fn level_up(&mut self) {
        let rng = &mut self.rng;
        let player = &mut self.player;
        player.level += 1;
        let level = f64::from(player.level);
        player.health += rng.gaussian_at_least(20.0 + level * 5.0, 5.0, 1);
        player.strength += rng.gaussian_at_least(3.0 + level, 1.0, 1);

        let kinds: Vec<_> = ItemKind::iter().collect();
        let kind = rng.choose(&kinds).copied().unwrap_or(ItemKind::Sword);
        let found = Item::new(kind, rng.gaussian_at_least(level, level / 2.0, 1));

        self.message(format!("You found a {found}!!!!"));
        if self.player.offer_item(found) {
            self.message("You keep the shiny new toy!");
        } else {
            self.message("You toss aside the ugly old thing!");
        }
    }

    /// Check a 1-based monster number
    pub fn check_target(&self, target: usize) -> Result<usize, BattleError> {
        if target == 0 || target > self.monsters.len() {
            return Err(BattleError::NoSuchMonster {
                target,
                count: self.monsters.len(),
            });
        }
        Ok(target - 1)
    }

    /// Player hits the chosen monster
    pub fn player_attack(&mut self, target: usize) -> Result<(), BattleError> {
        let index = self.check_target(target)?;
        let damage = roll_attack(&self.player, &mut self.rng);
        let monster = &mut self.monsters[index];
        let taken = defend(monster, damage, &mut self.rng);
        let msg = format!("{} deals {taken} damage to {monster}!!!", self.player);
        debug!(target, damage, taken, "player attacks");
        self.message(msg);
        Ok(())
    }

    pub fn player_heal(&mut self) {
        let amount = heal(&mut self.player, &mut self.rng);
        let msg = format!("{} is healed by {amount}hp!", self.player);
        self.message(msg);
    }

    /// Each monster attacks with a fixed chance or idles
    pub fn monster_attack(&mut self) {
        let mut lines = Vec::with_capacity(self.monsters.len());
        for monster in &self.monsters {
            if self.rng.percent(MONSTER_ATTACK_PERCENT) {
                lines.push(format!("{monster} attacks!"));
                let damage = roll_attack(monster, &mut self.rng);
                let taken = defend(&mut self.player, damage, &mut self.rng);
                lines.push(format!("{monster} deals {taken} damage to {}!!!", self.player));
            } else {
                lines.push(format!("{monster} twiddles its thumbs"));
            }
        }
        self.messages.extend(lines);
    }

    /// Remove slain monsters, announcing each
    pub fn bring_out_your_dead(&mut self) {
        let (dead, alive): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.monsters).into_iter().partition(Combatant::is_dead);
        self.monsters = alive;
        for monster in dead {
            self.message(format!("{monster} has died!!!"));
        }
    }

    /// Resolve one round: the player's command, the dead, then the monsters.
    ///
    /// An attack on a monster that does not exist is refused without using
    /// up the round.
    pub fn play_round(&mut self, command: BattleCommand) -> Result<RoundResult, BattleError> {
        if self.is_over() {
            return Err(BattleError::Finished);
        }
        if let BattleCommand::Attack(target) = command {
            self.check_target(target)?;
        }
        self.clear_messages();

        match command {
            BattleCommand::Attack(target) => self.player_attack(target)?,
            BattleCommand::Heal => self.player_heal(),
            BattleCommand::Unknown => self.message(BAD_COMMAND_MESSAGE),
        }
        self.bring_out_your_dead();
        self.monster_attack();

        let result = if self.player.is_dead() {
            RoundResult::PlayerDied
        } else if self.monsters.is_empty() {
            RoundResult::WaveCleared
        } else {
            RoundResult::Continue
        };
        debug!(?command, ?result, health = self.player.health, "round resolved");
        Ok(result)
    }

    /// Closing lines once the player has fallen
    pub fn summary(&self) -> Vec<&'static str> {
        let mut lines = Vec::new();
        if self.player.is_dead() {
            lines.push("You Have Died");
        }
        if self.monsters.is_empty() {
            if self.player.is_dead() {
                lines.push("BUT");
            }
            lines.push("You have killed the monsters!!!");
        }
        lines
    }
}
