use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

pub use crate::game::chest::Chest;

pub mod chest;

pub const DEFAULT_CHESTS: i32 = 30;
pub const DEFAULT_MIMICS: i32 = 4;

/// Share of loot chests that turn into armory chests when armory is unlocked.
pub const ARMORY_RATE: Decimal = dec!(0.005);

/// What the player brings into a hunt: upgrades and strategy choices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Loadout {
    pub savers: i32,
    pub crystal_saves: i32,
    pub doublers: i32,
    pub skip_priority: bool,
    pub perfect_wanted: bool,
    pub armory: bool,
}

impl Loadout {
    /// Saver, reinforced crystal saver, one doubler, chasing a perfect hunt.
    pub fn standard() -> Self {
        Self {
            savers: 1,
            crystal_saves: 2,
            doublers: 1,
            skip_priority: false,
            perfect_wanted: true,
            armory: true,
        }
    }
}

/// A chest hunt part way through.
///
/// Every field takes part in equality and hashing, so a `Hunt` can key the
/// solver cache directly. Counts are signed because a transition may push one
/// below zero; such states are caught by [`Hunt::is_terminal`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunt {
    pub chests: i32,
    pub mimics: i32,
    pub savers: i32,
    pub saves: i32,
    pub crystal_saves: i32,
    pub doublers: i32,
    pub doubles: i32,
    pub double_double: bool,
    pub perfect_wanted: bool,
    pub chase: bool,
    pub skip_priority: bool,
    pub armory: bool,
}

impl Hunt {
    pub fn new(chests: i32, mimics: i32, loadout: Loadout) -> Self {
        // two doublers means x2 x2, which rules out chasing the doubled saver
        let double_double = loadout.doublers > 1;
        let perfect_wanted = loadout.perfect_wanted && !double_double;
        Self {
            chests,
            mimics,
            savers: loadout.savers,
            saves: 0,
            crystal_saves: loadout.crystal_saves,
            doublers: loadout.doublers,
            doubles: 0,
            double_double,
            perfect_wanted,
            chase: perfect_wanted,
            skip_priority: loadout.skip_priority,
            armory: loadout.armory,
        }
    }

    pub fn with_skip_priority(self, skip_priority: bool) -> Self {
        Self {
            skip_priority,
            ..self
        }
    }

    /// Only one doubler is ever in play, however many are owned.
    pub fn active_doublers(&self) -> i32 {
        if self.doublers > 0 {
            1
        } else {
            0
        }
    }

    /// Chests that can actually be drawn. Skip priority lets the player step
    /// around savers, so they leave the pool.
    pub fn live_chests(&self) -> i32 {
        if self.skip_priority {
            self.chests - self.savers
        } else {
            self.chests
        }
    }

    fn drawable_savers(&self) -> i32 {
        if self.skip_priority {
            0
        } else {
            self.savers
        }
    }

    pub fn is_terminal(&self) -> bool {
        let nonloot = self.mimics + self.savers + self.active_doublers();
        nonloot >= self.chests || self.chests <= 0
    }

    /// Whether a hunt that has stopped counts as perfect: nothing but mimics
    /// remain, or the hunt ran out exactly.
    pub fn ends_perfect(&self) -> bool {
        self.mimics >= self.chests && self.chests >= 0
    }

    pub fn can_survive_mimic(&self) -> bool {
        self.saves > 0 || self.crystal_saves > 0
    }

    /// Under skip priority the player opens the saver straight away when
    /// chasing the doubled saver with a double in hand, when no crystal
    /// protection is left outside the chase, or when there is no doubler left
    /// to find.
    pub fn opens_saver_first(&self) -> bool {
        (self.chase && self.doubles > 0)
            || (!self.chase && self.crystal_saves <= 0)
            || self.doublers <= 0
    }

    pub fn loot_gain(&self) -> Decimal {
        if self.doubles > 0 {
            Decimal::TWO
        } else {
            Decimal::ONE
        }
    }

    pub fn armory_rate(&self) -> Decimal {
        if self.armory {
            ARMORY_RATE
        } else {
            Decimal::ZERO
        }
    }

    /// The hunt after opening one chest of the given kind.
    pub fn next(&self, chest: Chest) -> Hunt {
        let mut hunt = *self;
        hunt.chests -= 1;
        // crystal saves run out by chests opened, not by mimics met
        if self.crystal_saves > 0 {
            hunt.crystal_saves -= 1;
        }

        match chest {
            Chest::Loot => {
                if self.doubles > 0 {
                    hunt.doubles -= 1;
                }
            }
            Chest::Mimic => {
                hunt.mimics -= 1;
                if self.crystal_saves <= 0 {
                    hunt.saves -= 1;
                }
            }
            Chest::Saver => {
                hunt.savers -= 1;
                hunt.saves += 1;
                if !self.double_double && self.doubles > 0 {
                    hunt.saves += 1;
                    hunt.doubles -= 1;
                }
            }
            Chest::Doubler => {
                hunt.doublers -= 1;
                hunt.doubles += 1;
                if self.crystal_saves > 1 && self.skip_priority && !self.double_double {
                    hunt.chase = !self.perfect_wanted;
                }
            }
        }

        hunt
    }

    /// Probability of the next chest being of the given kind.
    ///
    /// The four chances need not sum to one; the solver only follows the
    /// branches whose guards hold.
    pub fn chance(&self, chest: Chest) -> Decimal {
        let live = self.live_chests();
        debug_assert!(live > 0, "no live chests in {self:?}");
        let live = Decimal::from(live);
        match chest {
            Chest::Saver => Decimal::from(self.savers) / Decimal::from(self.chests),
            Chest::Doubler => Decimal::from(self.active_doublers()) / live,
            Chest::Mimic => Decimal::from(self.mimics) / live,
            Chest::Loot => {
                let loot = self.live_chests()
                    - self.mimics
                    - self.drawable_savers()
                    - self.active_doublers();
                Decimal::from(loot) / live
            }
        }
    }
}
