use std::{
    fmt,
    ops::{Add, AddAssign, Mul},
};

use num_traits::Zero;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Extra loot multiplier for a perfect hunt once upgrades are finished
/// (perfect hunts pay out x4 in total).
pub const PERFECT_BONUS: Decimal = dec!(3);

/// Expected outcome of a hunt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuntValue {
    /// Loot chests, counting doubled ones twice.
    pub loot: Decimal,
    /// Probability of a perfect hunt.
    pub perfect: Decimal,
    pub armory: Decimal,
}

impl HuntValue {
    pub fn new(loot: Decimal, perfect: Decimal, armory: Decimal) -> Self {
        Self {
            loot,
            perfect,
            armory,
        }
    }

    pub fn perfect_only(perfect: bool) -> Self {
        Self {
            perfect: if perfect { Decimal::ONE } else { Decimal::ZERO },
            ..Self::zero()
        }
    }

    pub fn with_perfect_bonus(self) -> Self {
        Self {
            loot: self.loot + PERFECT_BONUS * self.perfect * self.loot,
            ..self
        }
    }

    pub fn perfect_percent(&self) -> Decimal {
        self.perfect * Decimal::ONE_HUNDRED
    }
}

impl Add for HuntValue {
    type Output = HuntValue;

    fn add(self, other: HuntValue) -> HuntValue {
        HuntValue {
            loot: self.loot + other.loot,
            perfect: self.perfect + other.perfect,
            armory: self.armory + other.armory,
        }
    }
}

impl AddAssign for HuntValue {
    fn add_assign(&mut self, other: HuntValue) {
        *self = *self + other;
    }
}

impl Mul<Decimal> for HuntValue {
    type Output = HuntValue;

    fn mul(self, weight: Decimal) -> HuntValue {
        HuntValue {
            loot: self.loot * weight,
            perfect: self.perfect * weight,
            armory: self.armory * weight,
        }
    }
}

impl Mul<HuntValue> for Decimal {
    type Output = HuntValue;

    fn mul(self, value: HuntValue) -> HuntValue {
        value * self
    }
}

impl Zero for HuntValue {
    fn zero() -> Self {
        HuntValue::new(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.loot.is_zero() && self.perfect.is_zero() && self.armory.is_zero()
    }
}

impl fmt::Display for HuntValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.loot, self.perfect, self.armory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_fieldwise() {
        let a = HuntValue::new(dec!(1.5), dec!(0.25), dec!(0.01));
        let b = HuntValue::new(dec!(2), dec!(0.5), dec!(0.02));
        assert_eq!(a + b, HuntValue::new(dec!(3.5), dec!(0.75), dec!(0.03)));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
    }

    #[test]
    fn scales_from_either_side() {
        let a = HuntValue::new(dec!(4), dec!(0.5), dec!(0.02));
        let half = dec!(0.5);
        assert_eq!(a * half, HuntValue::new(dec!(2), dec!(0.25), dec!(0.01)));
        assert_eq!(half * a, a * half);
    }

    #[test]
    fn zero_is_default() {
        assert!(HuntValue::zero().is_zero());
        assert_eq!(HuntValue::default(), HuntValue::zero());
        assert!(!HuntValue::perfect_only(true).is_zero());
        assert!(HuntValue::perfect_only(false).is_zero());
    }

    #[test]
    fn perfect_bonus_scales_loot_only() {
        let v = HuntValue::new(dec!(10), dec!(0.5), dec!(0.1)).with_perfect_bonus();
        assert_eq!(v.loot, dec!(25));
        assert_eq!(v.perfect, dec!(0.5));
        assert_eq!(v.armory, dec!(0.1));
        assert_eq!(v.perfect_percent(), dec!(50));
    }

    #[test]
    fn displays_as_triple() {
        let v = HuntValue::new(dec!(1.99), dec!(0.2), dec!(0.01));
        assert_eq!(v.to_string(), "(1.99, 0.2, 0.01)");
    }
}
