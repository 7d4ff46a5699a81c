use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::value::HuntValue;

pub const SIG_FIGS: u32 = 4;

/// Decimal exponent of the most significant digit, zero for zero.
fn adjusted(x: Decimal) -> i64 {
    if x.is_zero() {
        return 0;
    }
    x.mantissa().unsigned_abs().ilog10() as i64 - x.scale() as i64
}

/// Rounds `x` half-to-even to `sig_figs` significant figures, keeping trailing
/// zeros. Numbers too large for that many digits come out in scientific
/// notation, e.g. `1.234E+4`.
pub fn format_sig(x: Decimal, sig_figs: u32) -> String {
    let exponent = adjusted(x) - (sig_figs as i64 - 1);
    if exponent <= 0 {
        let scale = (-exponent).min(Decimal::MAX_SCALE as i64) as u32;
        let mut rounded = x.round_dp_with_strategy(scale, RoundingStrategy::MidpointNearestEven);
        rounded.rescale(scale);
        return rounded.to_string();
    }

    let factor = Decimal::from_i128_with_scale(10i128.pow(exponent as u32), 0);
    let coefficient = (x / factor)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .mantissa();
    let sign = if coefficient < 0 { "-" } else { "" };
    let digits = coefficient.unsigned_abs().to_string();
    let shown = exponent + digits.len() as i64 - 1;
    let (lead, rest) = digits.split_at(1);
    if rest.is_empty() {
        format!("{sign}{lead}E+{shown}")
    } else {
        format!("{sign}{lead}.{rest}E+{shown}")
    }
}

/// Side by side comparison of a hunt played plainly and with skip priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub plain: HuntValue,
    pub skip: HuntValue,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (plain, skip) = (&self.plain, &self.skip);
        writeln!(
            f,
            "Average Loot Chests: {} | {}",
            format_sig(plain.loot, SIG_FIGS),
            format_sig(skip.loot, SIG_FIGS)
        )?;
        writeln!(
            f,
            "Perfect Hunt Rate: {}% | {}%",
            format_sig(plain.perfect_percent(), SIG_FIGS),
            format_sig(skip.perfect_percent(), SIG_FIGS)
        )?;
        writeln!(
            f,
            "Average Armory Chests: {} | {}",
            format_sig(plain.armory, SIG_FIGS),
            format_sig(skip.armory, SIG_FIGS)
        )?;
        writeln!(f, "{plain}")?;
        write!(f, "{skip}")
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn rounds_to_significant_figures() {
        assert_eq!(format_sig(dec!(9.140867372686200571341527058), 4), "9.141");
        assert_eq!(format_sig(dec!(0.2468724123896537689641137918), 4), "0.2469");
        assert_eq!(format_sig(dec!(0.0391156723225688751072707247), 4), "0.03912");
        assert_eq!(format_sig(dec!(12.05248197357933381091568316), 4), "12.05");
        assert_eq!(format_sig(dec!(0.0036489691662105455208903485), 4), "0.003649");
    }

    #[test]
    fn keeps_trailing_zeros() {
        assert_eq!(format_sig(dec!(100), 4), "100.0");
        assert_eq!(format_sig(dec!(0.05), 4), "0.05000");
        assert_eq!(format_sig(Decimal::ZERO, 4), "0.000");
        assert_eq!(format_sig(dec!(5.999854762316117818471230372), 4), "6.000");
    }

    #[test]
    fn digit_count_boundaries() {
        assert_eq!(format_sig(dec!(1000), 4), "1000");
        assert_eq!(format_sig(dec!(999.96), 4), "1000.0");
        assert_eq!(format_sig(dec!(0.001), 4), "0.001000");
        assert_eq!(format_sig(dec!(-0.25), 4), "-0.2500");
    }

    #[test]
    fn tiny_values_stop_at_max_scale() {
        let tiny = Decimal::new(1, 28);
        assert_eq!(format_sig(tiny, 4), "0.0000000000000000000000000001");
        assert_eq!(format_sig(Decimal::new(12, 28), 4), "0.0000000000000000000000000012");
    }

    #[test]
    fn ties_round_to_even() {
        assert_eq!(format_sig(dec!(2.0005), 4), "2.000");
        assert_eq!(format_sig(dec!(2.0015), 4), "2.002");
    }

    #[test]
    fn large_values_use_exponent() {
        assert_eq!(format_sig(dec!(12345), 4), "1.234E+4");
        assert_eq!(format_sig(dec!(99999), 4), "1.0000E+5");
        assert_eq!(format_sig(dec!(70000), 1), "7E+4");
        assert_eq!(format_sig(dec!(1234), 4), "1234");
    }

    #[test]
    fn summary_lines() {
        let summary = Summary {
            plain: HuntValue::new(dec!(7.8416), dec!(0.002468), dec!(0.039115)),
            skip: HuntValue::new(dec!(9.1408), dec!(0.01915), dec!(0.043438)),
        };
        let text = summary.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Average Loot Chests: 7.842 | 9.141");
        assert_eq!(lines[1], "Perfect Hunt Rate: 0.2468% | 1.915%");
        assert_eq!(lines[2], "Average Armory Chests: 0.03912 | 0.04344");
        assert_eq!(lines.len(), 5);
    }
}
