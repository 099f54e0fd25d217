//! Career level calculation.
//!
//! Maps a cumulative point total onto the fixed tier ladder and describes the
//! progress toward the next tier.

mod window;

pub use window::*;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named rank in the career ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    Jade,
    Pearl,
    Sapphire,
    Ruby,
    Emerald,
    Diamond,
    BlueDiamond,
    RedDiamond,
    BlackDiamond,
    Ambassador,
}

impl Tier {
    /// Ladder spelling of the tier, e.g. `BLUE_DIAMOND`.
    pub fn name(self) -> &'static str {
        match self {
            Tier::Jade => "JADE",
            Tier::Pearl => "PEARL",
            Tier::Sapphire => "SAPPHIRE",
            Tier::Ruby => "RUBY",
            Tier::Emerald => "EMERALD",
            Tier::Diamond => "DIAMOND",
            Tier::BlueDiamond => "BLUE_DIAMOND",
            Tier::RedDiamond => "RED_DIAMOND",
            Tier::BlackDiamond => "BLACK_DIAMOND",
            Tier::Ambassador => "AMBASSADOR",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One step of the ladder.
#[derive(Debug, Clone, Copy)]
pub struct Rung {
    pub tier: Tier,
    pub threshold: i64,
}

/// The career ladder (must be sorted by strictly increasing threshold).
pub static LADDER: &[Rung] = &[
    Rung {
        tier: Tier::Jade,
        threshold: 1_500,
    },
    Rung {
        tier: Tier::Pearl,
        threshold: 4_500,
    },
    Rung {
        tier: Tier::Sapphire,
        threshold: 9_000,
    },
    Rung {
        tier: Tier::Ruby,
        threshold: 18_000,
    },
    Rung {
        tier: Tier::Emerald,
        threshold: 36_000,
    },
    Rung {
        tier: Tier::Diamond,
        threshold: 75_000,
    },
    Rung {
        tier: Tier::BlueDiamond,
        threshold: 150_000,
    },
    Rung {
        tier: Tier::RedDiamond,
        threshold: 300_000,
    },
    Rung {
        tier: Tier::BlackDiamond,
        threshold: 750_000,
    },
    Rung {
        tier: Tier::Ambassador,
        threshold: 1_500_000,
    },
];

/// Result of resolving a point total against the ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierStatus {
    pub current_tier: Option<Tier>,
    pub next_tier: Option<Tier>,
    pub remaining_points: i64,
    pub message: String,
}

/// Resolve a point total to the current tier, the next tier and the gap between them.
///
/// Thresholds are inclusive. Negative totals are treated as zero.
pub fn resolve(total_points: i64) -> TierStatus {
    let total = total_points.max(0);

    // Index of the highest rung whose threshold is met.
    let reached = LADDER.iter().rposition(|rung| total >= rung.threshold);

    let current_tier = reached.map(|idx| LADDER[idx].tier);
    let next_rung = match reached {
        Some(idx) => LADDER.get(idx + 1),
        None => LADDER.first(),
    };
    let next_tier = next_rung.map(|rung| rung.tier);
    let remaining_points = next_rung.map_or(0, |rung| rung.threshold - total);

    let message = match (current_tier, next_tier) {
        (None, Some(next)) => format!(
            "Collect {} more points to become {}. You can do it!",
            remaining_points, next
        ),
        (Some(current), Some(next)) => format!(
            "Congratulations, you are {}! Now it's time for {}, {} points to go. You can do it!",
            current, next, remaining_points
        ),
        (Some(_), None) => {
            "You have reached the highest level! An outstanding achievement!".to_string()
        }
        // An empty ladder is the only way to get here.
        (None, None) => String::new(),
    };

    TierStatus {
        current_tier,
        next_tier,
        remaining_points,
        message,
    }
}

/// Parse a raw point entry the way the entry field does.
///
/// Leading whitespace is skipped, an optional sign is honoured and the leading
/// run of digits is taken; anything after it is ignored. Input without a digit
/// prefix yields 0, as does a value that does not fit in an `i64`.
pub fn parse_point_input(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let Ok(value) = rest[..digits_len].parse::<i64>() else {
        return 0;
    };

    if negative {
        -value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_strictly_increasing() {
        for pair in LADDER.windows(2) {
            assert!(pair[0].threshold < pair[1].threshold);
        }
    }

    #[test]
    fn test_resolve_zero() {
        let status = resolve(0);
        assert_eq!(status.current_tier, None);
        assert_eq!(status.next_tier, Some(Tier::Jade));
        assert_eq!(status.remaining_points, 1500);
        assert_eq!(
            status.message,
            "Collect 1500 more points to become JADE. You can do it!"
        );
    }

    #[test]
    fn test_resolve_just_below_first_threshold() {
        let status = resolve(1499);
        assert_eq!(status.current_tier, None);
        assert_eq!(status.next_tier, Some(Tier::Jade));
        assert_eq!(status.remaining_points, 1);
    }

    #[test]
    fn test_resolve_boundary_is_inclusive() {
        let status = resolve(1500);
        assert_eq!(status.current_tier, Some(Tier::Jade));
        assert_eq!(status.next_tier, Some(Tier::Pearl));
        assert_eq!(status.remaining_points, 3000);
        assert_eq!(
            status.message,
            "Congratulations, you are JADE! Now it's time for PEARL, 3000 points to go. You can do it!"
        );
    }

    #[test]
    fn test_resolve_every_band() {
        for pair in LADDER.windows(2) {
            let (low, high) = (pair[0], pair[1]);
            for total in [low.threshold, (low.threshold + high.threshold) / 2, high.threshold - 1] {
                let status = resolve(total);
                assert_eq!(status.current_tier, Some(low.tier), "total {}", total);
                assert_eq!(status.next_tier, Some(high.tier), "total {}", total);
                assert_eq!(status.remaining_points, high.threshold - total);
            }
        }
    }

    #[test]
    fn test_resolve_top_tier() {
        let status = resolve(1_500_000);
        assert_eq!(status.current_tier, Some(Tier::Ambassador));
        assert_eq!(status.next_tier, None);
        assert_eq!(status.remaining_points, 0);
        assert_eq!(
            status.message,
            "You have reached the highest level! An outstanding achievement!"
        );
    }

    #[test]
    fn test_resolve_above_top_matches_top() {
        assert_eq!(resolve(2_000_000), resolve(1_500_000));
    }

    #[test]
    fn test_resolve_negative_clamped() {
        assert_eq!(resolve(-250), resolve(0));
    }

    #[test]
    fn test_tier_names_and_thresholds() {
        assert_eq!(Tier::BlueDiamond.to_string(), "BLUE_DIAMOND");
        assert_eq!(LADDER[8].tier, Tier::BlackDiamond);
        assert_eq!(LADDER[8].threshold, 750_000);
        assert_eq!(
            serde_json::to_string(&Tier::RedDiamond).unwrap(),
            "\"RED_DIAMOND\""
        );
    }

    #[test]
    fn test_parse_point_input() {
        assert_eq!(parse_point_input("250"), 250);
        assert_eq!(parse_point_input("  42"), 42);
        assert_eq!(parse_point_input("12abc"), 12);
        assert_eq!(parse_point_input("-7"), -7);
        assert_eq!(parse_point_input("+9"), 9);
        assert_eq!(parse_point_input(""), 0);
        assert_eq!(parse_point_input("abc"), 0);
        assert_eq!(parse_point_input("-"), 0);
        assert_eq!(parse_point_input("99999999999999999999"), 0);
    }
}
