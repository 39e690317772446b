//! Rock-paper-scissors dominance cycle
//!
//! Rock beats Scissors, Scissors beats Paper, Paper beats Rock.

use crate::core::types::Kind;

/// The three opposing kind combinations, in detection order
pub const OPPOSING_PAIRS: [(Kind, Kind); 3] = [
    (Kind::Rock, Kind::Paper),
    (Kind::Paper, Kind::Scissors),
    (Kind::Scissors, Kind::Rock),
];

impl Kind {
    /// The kind this one defeats
    pub fn beats(self) -> Kind {
        match self {
            Kind::Rock => Kind::Scissors,
            Kind::Paper => Kind::Rock,
            Kind::Scissors => Kind::Paper,
        }
    }

    /// The kind that defeats this one
    pub fn loses_to(self) -> Kind {
        match self {
            Kind::Rock => Kind::Paper,
            Kind::Paper => Kind::Scissors,
            Kind::Scissors => Kind::Rock,
        }
    }
}

/// True when a collision between the two kinds converts someone
#[inline]
pub fn is_opposing(a: Kind, b: Kind) -> bool {
    a != b
}

/// Winning kind of a collision between two different kinds
///
/// # Panics
///
/// Panics if `a == b`. Same-kind pairs never convert, so callers must
/// filter them out first.
pub fn resolve(a: Kind, b: Kind) -> Kind {
    assert_ne!(a, b, "dominance is undefined for two {} entities", a);
    if a.beats() == b {
        a
    } else {
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle() {
        assert_eq!(resolve(Kind::Rock, Kind::Scissors), Kind::Rock);
        assert_eq!(resolve(Kind::Scissors, Kind::Paper), Kind::Scissors);
        assert_eq!(resolve(Kind::Paper, Kind::Rock), Kind::Paper);
    }

    #[test]
    fn test_argument_order_does_not_matter() {
        for (a, b) in OPPOSING_PAIRS {
            assert_eq!(resolve(a, b), resolve(b, a));
        }
    }

    #[test]
    fn test_beats_and_loses_to_are_inverse() {
        for kind in Kind::ALL {
            assert_eq!(kind.beats().loses_to(), kind);
            assert_ne!(kind.beats(), kind);
            assert_ne!(kind.loses_to(), kind);
        }
    }

    #[test]
    fn test_opposing_pairs_cover_every_combination() {
        let mut seen: Vec<(Kind, Kind)> = OPPOSING_PAIRS
            .iter()
            .map(|&(a, b)| if a < b { (a, b) } else { (b, a) })
            .collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 3);
        assert!(OPPOSING_PAIRS.iter().all(|&(a, b)| is_opposing(a, b)));
    }

    #[test]
    #[should_panic(expected = "dominance is undefined")]
    fn test_same_kind_panics() {
        resolve(Kind::Paper, Kind::Paper);
    }
}
