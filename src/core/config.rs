//! Simulation configuration with documented defaults
//!
//! Everything tunable lives here and is passed once at setup. Values can be
//! loaded from a TOML file with `[simulation]` and `[arena]` tables; missing
//! keys fall back to the defaults below.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{ArenaError, Result};
use crate::core::types::{ArenaBounds, Kind, SpeedRange};

/// Initial number of entities of each kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindSplit {
    pub rock: usize,
    pub paper: usize,
    pub scissors: usize,
}

impl KindSplit {
    pub fn new(rock: usize, paper: usize, scissors: usize) -> Self {
        Self { rock, paper, scissors }
    }

    /// Split `total` as evenly as integer division allows
    ///
    /// The remainder goes to the earliest kinds: 100 becomes 34/33/33,
    /// 101 becomes 34/34/33.
    pub fn even(total: usize) -> Self {
        let base = total / 3;
        let extra = total % 3;
        Self {
            rock: base + usize::from(extra > 0),
            paper: base + usize::from(extra > 1),
            scissors: base,
        }
    }

    pub fn count(&self, kind: Kind) -> usize {
        match kind {
            Kind::Rock => self.rock,
            Kind::Paper => self.paper,
            Kind::Scissors => self.scissors,
        }
    }

    pub fn total(&self) -> usize {
        self.rock + self.paper + self.scissors
    }

    /// Number of kinds that start with at least one entity
    pub fn populated_kinds(&self) -> usize {
        Kind::ALL.iter().filter(|&&k| self.count(k) > 0).count()
    }
}

/// Configuration for the core engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === POPULATION ===
    /// Fixed number of entities for the whole run
    ///
    /// Nothing is created or destroyed after setup, so this is also the
    /// count a kind must reach to win.
    pub total_population: usize,

    /// Explicit starting split; `None` splits `total_population` evenly
    pub kind_split: Option<KindSplit>,

    // === SPACE AND MOTION ===
    /// Arena rectangle entities are spawned into and bounce inside
    pub bounds: ArenaBounds,

    /// Speed band used whenever an entity is (re)launched
    ///
    /// The defaults (128..640 units/s) keep the slowest entities visibly
    /// moving while the fastest cross the wide arena in about four seconds.
    pub speed: SpeedRange,

    // === RANDOMNESS ===
    /// Seed for the run's RNG; `None` draws a fresh seed
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            total_population: 99,
            kind_split: None,
            bounds: ArenaBounds::landscape(),
            speed: SpeedRange::default(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Config with the given population and an even split
    pub fn with_population(total_population: usize) -> Self {
        Self {
            total_population,
            ..Self::default()
        }
    }

    /// The split actually used at setup
    pub fn split(&self) -> KindSplit {
        self.kind_split
            .unwrap_or_else(|| KindSplit::even(self.total_population))
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.total_population < 2 {
            return Err(ArenaError::InvalidConfig(format!(
                "total_population ({}) must be at least 2",
                self.total_population
            )));
        }

        let split = self.split();
        if split.total() != self.total_population {
            return Err(ArenaError::InvalidConfig(format!(
                "kind_split sums to {} but total_population is {}",
                split.total(),
                self.total_population
            )));
        }

        // A run that starts dominated would end before any collision
        if split.populated_kinds() < 2 {
            return Err(ArenaError::InvalidConfig(
                "at least two kinds must start with entities".into(),
            ));
        }

        let (w, h) = (self.bounds.width(), self.bounds.height());
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(ArenaError::InvalidConfig(format!(
                "arena must have positive size, got {}x{}",
                w, h
            )));
        }

        let SpeedRange { min, max } = self.speed;
        if !(min.is_finite() && max.is_finite()) || min < 0.0 || min > max {
            return Err(ArenaError::InvalidConfig(format!(
                "speed range must satisfy 0 <= min <= max, got {}..{}",
                min, max
            )));
        }

        Ok(())
    }
}

/// Parameters for the headless arena that stands in for a renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Radius of every entity's collision circle (world units)
    pub collision_radius: f32,

    /// Simulated seconds per frame
    pub tick_seconds: f32,

    /// Frame limit for headless runs; a run that hits it has no winner
    pub max_ticks: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            collision_radius: 32.0,
            tick_seconds: 1.0 / 60.0,
            max_ticks: 100_000,
        }
    }
}

impl ArenaConfig {
    /// Validate against the arena the entities will live in
    pub fn validate(&self, bounds: &ArenaBounds) -> Result<()> {
        if !(self.collision_radius.is_finite() && self.collision_radius > 0.0) {
            return Err(ArenaError::InvalidConfig(format!(
                "collision_radius must be positive, got {}",
                self.collision_radius
            )));
        }

        let diameter = self.collision_radius * 2.0;
        if diameter >= bounds.width() || diameter >= bounds.height() {
            return Err(ArenaError::InvalidConfig(format!(
                "collision diameter ({}) does not fit a {}x{} arena",
                diameter,
                bounds.width(),
                bounds.height()
            )));
        }

        if !(self.tick_seconds.is_finite() && self.tick_seconds > 0.0) {
            return Err(ArenaError::InvalidConfig(format!(
                "tick_seconds must be positive, got {}",
                self.tick_seconds
            )));
        }

        Ok(())
    }
}

/// Both config tables as they appear in a config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub simulation: SimulationConfig,
    pub arena: ArenaConfig,
}

impl RunConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: RunConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        config.simulation.validate()?;
        config.arena.validate(&config.simulation.bounds)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.split(), KindSplit::new(33, 33, 33));
    }

    #[test]
    fn test_even_split_distributes_remainder() {
        assert_eq!(KindSplit::even(6), KindSplit::new(2, 2, 2));
        assert_eq!(KindSplit::even(100), KindSplit::new(34, 33, 33));
        assert_eq!(KindSplit::even(101), KindSplit::new(34, 34, 33));
        assert_eq!(KindSplit::even(100).total(), 100);
    }

    #[test]
    fn test_split_mismatch_rejected() {
        let config = SimulationConfig {
            total_population: 10,
            kind_split: Some(KindSplit::new(3, 3, 3)),
            ..SimulationConfig::default()
        };
        assert!(matches!(config.validate(), Err(ArenaError::InvalidConfig(_))));
    }

    #[test]
    fn test_single_kind_rejected() {
        let config = SimulationConfig {
            total_population: 5,
            kind_split: Some(KindSplit::new(5, 0, 0)),
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_two_kinds_allowed() {
        let config = SimulationConfig {
            total_population: 5,
            kind_split: Some(KindSplit::new(3, 0, 2)),
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inverted_speed_rejected() {
        let config = SimulationConfig {
            speed: SpeedRange::new(10.0, 5.0),
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tiny_population_rejected() {
        assert!(SimulationConfig::with_population(1).validate().is_err());
    }

    #[test]
    fn test_arena_radius_must_fit() {
        let arena = ArenaConfig {
            collision_radius: 400.0,
            ..ArenaConfig::default()
        };
        assert!(arena.validate(&ArenaBounds::new(600.0, 600.0)).is_err());
        assert!(ArenaConfig::default().validate(&ArenaBounds::landscape()).is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = RunConfig::from_toml_str(
            r#"
            [simulation]
            total_population = 12
            seed = 7
            speed = { min = 50.0, max = 60.0 }

            [arena]
            collision_radius = 8.0
            "#,
        )
        .unwrap();

        assert_eq!(config.simulation.total_population, 12);
        assert_eq!(config.simulation.seed, Some(7));
        assert_eq!(config.simulation.speed, SpeedRange::new(50.0, 60.0));
        assert_eq!(config.simulation.bounds, ArenaBounds::landscape());
        assert_eq!(config.arena.collision_radius, 8.0);
        assert_eq!(config.arena.max_ticks, ArenaConfig::default().max_ticks);
    }

    #[test]
    fn test_parse_explicit_split() {
        let config = RunConfig::from_toml_str(
            r#"
            [simulation]
            total_population = 6
            kind_split = { rock = 4, paper = 1, scissors = 1 }
            "#,
        )
        .unwrap();
        assert_eq!(config.simulation.split(), KindSplit::new(4, 1, 1));
        assert!(config.simulation.validate().is_ok());
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let err = RunConfig::from_toml_str("[simulation]\ntotal_population = \"many\"");
        assert!(matches!(err, Err(ArenaError::TomlError(_))));
    }
}
