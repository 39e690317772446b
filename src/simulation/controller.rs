//! Simulation controller - the tick-driven state machine
//!
//! Each tick the collaborator hands over the entity pairs it saw overlapping.
//! The controller resolves them one at a time and checks the win condition
//! after every single resolution, so the first conversion that completes a
//! sweep ends the run before any later pair in the same tick is touched.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::SimulationConfig;
use crate::core::error::{ArenaError, Result};
use crate::core::types::{EntityId, Kind, Tick};
use crate::ecs::entity::Entity;
use crate::ecs::registry::EntityRegistry;
use crate::simulation::collision::{CollisionOutcome, CollisionResolver};
use crate::simulation::events::SimulationEvent;
use crate::simulation::scoreboard::{ScoreBoard, ScoreSnapshot};
use crate::simulation::setup::populate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationState {
    Running,
    Paused,
    /// Terminal; one kind holds the whole population
    Ended,
}

pub struct SimulationController {
    config: SimulationConfig,
    seed: u64,
    rng: ChaCha8Rng,
    registry: EntityRegistry,
    resolver: CollisionResolver,
    state: SimulationState,
    current_tick: Tick,
    winner: Option<Kind>,
}

impl SimulationController {
    /// Validate the config and spawn the starting population
    ///
    /// Uses `config.seed` when set, otherwise a random seed (see [`seed`]).
    ///
    /// [`seed`]: SimulationController::seed
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_seed(config, seed)
    }

    pub fn with_seed(config: SimulationConfig, seed: u64) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let registry = populate(&config, &mut rng)?;
        let resolver = CollisionResolver::new(config.speed);

        Ok(Self {
            config,
            seed,
            rng,
            registry,
            resolver,
            state: SimulationState::Running,
            current_tick: 0,
            winner: None,
        })
    }

    /// Respawn a fresh population and start over, keeping the RNG stream
    pub fn restart(&mut self) -> Result<()> {
        self.registry = populate(&self.config, &mut self.rng)?;
        self.state = SimulationState::Running;
        self.current_tick = 0;
        self.winner = None;
        tracing::info!("Simulation restarted");
        Ok(())
    }

    /// Process one tick's overlapping pairs
    ///
    /// Does nothing while paused or after the run has ended. An unknown
    /// entity aborts the tick. Conversions applied earlier in the same tick
    /// are kept; when there were any, the error is `TickAborted` and carries
    /// their events, otherwise it is the bare `EntityNotFound`.
    pub fn tick(&mut self, pairs: &[(EntityId, EntityId)]) -> Result<Vec<SimulationEvent>> {
        let mut events = Vec::new();
        if self.state != SimulationState::Running {
            return Ok(events);
        }

        self.current_tick += 1;
        let tick = self.current_tick;

        for &(a, b) in pairs {
            let resolved = match self.resolver.resolve(&mut self.registry, a, b, &mut self.rng) {
                Ok(resolved) => resolved,
                Err(err) if events.is_empty() => return Err(err),
                Err(err) => {
                    return Err(ArenaError::TickAborted {
                        tick,
                        events,
                        source: Box::new(err),
                    })
                }
            };
            let Some(outcome) = resolved else {
                continue;
            };

            events.push(collision_event(tick, &outcome));
            events.push(SimulationEvent::ScoreChanged {
                tick,
                scores: outcome.scores,
            });

            if let Some(kind) = self.sweeping_kind(&outcome.scores) {
                self.end(kind, tick, &mut events);
                break;
            }
        }

        Ok(events)
    }

    fn sweeping_kind(&self, scores: &ScoreSnapshot) -> Option<Kind> {
        let total = self.config.total_population;
        Kind::ALL.into_iter().find(|&k| scores.count(k) == total)
    }

    fn end(&mut self, kind: Kind, tick: Tick, events: &mut Vec<SimulationEvent>) {
        self.state = SimulationState::Ended;
        self.winner = Some(kind);
        tracing::info!(
            "WINNER! {} took all {} at tick {}",
            kind,
            self.config.total_population,
            tick
        );
        events.push(SimulationEvent::SimulationEnded {
            tick,
            winning_kind: kind,
        });
    }

    pub fn pause(&mut self) -> Option<SimulationEvent> {
        if self.state != SimulationState::Running {
            return None;
        }
        self.state = SimulationState::Paused;
        tracing::info!("Paused at tick {}", self.current_tick);
        Some(SimulationEvent::Paused {
            tick: self.current_tick,
        })
    }

    pub fn resume(&mut self) -> Option<SimulationEvent> {
        if self.state != SimulationState::Paused {
            return None;
        }
        self.state = SimulationState::Running;
        tracing::info!("Resumed at tick {}", self.current_tick);
        Some(SimulationEvent::Resumed {
            tick: self.current_tick,
        })
    }

    /// Pause when running, resume when paused; no effect once ended
    pub fn toggle_pause(&mut self) -> Option<SimulationEvent> {
        match self.state {
            SimulationState::Running => self.pause(),
            SimulationState::Paused => self.resume(),
            SimulationState::Ended => None,
        }
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SimulationState::Running
    }

    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    pub fn winner(&self) -> Option<Kind> {
        self.winner
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn scoreboard(&self) -> ScoreSnapshot {
        ScoreBoard::snapshot(&self.registry)
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    /// Position/velocity access for the collaborator's physics step
    pub fn entities_mut(&mut self) -> impl Iterator<Item = &mut Entity> + '_ {
        self.registry.entities_mut()
    }
}

fn collision_event(tick: Tick, outcome: &CollisionOutcome) -> SimulationEvent {
    SimulationEvent::CollisionResolved {
        tick,
        winner: outcome.winner,
        loser: outcome.loser,
        winning_kind: outcome.winning_kind,
        losing_kind: outcome.losing_kind,
        winner_velocity: outcome.winner_velocity,
        loser_velocity: outcome.loser_velocity,
    }
}
