//! Headless frame loop: physics, overlap detection, controller tick

use std::time::Instant;

use crate::arena::output::RunOutput;
use crate::arena::overlap::OverlapDetector;
use crate::arena::physics;
use crate::core::config::{ArenaConfig, RunConfig};
use crate::core::error::Result;
use crate::simulation::controller::{SimulationController, SimulationState};
use crate::simulation::events::{EventLog, SimulationEvent};

pub struct ArenaRunner {
    pub controller: SimulationController,
    arena: ArenaConfig,
    detector: OverlapDetector,
    log: EventLog,
}

impl ArenaRunner {
    pub fn new(config: RunConfig) -> Result<Self> {
        config.arena.validate(&config.simulation.bounds)?;
        let controller = SimulationController::new(config.simulation)?;
        Ok(Self::with_controller(controller, config.arena))
    }

    pub fn with_controller(controller: SimulationController, arena: ArenaConfig) -> Self {
        let detector = OverlapDetector::new(arena.collision_radius);
        Self {
            controller,
            arena,
            detector,
            log: EventLog::new(),
        }
    }

    /// One frame; physics freezes along with the controller while paused
    pub fn step(&mut self) -> Result<Vec<SimulationEvent>> {
        if !self.controller.is_running() {
            return Ok(Vec::new());
        }

        let bounds = self.controller.config().bounds;
        physics::step(
            self.controller.entities_mut(),
            &bounds,
            self.arena.collision_radius,
            self.arena.tick_seconds,
        );

        let pairs = self.detector.detect(self.controller.registry());
        match self.controller.tick(&pairs) {
            Ok(events) => {
                self.log.extend(events.iter().cloned());
                Ok(events)
            }
            Err(err) => {
                self.log.extend(err.partial_events().iter().cloned());
                Err(err)
            }
        }
    }

    pub fn toggle_pause(&mut self) -> Option<SimulationEvent> {
        let event = self.controller.toggle_pause();
        self.log.extend(event.clone());
        event
    }

    /// Step until one kind sweeps, the run is paused, or `max_ticks` is hit
    pub fn run_to_completion(&mut self) -> Result<RunOutput> {
        let start = Instant::now();

        while self.controller.is_running()
            && self.controller.current_tick() < self.arena.max_ticks
        {
            self.step()?;
        }

        if self.controller.state() != SimulationState::Ended {
            tracing::warn!(
                "Stopped at tick {} without a winner ({})",
                self.controller.current_tick(),
                self.controller.scoreboard()
            );
        }

        Ok(RunOutput::new(self, start.elapsed()))
    }

    /// Fresh population, empty log
    pub fn restart(&mut self) -> Result<()> {
        self.controller.restart()?;
        self.log = EventLog::new();
        Ok(())
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }
}
