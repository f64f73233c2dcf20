//! Headless frame loop driving a [`PhysicsWorld`].
//!
//! Each tick steps the world by a fixed `dt`, reports resolved contacts, keeps
//! circles inside the world rectangle and advances the run clock. Rendering is
//! left to whoever reads `world.bodies` between ticks.

use crate::common::{PhysicsError, SimulationConfig};
use crate::world::{Boundary, PhysicsWorld, Wall};

/// What happened during a single tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// 1-based frame number of this tick.
    pub frame: u64,
    /// Simulated time after this tick, in seconds.
    pub time: f64,
    /// `(a, b)` body indices of every contact resolved by the world step.
    pub contacts: Vec<(usize, usize)>,
    /// `(body, wall)` for every boundary bounce after the step.
    pub bounces: Vec<(usize, Wall)>,
}

/// Totals for a whole run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub simulated_time: f64,
    pub collisions: usize,
    pub bounces: usize,
}

pub struct Simulation {
    pub world: PhysicsWorld,
    pub boundary: Boundary,
    dt: f64,
    duration: f64,
    status_interval: u64,
    frame_count: u64,
    simulation_time: f64,
    total_collisions: usize,
    total_bounces: usize,
}

impl Simulation {
    pub fn new(config: &SimulationConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        let world = config.build_world()?;
        if world.bodies.is_empty() {
            log::warn!("simulation created with no bodies");
        }
        log::info!("scene created with {} bodies", world.bodies.len());

        Ok(Self {
            world,
            boundary: config.boundary()?,
            dt: config.dt,
            duration: config.duration,
            status_interval: config.status_interval,
            frame_count: 0,
            simulation_time: 0.0,
            total_collisions: 0,
            total_bounces: 0,
        })
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn simulation_time(&self) -> f64 {
        self.simulation_time
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// True once the simulated time has passed the configured duration.
    pub fn is_finished(&self) -> bool {
        self.simulation_time > self.duration
    }

    /// Advances the run by one fixed time step.
    pub fn update(&mut self) -> TickReport {
        self.world.step(self.dt);

        let contacts: Vec<(usize, usize)> = self
            .world
            .contacts
            .iter()
            .map(|m| (m.body_a_idx, m.body_b_idx))
            .collect();
        for (a, b) in &contacts {
            log::info!("collision detected between body {} and {}", a, b);
        }

        let bounces = self.boundary.contain_all(&mut self.world.bodies);

        self.frame_count += 1;
        self.simulation_time += self.dt;
        self.total_collisions += contacts.len();
        self.total_bounces += bounces.len();

        if self.status_interval > 0 && self.frame_count % self.status_interval == 0 {
            log::info!(
                "frame {}, time {:.3}s",
                self.frame_count,
                self.simulation_time
            );
        }

        TickReport {
            frame: self.frame_count,
            time: self.simulation_time,
            contacts,
            bounces,
        }
    }

    /// Ticks until [`Simulation::is_finished`].
    pub fn run(&mut self) -> RunSummary {
        while !self.is_finished() {
            self.update();
        }
        log::info!(
            "simulation finished after {} frames ({:.3}s simulated)",
            self.frame_count,
            self.simulation_time
        );
        self.summary()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames: self.frame_count,
            simulated_time: self.simulation_time,
            collisions: self.total_collisions,
            bounces: self.total_bounces,
        }
    }
}
