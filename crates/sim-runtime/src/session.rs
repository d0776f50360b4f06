//! Session lifecycle: one engine plus its passive-income timer.

use crate::engine::{CommandError, Engine, EngineEvent, SessionSummary};
use crate::timer::TickTimer;
use sim_core::{GameState, ResearchTrack};
use tracing::debug;

/// One interactive play session.
///
/// Owns the engine and the only passive-income timer for its lifetime; the
/// timer is cancelled on teardown so no recurring work outlives the session.
#[derive(Debug)]
pub struct Session {
    engine: Engine,
    timer: TickTimer,
}

impl Session {
    /// Fresh session with the default state and the standard tick period.
    pub fn new(rng_seed: u64) -> Self {
        Self {
            engine: Engine::new(rng_seed),
            timer: TickTimer::default(),
        }
    }

    /// Session over a prepared state, with an injected timer.
    pub fn with_state(state: GameState, rng_seed: u64, timer: TickTimer) -> Self {
        Self {
            engine: Engine::with_state(state, rng_seed),
            timer,
        }
    }

    /// Current state, for rendering.
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    /// Headline numbers for status displays.
    pub fn summary(&self) -> SessionSummary {
        self.engine.summary()
    }

    /// Launch a product. See [`Engine::create_product`].
    pub fn create_product(&mut self) -> Result<Vec<EngineEvent>, CommandError> {
        self.engine.create_product()
    }

    /// Buy one research level. See [`Engine::invest_research`].
    pub fn invest_research(
        &mut self,
        track: ResearchTrack,
        cost: i64,
    ) -> Result<Vec<EngineEvent>, CommandError> {
        self.engine.invest_research(track, cost)
    }

    /// Advance simulated time, applying every passive tick that comes due.
    pub fn advance(&mut self, units: u64) -> Vec<EngineEvent> {
        let due = self.timer.advance(units);
        let mut events = Vec::new();
        for _ in 0..due {
            events.extend(self.engine.apply_passive_income());
        }
        events
    }

    /// End the session: cancel the timer. Further time advances do nothing.
    pub fn shutdown(&mut self) {
        debug!("session shutdown, cancelling passive tick");
        self.timer.cancel();
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.timer.cancel();
    }
}
