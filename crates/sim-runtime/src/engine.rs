//! Command application and the dependent progression/achievement passes.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sim_core::{Achievement, GameState, Product, ProductId, ResearchLevels, ResearchTrack};
use thiserror::Error;
use tracing::{debug, info};

/// Cost of launching one product.
pub const PRODUCT_COST: i64 = 200;
/// Experience awarded for launching a product.
pub const PRODUCT_XP: u32 = 20;
/// Experience awarded for completing one research purchase.
pub const RESEARCH_XP: u32 = 10;

/// Total hourly revenue at which the billionaire achievement unlocks.
pub const ACHIEVEMENT_REVENUE_THRESHOLD: i64 = 1000;
/// Advisory display duration for the unlock notification, in time units.
pub const ACHIEVEMENT_DISPLAY_UNITS: u64 = 5;

/// Reasons a command is rejected. Rejection never mutates state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The cost exceeds the current balance.
    #[error("insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        /// Cost the command would debit.
        required: i64,
        /// Balance at the time of the call.
        available: i64,
    },
    /// Research cost must be at least 1.
    #[error("invalid research cost: {cost}")]
    InvalidCost {
        /// Offending cost value.
        cost: i64,
    },
}

/// Transition notifications surfaced to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    /// The company reached a new level.
    LevelUp {
        /// Level after the transition.
        level: u32,
    },
    /// An achievement latched from locked to unlocked. Emitted exactly once.
    AchievementUnlocked {
        /// The achievement that unlocked.
        achievement: Achievement,
        /// How long the collaborator is expected to display the notification.
        display_units: u64,
    },
}

/// Read-only snapshot of the headline numbers, for status displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    /// Total hourly revenue at snapshot time.
    pub total_revenue: i64,
    /// Current balance.
    pub balance: i64,
    /// Current company level.
    pub level: u32,
    /// Number of launched products.
    pub product_count: usize,
    /// Current research levels.
    pub research: ResearchLevels,
}

/// The game engine: owns the session state and applies all transitions.
///
/// Commands are atomic. A rejected command returns `Err` and leaves the state
/// untouched; an accepted command fully applies its mutation, then runs the
/// level-up pass and the achievement pass in that order.
#[derive(Debug)]
pub struct Engine {
    state: GameState,
    rng: ChaCha8Rng,
    next_product_id: u64,
}

impl Engine {
    /// Engine over a fresh default session with a seeded revenue RNG.
    pub fn new(rng_seed: u64) -> Self {
        Self::with_state(GameState::new_session(), rng_seed)
    }

    /// Engine over an existing state, e.g. one prepared by a test.
    pub fn with_state(state: GameState, rng_seed: u64) -> Self {
        let next_product_id = state
            .products
            .iter()
            .map(|product| product.id.0 + 1)
            .max()
            .unwrap_or(0);
        Self {
            state,
            rng: ChaCha8Rng::seed_from_u64(rng_seed),
            next_product_id,
        }
    }

    /// Current state, for rendering after a transition.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Total hourly revenue, recomputed fresh from the current state.
    pub fn total_revenue(&self) -> i64 {
        sim_econ::total_revenue(&self.state.products, &self.state.research)
    }

    /// Headline numbers for status displays.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            total_revenue: self.total_revenue(),
            balance: self.state.balance,
            level: self.state.level,
            product_count: self.state.products.len(),
            research: self.state.research,
        }
    }

    /// Launch a new product for [`PRODUCT_COST`].
    ///
    /// Debits the cost, appends a product with a fresh id and a base revenue
    /// rolled uniform in [50, 99], and awards [`PRODUCT_XP`].
    pub fn create_product(&mut self) -> Result<Vec<EngineEvent>, CommandError> {
        if self.state.balance < PRODUCT_COST {
            debug!(
                required = PRODUCT_COST,
                available = self.state.balance,
                "product launch rejected"
            );
            return Err(CommandError::InsufficientBalance {
                required: PRODUCT_COST,
                available: self.state.balance,
            });
        }

        let name = format!("Продукт #{}", self.state.products.len() + 1);
        let revenue = sim_econ::roll_product_revenue(&mut self.rng);
        let id = ProductId(self.next_product_id);
        self.next_product_id += 1;

        self.state.balance -= PRODUCT_COST;
        self.state.products.push(Product {
            id,
            name: name.clone(),
            revenue,
            level: 1,
        });
        self.state.xp += PRODUCT_XP;
        info!(
            product = %name,
            revenue,
            balance = self.state.balance,
            "product launched"
        );

        Ok(self.run_dependent_passes())
    }

    /// Buy one research level on `track` for a caller-supplied `cost`.
    ///
    /// The cost is a parameter of the call site, validated against the
    /// current balance here; it must be at least 1. Awards [`RESEARCH_XP`].
    pub fn invest_research(
        &mut self,
        track: ResearchTrack,
        cost: i64,
    ) -> Result<Vec<EngineEvent>, CommandError> {
        if cost < 1 {
            debug!(track = track.as_str(), cost, "research rejected: bad cost");
            return Err(CommandError::InvalidCost { cost });
        }
        if self.state.balance < cost {
            debug!(
                track = track.as_str(),
                required = cost,
                available = self.state.balance,
                "research rejected"
            );
            return Err(CommandError::InsufficientBalance {
                required: cost,
                available: self.state.balance,
            });
        }

        self.state.balance -= cost;
        *self.state.research.level_mut(track) += 1;
        self.state.xp += RESEARCH_XP;
        info!(
            track = track.as_str(),
            cost,
            level = self.state.research.level(track),
            "research completed"
        );

        Ok(self.run_dependent_passes())
    }

    /// Apply one passive-income tick.
    ///
    /// Recomputes total revenue fresh; with zero revenue the tick fires but
    /// mutates nothing. Otherwise credits floor(revenue / 12) and runs the
    /// achievement pass.
    pub fn apply_passive_income(&mut self) -> Vec<EngineEvent> {
        let revenue = self.total_revenue();
        if revenue == 0 {
            debug!("passive tick fired with no revenue");
            return Vec::new();
        }
        let income = sim_econ::passive_income(revenue);
        self.state.balance += income;
        info!(income, balance = self.state.balance, "passive income");
        self.evaluate_achievements()
    }

    /// Dependent pass ordering: level-ups first, then achievements, each
    /// observing the fully applied primary mutation.
    fn run_dependent_passes(&mut self) -> Vec<EngineEvent> {
        let mut events = self.apply_level_ups();
        events.extend(self.evaluate_achievements());
        events
    }

    /// Drain accumulated experience into level-ups.
    ///
    /// Loops until xp falls below the threshold, so one event that crosses
    /// two thresholds yields two level-ups. Threshold grows by half its value
    /// each level (floor of x1.5).
    fn apply_level_ups(&mut self) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        while self.state.xp >= self.state.xp_to_next_level {
            self.state.xp -= self.state.xp_to_next_level;
            self.state.xp_to_next_level += self.state.xp_to_next_level / 2;
            self.state.level += 1;
            info!(level = self.state.level, "level up");
            events.push(EngineEvent::LevelUp {
                level: self.state.level,
            });
        }
        events
    }

    /// Latch achievements whose conditions hold. Once set, a flag is never
    /// re-checked or reset, and the unlock event is emitted exactly once.
    fn evaluate_achievements(&mut self) -> Vec<EngineEvent> {
        if self.state.achievements.billionaire_way {
            return Vec::new();
        }
        if self.total_revenue() >= ACHIEVEMENT_REVENUE_THRESHOLD {
            self.state.achievements.billionaire_way = true;
            info!(
                achievement = Achievement::BillionaireWay.title(),
                "achievement unlocked"
            );
            return vec![EngineEvent::AchievementUnlocked {
                achievement: Achievement::BillionaireWay,
                display_units: ACHIEVEMENT_DISPLAY_UNITS,
            }];
        }
        Vec::new()
    }
}
