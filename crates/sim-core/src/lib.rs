#![deny(warnings)]

//! Core domain models and invariants for Startup Tycoon.
//!
//! This crate defines the serializable session state mutated by the engine,
//! with validation helpers to guarantee basic invariants.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Unique identifier for a product within one session.
///
/// Ids are opaque tokens; the engine hands them out from a monotonic counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u64);

/// Lowest base hourly revenue a product can be created with.
pub const PRODUCT_REVENUE_MIN: i64 = 50;
/// Highest base hourly revenue a product can be created with (inclusive).
pub const PRODUCT_REVENUE_MAX: i64 = 99;

/// Starting currency for a fresh session.
pub const STARTING_BALANCE: i64 = 1000;
/// Experience required for the first level-up.
pub const STARTING_XP_THRESHOLD: u32 = 100;

/// A launched product earning a fixed base hourly revenue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Session-unique identifier.
    pub id: ProductId,
    /// Display name, e.g. "Продукт #3".
    pub name: String,
    /// Base hourly income, fixed at creation, in [50, 99].
    pub revenue: i64,
    /// Product level (reserved for future growth mechanics).
    pub level: u32,
}

/// The three research categories, each with an independent level counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResearchTrack {
    /// Marketing research.
    Marketing,
    /// Development research.
    Development,
    /// Design research.
    Design,
}

impl ResearchTrack {
    /// All tracks, in display order.
    pub const ALL: [ResearchTrack; 3] = [
        ResearchTrack::Marketing,
        ResearchTrack::Development,
        ResearchTrack::Design,
    ];

    /// Stable lowercase name used in logs and serialized state.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResearchTrack::Marketing => "marketing",
            ResearchTrack::Development => "development",
            ResearchTrack::Design => "design",
        }
    }
}

/// Per-track research levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchLevels {
    /// Marketing level (>= 0).
    pub marketing: u32,
    /// Development level (>= 0).
    pub development: u32,
    /// Design level (>= 0).
    pub design: u32,
}

impl ResearchLevels {
    /// Current level of one track.
    pub fn level(&self, track: ResearchTrack) -> u32 {
        match track {
            ResearchTrack::Marketing => self.marketing,
            ResearchTrack::Development => self.development,
            ResearchTrack::Design => self.design,
        }
    }

    /// Mutable access to one track's counter.
    pub fn level_mut(&mut self, track: ResearchTrack) -> &mut u32 {
        match track {
            ResearchTrack::Marketing => &mut self.marketing,
            ResearchTrack::Development => &mut self.development,
            ResearchTrack::Design => &mut self.design,
        }
    }

    /// Sum of all track levels.
    pub fn total(&self) -> u32 {
        self.marketing + self.development + self.design
    }
}

/// Named achievements a session can unlock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Achievement {
    /// Reach $1000/hour of total revenue.
    BillionaireWay,
}

impl Achievement {
    /// Display title shown by the presentation layer.
    pub fn title(&self) -> &'static str {
        match self {
            Achievement::BillionaireWay => "Путь миллиардера",
        }
    }
}

/// Achievement latches. Flags only ever go false -> true.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievements {
    /// Unlocked once total revenue first reaches the threshold.
    pub billionaire_way: bool,
}

impl Achievements {
    /// Whether a given achievement has been unlocked.
    pub fn is_unlocked(&self, achievement: Achievement) -> bool {
        match achievement {
            Achievement::BillionaireWay => self.billionaire_way,
        }
    }
}

/// Whole-session state, owned exclusively by the engine and mutated in place
/// by every transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Spendable currency; never driven negative by a purchase.
    pub balance: i64,
    /// Company level (>= 1).
    pub level: u32,
    /// Experience accumulated toward the next level.
    pub xp: u32,
    /// Experience required for the next level-up (> 0).
    pub xp_to_next_level: u32,
    /// Cosmetic company name, immutable in this core.
    pub company_name: String,
    /// Independent research counters.
    pub research: ResearchLevels,
    /// Launched products, in creation order.
    pub products: Vec<Product>,
    /// Monotonic achievement flags.
    pub achievements: Achievements,
}

impl GameState {
    /// Fresh session with the fixed starting defaults.
    pub fn new_session() -> Self {
        Self::with_company_name("Моя компания")
    }

    /// Fresh session under a custom company name.
    pub fn with_company_name(name: impl Into<String>) -> Self {
        Self {
            balance: STARTING_BALANCE,
            level: 1,
            xp: 0,
            xp_to_next_level: STARTING_XP_THRESHOLD,
            company_name: name.into(),
            research: ResearchLevels::default(),
            products: Vec::new(),
            achievements: Achievements::default(),
        }
    }
}

/// Validation errors for domain invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Balance went negative, which no transition is allowed to do.
    #[error("balance {0} is negative")]
    NegativeBalance(i64),
    /// Level must be at least 1.
    #[error("level must be >= 1")]
    ZeroLevel,
    /// The level-up threshold must stay strictly positive.
    #[error("xp threshold must be > 0")]
    ZeroXpThreshold,
    /// Product revenue outside the creation range.
    #[error("product revenue {revenue} is outside [{PRODUCT_REVENUE_MIN}, {PRODUCT_REVENUE_MAX}]")]
    RevenueOutOfRange {
        /// Offending revenue value.
        revenue: i64,
    },
    /// Two products share an id.
    #[error("duplicate product id: {0}")]
    DuplicateProductId(u64),
    /// Display names must be non-empty.
    #[error("empty name")]
    EmptyName,
}

/// Validate a single product.
pub fn validate_product(product: &Product) -> Result<(), ValidationError> {
    if product.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if !(PRODUCT_REVENUE_MIN..=PRODUCT_REVENUE_MAX).contains(&product.revenue) {
        return Err(ValidationError::RevenueOutOfRange {
            revenue: product.revenue,
        });
    }
    Ok(())
}

/// Validate the whole session state, including cross-product id uniqueness.
pub fn validate_state(state: &GameState) -> Result<(), ValidationError> {
    if state.balance < 0 {
        return Err(ValidationError::NegativeBalance(state.balance));
    }
    if state.level == 0 {
        return Err(ValidationError::ZeroLevel);
    }
    if state.xp_to_next_level == 0 {
        return Err(ValidationError::ZeroXpThreshold);
    }
    if state.company_name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let mut ids: BTreeSet<ProductId> = BTreeSet::new();
    for product in &state.products {
        validate_product(product)?;
        if !ids.insert(product.id) {
            return Err(ValidationError::DuplicateProductId(product.id.0));
        }
    }
    Ok(())
}
