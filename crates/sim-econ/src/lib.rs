#![deny(warnings)]

//! Economic helpers for Startup Tycoon.
//!
//! This module provides the pure arithmetic shared by the engine:
//! - Total hourly revenue aggregation over products and research
//! - Passive income paid out per tick (a twelfth of hourly revenue)
//! - Seeded uniform roll for a new product's base revenue

use rand::Rng;
use sim_core::{Product, ResearchLevels, PRODUCT_REVENUE_MAX, PRODUCT_REVENUE_MIN};

/// Flat bonus added to each product's hourly revenue per research level,
/// summed across all three tracks.
pub const RESEARCH_BONUS_PER_LEVEL: i64 = 5;

/// Hourly revenue is paid out in twelfths on each passive tick.
pub const PASSIVE_INCOME_DIVISOR: i64 = 12;

/// Flat per-product bonus from the current research levels.
///
/// Example:
/// let r = ResearchLevels { marketing: 1, development: 1, design: 1 };
/// assert_eq!(research_bonus(&r), 15);
pub fn research_bonus(research: &ResearchLevels) -> i64 {
    i64::from(research.total()) * RESEARCH_BONUS_PER_LEVEL
}

/// Total hourly revenue over the current products.
///
/// The research bonus applies per product, so with zero products the total
/// is 0 regardless of research levels. Pure; never negative.
///
/// Example:
/// assert_eq!(total_revenue(&[], &r), 0);
pub fn total_revenue(products: &[Product], research: &ResearchLevels) -> i64 {
    let bonus = research_bonus(research);
    products
        .iter()
        .map(|product| product.revenue + bonus)
        .sum()
}

/// Income credited by one passive tick: floor(total_revenue / 12).
///
/// Zero revenue yields zero income, making the tick a no-op.
pub fn passive_income(total_revenue: i64) -> i64 {
    total_revenue / PASSIVE_INCOME_DIVISOR
}

/// Roll a new product's base hourly revenue, uniform in [50, 99].
pub fn roll_product_revenue<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.gen_range(PRODUCT_REVENUE_MIN..=PRODUCT_REVENUE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use sim_core::ProductId;

    fn product(id: u64, revenue: i64) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Продукт #{id}"),
            revenue,
            level: 1,
        }
    }

    #[test]
    fn aggregation_applies_bonus_per_product() {
        let products = [product(1, 60), product(2, 70)];
        let research = ResearchLevels {
            marketing: 1,
            development: 1,
            design: 1,
        };
        assert_eq!(total_revenue(&products, &research), (60 + 15) + (70 + 15));
    }

    #[test]
    fn no_products_means_no_revenue() {
        let research = ResearchLevels {
            marketing: 9,
            development: 9,
            design: 9,
        };
        assert_eq!(total_revenue(&[], &research), 0);
    }

    #[test]
    fn passive_income_floors() {
        assert_eq!(passive_income(0), 0);
        assert_eq!(passive_income(11), 0);
        assert_eq!(passive_income(12), 1);
        assert_eq!(passive_income(160), 13);
    }

    #[test]
    fn revenue_roll_is_seeded() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..32 {
            assert_eq!(roll_product_revenue(&mut a), roll_product_revenue(&mut b));
        }
    }

    proptest! {
        #[test]
        fn roll_stays_in_range(seed in any::<u64>()) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let revenue = roll_product_revenue(&mut rng);
            prop_assert!((PRODUCT_REVENUE_MIN..=PRODUCT_REVENUE_MAX).contains(&revenue));
        }

        #[test]
        fn revenue_monotonic_in_research(base in 50i64..=99, levels in 0u32..100) {
            let products = [product(1, base)];
            let low = ResearchLevels { marketing: levels, development: 0, design: 0 };
            let high = ResearchLevels { marketing: levels + 1, development: 0, design: 0 };
            prop_assert!(total_revenue(&products, &high) > total_revenue(&products, &low));
        }

        #[test]
        fn revenue_never_negative(revenues in proptest::collection::vec(50i64..=99, 0..16),
                                  m in 0u32..50, d in 0u32..50, g in 0u32..50) {
            let products: Vec<Product> = revenues
                .iter()
                .enumerate()
                .map(|(i, &r)| product(i as u64, r))
                .collect();
            let research = ResearchLevels { marketing: m, development: d, design: g };
            prop_assert!(total_revenue(&products, &research) >= 0);
        }
    }
}
