//! # Loyalty Program
//!
//! Converts settled spend into points, points into tiers, and tiers into
//! redeemable rewards.
//!
//! ## Point Economy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Loyalty Point Economy                               │
//! │                                                                         │
//! │  Settled payment ($250, "stay")                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  calculate_points ── floor($250 × rate/100) ──► 25 points              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Guest.earn_points ──► balance                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  determine_status(balance) ──► tier (never stored, always derived)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  available_rewards ──► rewards of that EXACT tier with cost ≤ balance  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Non-Cumulative Rewards
//! A tier's reward set does not include the rewards of lower tiers. A Gold
//! guest sees Gold rewards only. Established program policy; do not "fix".

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::guest::Guest;
use crate::money::Money;
use crate::REGULAR_TIER;

/// Tier thresholds, earn rates, and the reward catalog.
///
/// ## Configuration Shape
/// - `earn_rates`: transaction type → points earned per 100 currency units
///   of settled spend
/// - `tier_thresholds`: tier name → minimum point balance (the `Regular`
///   floor is implicit at 0 and needs no entry)
/// - `reward_catalog`: tier name → reward name → point cost
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoyaltyProgram {
    earn_rates: HashMap<String, u32>,
    tier_thresholds: HashMap<String, i64>,
    reward_catalog: HashMap<String, HashMap<String, i64>>,
}

impl LoyaltyProgram {
    pub fn new(
        earn_rates: HashMap<String, u32>,
        tier_thresholds: HashMap<String, i64>,
        reward_catalog: HashMap<String, HashMap<String, i64>>,
    ) -> Self {
        LoyaltyProgram {
            earn_rates,
            tier_thresholds,
            reward_catalog,
        }
    }

    /// The house program: Silver at 100, Gold at 500, Platinum at 1500.
    pub fn standard() -> Self {
        let earn_rates = HashMap::from([
            ("stay".to_string(), 10),
            ("dining".to_string(), 5),
            ("spa".to_string(), 5),
        ]);
        let tier_thresholds = HashMap::from([
            ("Silver".to_string(), 100),
            ("Gold".to_string(), 500),
            ("Platinum".to_string(), 1500),
        ]);
        let reward_catalog = HashMap::from([
            (
                "Silver".to_string(),
                HashMap::from([
                    ("Free Breakfast".to_string(), 50),
                    ("Late Checkout".to_string(), 75),
                ]),
            ),
            (
                "Gold".to_string(),
                HashMap::from([
                    ("Room Upgrade".to_string(), 200),
                    ("Spa Voucher".to_string(), 300),
                ]),
            ),
            (
                "Platinum".to_string(),
                HashMap::from([("Free Night".to_string(), 1000)]),
            ),
        ]);

        LoyaltyProgram::new(earn_rates, tier_thresholds, reward_catalog)
    }

    /// Points earned for a settled transaction:
    /// `floor(amount_in_currency_units × rate / 100)`.
    ///
    /// Unrecognized transaction types earn 0, silently. Program policy:
    /// unknown spend categories simply do not accrue, they are not errors.
    ///
    /// ## Example
    /// ```rust
    /// use atrium_core::loyalty::LoyaltyProgram;
    /// use atrium_core::money::Money;
    ///
    /// let program = LoyaltyProgram::standard();
    /// // $250 stay at rate 10 → floor(250 × 10/100) = 25 points
    /// assert_eq!(program.calculate_points(Money::from_cents(25000), "stay"), 25);
    /// assert_eq!(program.calculate_points(Money::from_cents(25000), "parking"), 0);
    /// ```
    pub fn calculate_points(&self, amount: Money, transaction_type: &str) -> i64 {
        match self.earn_rates.get(transaction_type) {
            // amount is in cents; rate is per 100 currency units, so the
            // divisor is 100 (cents) × 100 (rate basis) = 10_000
            Some(&rate) => amount.cents() * rate as i64 / 10_000,
            None => 0,
        }
    }

    /// The tier for a point balance: thresholds are walked in ascending
    /// order and the last one not exceeding the balance wins; below every
    /// threshold the guest is `Regular`.
    ///
    /// Duplicate thresholds have no defined winner; callers must not
    /// configure them if a specific tie-break matters.
    pub fn determine_status(&self, points: i64) -> &str {
        let mut tiers: Vec<(&String, &i64)> = self.tier_thresholds.iter().collect();
        tiers.sort_by_key(|(_, threshold)| **threshold);

        let mut status = REGULAR_TIER;
        for (tier, &threshold) in tiers {
            if points >= threshold {
                status = tier;
            } else {
                break;
            }
        }
        status
    }

    /// Rewards the balance can buy right now: the catalog of the *exact*
    /// current tier, filtered to `cost <= points`. Lower tiers' rewards are
    /// not offered (non-cumulative, by policy).
    pub fn available_rewards(&self, points: i64) -> BTreeMap<String, i64> {
        let status = self.determine_status(points);

        self.reward_catalog
            .get(status)
            .map(|rewards| {
                rewards
                    .iter()
                    .filter(|(_, &cost)| cost <= points)
                    .map(|(name, &cost)| (name.clone(), cost))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Redeems a reward by name against the guest's live balance.
    ///
    /// Soft failure: `false` when the reward is not currently available to
    /// this guest, or when the deduction would underflow (unreachable given
    /// the availability filter, but the deduction path still guards).
    pub fn redeem_reward(&self, guest: &mut Guest, reward_name: &str) -> bool {
        let rewards = self.available_rewards(guest.loyalty_points);

        match rewards.get(reward_name) {
            Some(&cost) => {
                let redeemed = guest.redeem_points(cost);
                if redeemed {
                    info!(
                        guest = guest.id,
                        reward = reward_name,
                        cost,
                        balance = guest.loyalty_points,
                        "Reward redeemed"
                    );
                }
                redeemed
            }
            None => {
                debug!(guest = guest.id, reward = reward_name, "Reward not available");
                false
            }
        }
    }
}

impl Default for LoyaltyProgram {
    fn default() -> Self {
        Self::standard()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
