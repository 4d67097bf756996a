//! Static resolution rules for player actions.
//!
//! The mapping from [`ActionId`] to its rule is configuration, not runtime
//! state. Resolution always applies self-cost, then target damage, then
//! sanity cost.

use super::ActionId;

/// How much damage an action deals to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageRule {
    /// No damage; the action only produces a log effect or targets the actor.
    None,
    /// Fixed damage.
    Fixed(u32),
    /// Uniform random integer in `[min, max]`.
    Uniform { min: u32, max: u32 },
}

impl DamageRule {
    pub const fn is_damaging(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// How a self-cost is checked against the actor's current hp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CostRule {
    /// The actor must keep at least 1 hp after paying.
    Surplus,
    /// The actor may pay with every hp it has left.
    Covered,
}

/// Resolution rule attached to a player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionProfile {
    pub damage: DamageRule,
    /// Hp the actor pays before the effect lands.
    pub self_cost: u32,
    /// How `self_cost` is checked against current hp.
    pub cost_rule: CostRule,
    /// Percentage of current hp restored to the actor (floored, capped at max).
    pub heal_percent: u32,
    /// Sanity lost after the effect lands.
    pub sanity_cost: u32,
    /// Usable at most once per encounter.
    pub one_shot: bool,
    /// Must appear in the player's granted ability set.
    pub requires_grant: bool,
}

impl ActionProfile {
    pub const BASIC_ATTACK_DAMAGE: u32 = 30;
    pub const LUCKY_SHOT_MIN: u32 = 1;
    pub const LUCKY_SHOT_MAX: u32 = 999;
    pub const BLOOD_MAGIC_DAMAGE: u32 = 75;
    pub const BLOOD_MAGIC_COST: u32 = 25;
    pub const EMBRACE_HEAL_PERCENT: u32 = 50;
    pub const EMBRACE_SANITY_COST: u32 = 10;
    pub const PACT_DAMAGE: u32 = 200;
    pub const PACT_COST: u32 = 50;
    pub const PACT_SANITY_COST: u32 = 30;

    const NONE: Self = Self {
        damage: DamageRule::None,
        self_cost: 0,
        cost_rule: CostRule::Surplus,
        heal_percent: 0,
        sanity_cost: 0,
        one_shot: false,
        requires_grant: true,
    };

    /// Returns the resolution rule for an action.
    pub const fn of(action: ActionId) -> Self {
        match action {
            ActionId::Attack => Self {
                damage: DamageRule::Fixed(Self::BASIC_ATTACK_DAMAGE),
                requires_grant: false,
                ..Self::NONE
            },
            ActionId::LuckyShot => Self {
                damage: DamageRule::Uniform {
                    min: Self::LUCKY_SHOT_MIN,
                    max: Self::LUCKY_SHOT_MAX,
                },
                ..Self::NONE
            },
            ActionId::BloodMagic => Self {
                damage: DamageRule::Fixed(Self::BLOOD_MAGIC_DAMAGE),
                self_cost: Self::BLOOD_MAGIC_COST,
                ..Self::NONE
            },
            ActionId::Analyze => Self::NONE,
            ActionId::DagonsEmbrace => Self {
                heal_percent: Self::EMBRACE_HEAL_PERCENT,
                sanity_cost: Self::EMBRACE_SANITY_COST,
                ..Self::NONE
            },
            ActionId::PactCthulhu => Self {
                damage: DamageRule::Fixed(Self::PACT_DAMAGE),
                self_cost: Self::PACT_COST,
                cost_rule: CostRule::Covered,
                sanity_cost: Self::PACT_SANITY_COST,
                one_shot: true,
                requires_grant: false,
                ..Self::NONE
            },
        }
    }

    /// Hp restored for a given current hp, before capping at the maximum.
    pub const fn heal_amount(&self, current_hp: u32) -> u32 {
        (current_hp as u64 * self.heal_percent as u64 / 100) as u32
    }

    /// Least hp an actor must hold to pay this action's self-cost.
    pub const fn min_hp(&self) -> u32 {
        match (self.self_cost, self.cost_rule) {
            (0, _) => 0,
            (cost, CostRule::Surplus) => cost.saturating_add(1),
            (cost, CostRule::Covered) => cost,
        }
    }

    /// Returns true if an actor holding `hp` can pay this action's self-cost.
    pub const fn affordable(&self, hp: u32) -> bool {
        hp >= self.min_hp()
    }
}

impl ActionId {
    /// Shorthand for [`ActionProfile::of`].
    pub const fn profile(self) -> ActionProfile {
        ActionProfile::of(self)
    }
}
