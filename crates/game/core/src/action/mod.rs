//! Action identifiers, resolution rules and validation errors.
//!
//! Player actions are closed: each [`ActionId`] maps to a static
//! [`ActionProfile`]. Enemy actions are open: any ability name resolves
//! through [`EnemyAbility::from_name`], falling back to a baseline attack.
mod enemy;
mod error;
mod id;
mod profile;

pub use enemy::{EnemyAbility, EnemyEffect};
pub use error::{ActionError, InvalidActionReason};
pub use id::{ActionId, ActionSet};
pub use profile::{ActionProfile, CostRule, DamageRule};
