//! Errors raised when a submitted player action cannot be resolved.
//!
//! Every variant is raised before any mutation, so a rejected action leaves
//! hp, sanity, the log and the phase exactly as they were.

use crate::error::{ErrorSeverity, GameError};
use crate::state::EncounterPhase;

use super::ActionId;

/// Why an action was rejected as invalid.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidActionReason {
    #[error("no such action")]
    Unknown,

    #[error("not among the player's abilities")]
    NotGranted,

    #[error("encounter is in phase {0}, not select_action")]
    OutOfPhase(EncounterPhase),
}

/// Errors surfaced while submitting a player action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    #[error("invalid action '{action}': {reason}")]
    InvalidAction {
        action: String,
        reason: InvalidActionReason,
    },

    #[error("{action} needs at least {required} hp (have {available})")]
    InsufficientResource {
        action: ActionId,
        /// Least hp the action can be paid from.
        required: u32,
        available: u32,
    },

    #[error("{0} has already been used this encounter")]
    AbilityExhausted(ActionId),
}

impl ActionError {
    pub fn invalid(action: impl Into<String>, reason: InvalidActionReason) -> Self {
        Self::InvalidAction {
            action: action.into(),
            reason,
        }
    }
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // Healing or time could make the cost payable later.
            Self::InsufficientResource { .. } => ErrorSeverity::Recoverable,
            Self::InvalidAction { .. } | Self::AbilityExhausted(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAction { .. } => "ACTION_INVALID",
            Self::InsufficientResource { .. } => "ACTION_INSUFFICIENT_RESOURCE",
            Self::AbilityExhausted(_) => "ACTION_ABILITY_EXHAUSTED",
        }
    }
}
