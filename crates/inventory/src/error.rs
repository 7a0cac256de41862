use thiserror::Error;

use stockroom_core::DomainError;

/// Result type for stock record operations.
pub type StockResult<T> = Result<T, StockError>;

/// Coarse classification of a [`StockError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StockErrorKind {
    /// Malformed input; fix the call site.
    InvalidArgument,
    /// Well-formed input that the current state cannot accept.
    InvalidState,
}

/// Failure of a stock record operation.
///
/// Every failure is detected before any field is written, so a record that
/// returned an error is exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("capacity exceeded: on hand {on_hand} + {amount} > max capacity {max_capacity}")]
    CapacityExceeded {
        on_hand: i64,
        amount: i64,
        max_capacity: i64,
    },

    #[error("insufficient available stock: requested {requested}, available {available}")]
    InsufficientAvailable { requested: i64, available: i64 },

    #[error("cannot release {requested}: only {reserved} reserved")]
    OverRelease { requested: i64, reserved: i64 },

    #[error("cannot ship {requested}: only {reserved} reserved")]
    OverShip { requested: i64, reserved: i64 },

    #[error("cannot remove {requested}: only {on_hand} on hand")]
    OverRemoval { requested: i64, on_hand: i64 },

    #[error("max capacity {new_capacity} is below on hand {on_hand}")]
    CapacityBelowOnHand { new_capacity: i64, on_hand: i64 },
}

impl StockError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn kind(&self) -> StockErrorKind {
        match self {
            StockError::InvalidArgument(_) => StockErrorKind::InvalidArgument,
            StockError::CapacityExceeded { .. }
            | StockError::InsufficientAvailable { .. }
            | StockError::OverRelease { .. }
            | StockError::OverShip { .. }
            | StockError::OverRemoval { .. }
            | StockError::CapacityBelowOnHand { .. } => StockErrorKind::InvalidState,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == StockErrorKind::InvalidArgument
    }

    pub fn is_invalid_state(&self) -> bool {
        self.kind() == StockErrorKind::InvalidState
    }
}

impl From<StockError> for DomainError {
    fn from(err: StockError) -> Self {
        match err {
            StockError::InvalidArgument(msg) => DomainError::validation(msg),
            other => DomainError::invariant(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_maps_to_validation() {
        let err: DomainError = StockError::invalid_argument("amount must be positive").into();
        assert_eq!(err, DomainError::Validation("amount must be positive".to_string()));
    }

    #[test]
    fn state_errors_map_to_invariant_violation() {
        let err: DomainError = StockError::OverShip {
            requested: 3,
            reserved: 2,
        }
        .into();
        match err {
            DomainError::InvariantViolation(msg) => {
                assert_eq!(msg, "cannot ship 3: only 2 reserved");
            }
            _ => panic!("Expected InvariantViolation"),
        }
    }

    #[test]
    fn kind_separates_the_two_families() {
        assert!(StockError::invalid_argument("x").is_invalid_argument());
        assert!(
            StockError::CapacityBelowOnHand {
                new_capacity: 5,
                on_hand: 20
            }
            .is_invalid_state()
        );
        assert_eq!(
            StockError::InsufficientAvailable {
                requested: 11,
                available: 10
            }
            .kind(),
            StockErrorKind::InvalidState
        );
    }
}
