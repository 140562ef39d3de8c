//! Engine error taxonomy.
//!
//! Every fallible operation in the engine returns [`GameError`]. None of
//! these errors are retried internally: a failed action leaves the game
//! history exactly as it was before the call.

/// Error raised by the engine.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// An object could not be constructed from the values it was given
    /// (invalid board shape, empty or incomplete initial state list).
    #[display("Construction error: {}", message)]
    Construction {
        /// What was wrong with the input.
        message: String,
    },

    /// A board operation addressed a tile outside of the board's shape.
    #[display("There is no tile at the 0-based indices ({}, {})", x, y)]
    OutOfBounds {
        /// The x-index that was addressed.
        x: i32,
        /// The y-index that was addressed.
        y: i32,
    },

    /// An action was requested that does not match the current state of the game.
    #[display("Illegal state: {}", message)]
    IllegalState {
        /// Why the action cannot be performed.
        message: String,
    },

    /// A collaborator (rule set or agent) broke its contract with the engine.
    #[display("Protocol violation: {}", message)]
    ProtocolViolation {
        /// Description of the broken contract.
        message: String,
    },
}

impl GameError {
    /// Create a construction error.
    pub fn construction(message: impl Into<String>) -> Self {
        Self::Construction { message: message.into() }
    }

    /// Create an out-of-bounds error for the given 0-based indices.
    #[must_use]
    pub const fn out_of_bounds(x: i32, y: i32) -> Self {
        Self::OutOfBounds { x, y }
    }

    /// Create an illegal-state error.
    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::IllegalState { message: message.into() }
    }

    /// Create a protocol-violation error.
    pub fn protocol_violation(message: impl Into<String>) -> Self {
        Self::ProtocolViolation { message: message.into() }
    }

    /// Check if this is a construction error.
    #[must_use]
    pub fn is_construction(&self) -> bool {
        matches!(self, Self::Construction { .. })
    }

    /// Check if this is an out-of-bounds error.
    #[must_use]
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    /// Check if this is an illegal-state error.
    #[must_use]
    pub fn is_illegal_state(&self) -> bool {
        matches!(self, Self::IllegalState { .. })
    }

    /// Check if this is a protocol violation.
    #[must_use]
    pub fn is_protocol_violation(&self) -> bool {
        matches!(self, Self::ProtocolViolation { .. })
    }
}

impl std::error::Error for GameError {}

/// Result type used throughout the engine.
pub type Result<T> = std::result::Result<T, GameError>;
