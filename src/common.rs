//! Shared leaf types: shot outcomes and engine errors.

use core::fmt;

/// Outcome of a single shot against a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// The shot struck an occupied cell.
    Hit,
    /// The shot struck open water.
    Miss,
    /// The cell had already been fired at; nothing changed.
    AlreadyShot,
}

/// Errors raised for caller bugs.
///
/// Expected game-flow conditions (placement collisions, repeated fire)
/// travel through ordinary return values instead, so they never appear
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Vessel length must be at least 1.
    InvalidVesselLength,
    /// Combatant names must be non-empty.
    EmptyName,
    /// Shot coordinate lies outside the grid.
    ShotOutOfBounds,
    /// Random placement could not fit a vessel after repeated attempts.
    UnableToPlaceVessel,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidVesselLength => write!(f, "vessel length must be positive"),
            GameError::EmptyName => write!(f, "combatant name must not be empty"),
            GameError::ShotOutOfBounds => write!(f, "shot coordinate is outside the grid"),
            GameError::UnableToPlaceVessel => write!(f, "unable to place vessel on the grid"),
        }
    }
}

impl std::error::Error for GameError {}
