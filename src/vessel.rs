//! Vessel definitions and damage tracking.

use crate::common::GameError;

/// Class of vessel: display name and hull length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VesselClass {
    name: &'static str,
    length: usize,
}

impl VesselClass {
    /// Create a new vessel class.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Class name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Hull length in cells.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A single vessel: immutable hull length plus a damage counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    length: usize,
    damage: usize,
}

impl Vessel {
    /// Create an undamaged vessel of the given length.
    pub fn new(length: usize) -> Result<Self, GameError> {
        if length == 0 {
            return Err(GameError::InvalidVesselLength);
        }
        Ok(Self { length, damage: 0 })
    }

    /// Record one hit. Damage is capped at the hull length, so hits on a
    /// vessel that is already destroyed are no-ops.
    pub fn register_hit(&mut self) {
        if !self.is_destroyed() {
            self.damage += 1;
        }
    }

    /// Returns `true` once every cell of the hull has been hit.
    pub fn is_destroyed(&self) -> bool {
        self.damage >= self.length
    }

    /// Hull length in cells.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Hits taken so far.
    pub fn damage(&self) -> usize {
        self.damage
    }
}
