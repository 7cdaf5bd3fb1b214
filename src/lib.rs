//! Grid-combat game engine: placement validation, shot resolution, win
//! detection, and a hunt/target attack strategy. Rendering and input
//! handling are left to the consuming layer.

mod combatant;
mod common;
mod config;
mod game;
mod grid;
mod logging;
mod vessel;

pub use combatant::{Combatant, CombatantKind, Shot};
pub use common::{GameError, ShotResult};
pub use config::{FLEET, FLEET_SIZE, GRID_SIZE};
pub use game::{Game, GameOutcome};
pub use grid::{Grid, Orientation, Placement};
pub use logging::init_logging;
pub use vessel::{Vessel, VesselClass};
