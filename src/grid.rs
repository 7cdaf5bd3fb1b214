//! Grid state: vessel placements plus shot history.

use rand::Rng;

use crate::common::{GameError, ShotResult};
use crate::config::GRID_SIZE;
use crate::vessel::Vessel;

/// Orientation of a vessel run on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One vessel together with the ordered cells it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    vessel: Vessel,
    cells: Vec<(usize, usize)>,
    orientation: Orientation,
}

impl Placement {
    /// The placed vessel.
    pub fn vessel(&self) -> Vessel {
        self.vessel
    }

    /// Occupied cells, in run order from the origin.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Run direction.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

/// One combatant's board: placements, hits, and misses.
///
/// Placement failures are expected during interactive setup and are
/// reported through `bool` returns; a shot outside the grid is a caller
/// bug and is reported loudly through [`GameError`].
#[derive(Debug)]
pub struct Grid {
    size: usize,
    placements: Vec<Placement>,
    hits: Vec<(usize, usize)>,
    misses: Vec<(usize, usize)>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GRID_SIZE)
    }
}

impl Grid {
    /// Create an empty grid of the given side length.
    ///
    /// `size` must be positive: a zero-size grid has no cell to place on
    /// or attack, so asking for one is a caller bug.
    pub fn new(size: usize) -> Self {
        debug_assert!(size > 0, "grid size must be positive");
        Self {
            size,
            placements: Vec::new(),
            hits: Vec::new(),
            misses: Vec::new(),
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Place a vessel with its origin at (`x`, `y`), extending +x when
    /// horizontal and +y when vertical.
    ///
    /// Returns `false` when any cell of the run would fall outside the
    /// grid or on another vessel. The run is recorded atomically; a
    /// partial placement never occurs.
    pub fn place_vessel(
        &mut self,
        vessel: Vessel,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> bool {
        let cells = match self.run_cells(x, y, vessel.length(), orientation) {
            Some(cells) => cells,
            None => return false,
        };
        if cells.iter().any(|&(cx, cy)| self.is_occupied(cx, cy)) {
            return false;
        }
        self.placements.push(Placement {
            vessel,
            cells,
            orientation,
        });
        true
    }

    /// Resolve a shot at (`x`, `y`).
    ///
    /// A coordinate fires exactly once: the first shot returns `Hit` or
    /// `Miss`, every later shot on the same cell returns `AlreadyShot`
    /// and mutates nothing, including the struck vessel's damage.
    pub fn receive_attack(&mut self, x: usize, y: usize) -> Result<ShotResult, GameError> {
        if !self.in_bounds(x, y) {
            return Err(GameError::ShotOutOfBounds);
        }
        if self.was_shot(x, y) {
            return Ok(ShotResult::AlreadyShot);
        }
        match self
            .placements
            .iter_mut()
            .find(|p| p.cells.contains(&(x, y)))
        {
            Some(placement) => {
                placement.vessel.register_hit();
                self.hits.push((x, y));
                Ok(ShotResult::Hit)
            }
            None => {
                self.misses.push((x, y));
                Ok(ShotResult::Miss)
            }
        }
    }

    /// Returns `true` once every placed vessel is destroyed. A grid with
    /// no placements is never defeated.
    pub fn all_vessels_destroyed(&self) -> bool {
        !self.placements.is_empty() && self.placements.iter().all(|p| p.vessel.is_destroyed())
    }

    /// Whether (`x`, `y`) has already been fired at.
    pub fn was_shot(&self, x: usize, y: usize) -> bool {
        self.hits.contains(&(x, y)) || self.misses.contains(&(x, y))
    }

    /// Whether (`x`, `y`) lies on a placed vessel.
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.placements.iter().any(|p| p.cells.contains(&(x, y)))
    }

    /// Snapshot of the hit list. Mutating the returned vector cannot
    /// touch grid history.
    pub fn hits(&self) -> Vec<(usize, usize)> {
        self.hits.clone()
    }

    /// Snapshot of the miss list.
    pub fn misses(&self) -> Vec<(usize, usize)> {
        self.misses.clone()
    }

    /// Snapshot of the placement list.
    pub fn placements(&self) -> Vec<Placement> {
        self.placements.clone()
    }

    /// Place a vessel at a random collision-free position: coin-flip
    /// orientation, then a start cell whose run stays in bounds, retrying
    /// on collision.
    pub fn place_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        vessel: Vessel,
    ) -> Result<(), GameError> {
        let len = vessel.length();
        if len > self.size {
            return Err(GameError::UnableToPlaceVessel);
        }
        for _ in 0..100 {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_x, max_y) = match orientation {
                Orientation::Horizontal => (self.size - len, self.size - 1),
                Orientation::Vertical => (self.size - 1, self.size - len),
            };
            let x = rng.random_range(0..=max_x);
            let y = rng.random_range(0..=max_y);
            if self.place_vessel(vessel, x, y, orientation) {
                return Ok(());
            }
        }
        Err(GameError::UnableToPlaceVessel)
    }

    fn run_cells(
        &self,
        x: usize,
        y: usize,
        length: usize,
        orientation: Orientation,
    ) -> Option<Vec<(usize, usize)>> {
        let mut cells = Vec::with_capacity(length);
        for i in 0..length {
            let (cx, cy) = match orientation {
                Orientation::Horizontal => (x.checked_add(i)?, y),
                Orientation::Vertical => (x, y.checked_add(i)?),
            };
            if !self.in_bounds(cx, cy) {
                return None;
            }
            cells.push((cx, cy));
        }
        Some(cells)
    }

    fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }
}
