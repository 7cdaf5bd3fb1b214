//! Combatants and the hunt/target attack strategy.

use std::collections::VecDeque;

use rand::Rng;

use crate::common::{GameError, ShotResult};
use crate::grid::Grid;

/// Who drives this combatant's turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatantKind {
    Human,
    Automated,
}

/// A fired shot: where it landed and what it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub x: usize,
    pub y: usize,
    pub result: ShotResult,
}

/// A named participant owning one grid and, for the automated kind, a
/// queue of promising targets.
#[derive(Debug)]
pub struct Combatant {
    name: String,
    kind: CombatantKind,
    grid: Grid,
    // FIFO queue of cells adjacent to earlier hits. Empty queue means
    // hunting (random search), non-empty means targeting; the mode is
    // derived from occupancy, never stored.
    pending_targets: VecDeque<(usize, usize)>,
}

impl Combatant {
    /// Create a combatant with a fresh empty grid.
    pub fn new(name: impl Into<String>, kind: CombatantKind) -> Result<Self, GameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }
        Ok(Self {
            name,
            kind,
            grid: Grid::default(),
            pending_targets: VecDeque::new(),
        })
    }

    /// Combatant's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Combatant's kind.
    pub fn kind(&self) -> CombatantKind {
        self.kind
    }

    /// Whether this combatant moves on its own.
    pub fn is_automated(&self) -> bool {
        self.kind == CombatantKind::Automated
    }

    /// This combatant's own grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the grid for fleet setup.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Returns `true` once this combatant's entire fleet is destroyed.
    pub fn has_lost(&self) -> bool {
        self.grid.all_vessels_destroyed()
    }

    /// Fire at a chosen cell on the opponent's grid, returning the
    /// opponent's resolution verbatim.
    pub fn fire_at(
        &self,
        opponent: &mut Combatant,
        x: usize,
        y: usize,
    ) -> Result<ShotResult, GameError> {
        opponent.grid.receive_attack(x, y)
    }

    /// Fire at a uniformly random unshot cell on the opponent's grid.
    pub fn random_attack<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        opponent: &mut Combatant,
    ) -> Result<Shot, GameError> {
        let (x, y) = random_unshot_cell(rng, &opponent.grid);
        let result = opponent.grid.receive_attack(x, y)?;
        Ok(Shot { x, y, result })
    }

    /// Hunt/target attack.
    ///
    /// Queued targets are exploited first, oldest lead first; with an
    /// empty queue the attack falls back to uniform random search over
    /// unshot cells. Any hit enqueues the up-to-four orthogonal
    /// neighbours (left, right, up, down) that are in bounds, not yet
    /// queued, and not yet shot, so two interleaved hunts share one
    /// queue without ever duplicating a target.
    pub fn automated_attack<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        opponent: &mut Combatant,
    ) -> Result<Shot, GameError> {
        // The random branch can land on a cell that was queued earlier;
        // discard such stale entries so every attack resolves a fresh
        // coordinate.
        while let Some(&(x, y)) = self.pending_targets.front() {
            if opponent.grid.was_shot(x, y) {
                self.pending_targets.pop_front();
            } else {
                break;
            }
        }

        let (x, y) = match self.pending_targets.pop_front() {
            Some(target) => target,
            None => random_unshot_cell(rng, &opponent.grid),
        };
        let result = opponent.grid.receive_attack(x, y)?;
        if result == ShotResult::Hit {
            self.enqueue_neighbours(x, y, &opponent.grid);
        }
        Ok(Shot { x, y, result })
    }

    fn enqueue_neighbours(&mut self, x: usize, y: usize, grid: &Grid) {
        let size = grid.size();
        let mut candidates = [None; 4];
        if x > 0 {
            candidates[0] = Some((x - 1, y));
        }
        if x + 1 < size {
            candidates[1] = Some((x + 1, y));
        }
        if y > 0 {
            candidates[2] = Some((x, y - 1));
        }
        if y + 1 < size {
            candidates[3] = Some((x, y + 1));
        }
        for cell in candidates.into_iter().flatten() {
            if !grid.was_shot(cell.0, cell.1) && !self.pending_targets.contains(&cell) {
                self.pending_targets.push_back(cell);
            }
        }
    }
}

/// Rejection-sample an in-bounds cell that has not been fired at.
fn random_unshot_cell<R: Rng + ?Sized>(rng: &mut R, grid: &Grid) -> (usize, usize) {
    loop {
        let x = rng.random_range(0..grid.size());
        let y = rng.random_range(0..grid.size());
        if !grid.was_shot(x, y) {
            return (x, y);
        }
    }
}
