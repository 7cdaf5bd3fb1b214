//! Turn-alternating driver for automated matches.

use log::{debug, info};
use rand::Rng;

use crate::combatant::Combatant;
use crate::common::GameError;
use crate::config::FLEET;
use crate::vessel::Vessel;

/// Final report of a completed match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: String,
    pub loser: String,
    /// Total shots fired by both sides.
    pub shots: usize,
}

/// Two combatants taking alternating turns until one fleet is destroyed.
pub struct Game {
    first: Combatant,
    second: Combatant,
}

impl Game {
    pub fn new(first: Combatant, second: Combatant) -> Self {
        Self { first, second }
    }

    /// Place the conventional fleet on both grids at random positions.
    pub fn deploy_fleets<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        for combatant in [&mut self.first, &mut self.second] {
            for class in FLEET {
                let vessel = Vessel::new(class.length())?;
                combatant.grid_mut().place_randomly(rng, vessel)?;
                debug!("{} deploys a {}", combatant.name(), class.name());
            }
        }
        Ok(())
    }

    /// Run automated turns to completion, polling for a loss after every
    /// shot. The first combatant moves first.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<GameOutcome, GameError> {
        let mut shots = 0;
        loop {
            shots += 1;
            let shot = self.first.automated_attack(rng, &mut self.second)?;
            debug!(
                "{} fires at ({}, {}): {:?}",
                self.first.name(),
                shot.x,
                shot.y,
                shot.result
            );
            if self.second.has_lost() {
                return Ok(self.finish(true, shots));
            }

            shots += 1;
            let shot = self.second.automated_attack(rng, &mut self.first)?;
            debug!(
                "{} fires at ({}, {}): {:?}",
                self.second.name(),
                shot.x,
                shot.y,
                shot.result
            );
            if self.first.has_lost() {
                return Ok(self.finish(false, shots));
            }
        }
    }

    fn finish(&self, first_won: bool, shots: usize) -> GameOutcome {
        let (winner, loser) = if first_won {
            (&self.first, &self.second)
        } else {
            (&self.second, &self.first)
        };
        info!("{} defeats {} after {} shots", winner.name(), loser.name(), shots);
        GameOutcome {
            winner: winner.name().to_string(),
            loser: loser.name().to_string(),
            shots,
        }
    }
}
