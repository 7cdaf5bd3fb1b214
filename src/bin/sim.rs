use anyhow::Context;
use broadside::{init_logging, Combatant, CombatantKind, Game};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Run automated grid-combat matches and report the results.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Fix RNG seed for reproducible matches (e.g., --seed 12345).
    #[arg(long)]
    seed: Option<u64>,
    /// Number of matches to run.
    #[arg(long, default_value_t = 1)]
    games: u32,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let mut first_wins = 0u32;
    let mut total_shots = 0usize;
    for game_no in 1..=cli.games {
        let first = Combatant::new("Red", CombatantKind::Automated)?;
        let second = Combatant::new("Blue", CombatantKind::Automated)?;
        let mut game = Game::new(first, second);
        game.deploy_fleets(&mut rng).context("fleet deployment failed")?;
        let outcome = game.run(&mut rng)?;
        if outcome.winner == "Red" {
            first_wins += 1;
        }
        total_shots += outcome.shots;
        println!(
            "game {}: {} beat {} in {} shots",
            game_no, outcome.winner, outcome.loser, outcome.shots
        );
    }

    println!(
        "Red {} - {} Blue, {:.1} shots per game",
        first_wins,
        cli.games - first_wins,
        total_shots as f64 / cli.games as f64
    );
    Ok(())
}
