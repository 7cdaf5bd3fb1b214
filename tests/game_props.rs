use broadside::{Combatant, CombatantKind, Game, GRID_SIZE};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // Every coordinate can be attacked at most once, so an automated
    // match always ends within one full sweep of each grid.
    #[test]
    fn automated_matches_terminate(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let first = Combatant::new("Red", CombatantKind::Automated).unwrap();
        let second = Combatant::new("Blue", CombatantKind::Automated).unwrap();
        let mut game = Game::new(first, second);
        game.deploy_fleets(&mut rng).unwrap();

        let outcome = game.run(&mut rng).unwrap();
        prop_assert!(outcome.shots <= 2 * GRID_SIZE * GRID_SIZE);
        prop_assert_ne!(outcome.winner, outcome.loser);
    }
}
