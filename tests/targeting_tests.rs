use broadside::{Combatant, CombatantKind, Orientation, ShotResult, Vessel};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn automated(name: &str) -> Combatant {
    Combatant::new(name, CombatantKind::Automated).unwrap()
}

fn vessel(length: usize) -> Vessel {
    Vessel::new(length).unwrap()
}

#[test]
fn test_random_attack_never_repeats_a_cell() {
    let mut rng = SmallRng::seed_from_u64(11);
    let attacker = automated("Rig");
    let mut defender = automated("Hulk");
    assert!(defender
        .grid_mut()
        .place_vessel(vessel(2), 0, 0, Orientation::Horizontal));

    let mut seen = HashSet::new();
    for _ in 0..50 {
        let shot = attacker.random_attack(&mut rng, &mut defender).unwrap();
        assert_ne!(shot.result, ShotResult::AlreadyShot);
        assert!(
            seen.insert((shot.x, shot.y)),
            "cell ({}, {}) attacked twice",
            shot.x,
            shot.y
        );
    }
}

#[test]
fn test_automated_attack_never_repeats_a_cell() {
    let mut rng = SmallRng::seed_from_u64(17);
    let mut attacker = automated("Rig");
    let mut defender = automated("Hulk");
    assert!(defender
        .grid_mut()
        .place_vessel(vessel(3), 4, 4, Orientation::Horizontal));

    let mut seen = HashSet::new();
    for _ in 0..60 {
        let shot = attacker.automated_attack(&mut rng, &mut defender).unwrap();
        assert_ne!(shot.result, ShotResult::AlreadyShot);
        assert!(
            seen.insert((shot.x, shot.y)),
            "cell ({}, {}) attacked twice",
            shot.x,
            shot.y
        );
    }
}

// After the first hit on a lone vessel, every following attack must come
// from the adjacency queue (orthogonal to some earlier hit) until the
// vessel goes down.
#[test]
fn test_hit_switches_to_adjacent_targeting() {
    for seed in [3, 29, 101, 4096] {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut attacker = automated("Rig");
        let mut defender = automated("Hulk");
        // occupies (5,5), (5,6), (5,7), (5,8)
        assert!(defender
            .grid_mut()
            .place_vessel(vessel(4), 5, 5, Orientation::Vertical));

        let mut hit_cells: Vec<(usize, usize)> = Vec::new();
        let mut shots = 0;
        while !defender.has_lost() {
            shots += 1;
            assert!(shots <= 100, "vessel should sink within the grid budget");
            let shot = attacker.automated_attack(&mut rng, &mut defender).unwrap();
            if !hit_cells.is_empty() {
                let adjacent = hit_cells.iter().any(|&(hx, hy)| {
                    (hx == shot.x && hy.abs_diff(shot.y) == 1)
                        || (hy == shot.y && hx.abs_diff(shot.x) == 1)
                });
                assert!(
                    adjacent,
                    "seed {}: shot ({}, {}) ignored the target queue",
                    seed, shot.x, shot.y
                );
            }
            if shot.result == ShotResult::Hit {
                hit_cells.push((shot.x, shot.y));
            }
        }
        assert_eq!(hit_cells.len(), 4);
    }
}

// A hit enqueues its surviving neighbours left, right, up, down; with a
// lone 1-cell vessel nothing else can hit, so the queue must drain in
// exactly that order. Neighbours the random search happened to shoot
// beforehand are excluded, reconstructed from the observed history.
#[test]
fn test_neighbours_drain_left_right_up_down() {
    for seed in [1, 5, 9, 33] {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut attacker = automated("Rig");
        let mut defender = automated("Hulk");
        assert!(defender
            .grid_mut()
            .place_vessel(vessel(1), 5, 5, Orientation::Horizontal));

        let mut before_hit: Vec<(usize, usize)> = Vec::new();
        loop {
            let shot = attacker.automated_attack(&mut rng, &mut defender).unwrap();
            if shot.result == ShotResult::Hit {
                assert_eq!((shot.x, shot.y), (5, 5));
                break;
            }
            before_hit.push((shot.x, shot.y));
        }

        let expected: Vec<(usize, usize)> = [(4, 5), (6, 5), (5, 4), (5, 6)]
            .into_iter()
            .filter(|cell| !before_hit.contains(cell))
            .collect();
        for &(x, y) in &expected {
            let shot = attacker.automated_attack(&mut rng, &mut defender).unwrap();
            assert_eq!(
                (shot.x, shot.y),
                (x, y),
                "seed {}: queue drained out of order",
                seed
            );
            assert_eq!(shot.result, ShotResult::Miss);
        }
    }
}

#[test]
fn test_full_fleet_destroyed_within_grid_budget() {
    let mut rng = SmallRng::seed_from_u64(21);
    let mut attacker = automated("Rig");
    let mut defender = automated("Hulk");
    for length in [5, 4, 3, 3, 2] {
        defender
            .grid_mut()
            .place_randomly(&mut rng, vessel(length))
            .unwrap();
    }

    let mut shots = 0;
    while !defender.has_lost() {
        shots += 1;
        assert!(shots <= 100, "every cell can be attacked at most once");
        attacker.automated_attack(&mut rng, &mut defender).unwrap();
    }
    assert!(defender.has_lost());
}
