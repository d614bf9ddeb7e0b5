use broadside::{neighbours, Cell, Game, ShotOutcome};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn random_game(seed: u64) -> Game {
    let mut rng = SmallRng::seed_from_u64(seed);
    Game::random(&mut rng).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Step counts every call until victory and none after; ship sizes only
    /// shrink; sunk ships are ringed by misses; victory follows the last
    /// sinking exactly.
    #[test]
    fn turn_invariants_hold(
        seed in any::<u64>(),
        shots in prop::collection::vec((-2i32..12, -2i32..12), 1..300),
    ) {
        let mut game = random_game(seed);
        for (x, y) in shots {
            let step_before = game.step();
            let over_before = game.is_over();
            let sizes_before: Vec<usize> =
                game.players()[1].ships().iter().map(|s| s.size()).collect();
            let left_before = game.players()[1].ships_left();
            let grid_before = *game.players()[0].guesses();
            let legal = game.check_legal(x, y, 0);

            let outcome = game.turn(x, y);

            if over_before {
                prop_assert_eq!(outcome, ShotOutcome::GameOver);
                prop_assert_eq!(game.step(), step_before);
                continue;
            }
            prop_assert_eq!(game.step(), step_before + 1);
            prop_assert_eq!(game.current_player(), 0);
            if !legal {
                prop_assert_eq!(outcome, ShotOutcome::Illegal);
                prop_assert_eq!(*game.players()[0].guesses(), grid_before);
                continue;
            }

            let ships = game.players()[1].ships();
            for (ship, before) in ships.iter().zip(&sizes_before) {
                prop_assert!(ship.size() <= *before);
            }
            let expected = if outcome.is_hit() { Cell::Hit } else { Cell::Miss };
            prop_assert_eq!(game.players()[0].guesses().get(x, y), Some(expected));

            for ship in ships.iter().filter(|s| s.is_sunk()) {
                for (sx, sy) in ship.squares() {
                    for (nx, ny) in neighbours(sx, sy) {
                        if let Some(cell) = game.players()[0].guesses().get(nx, ny) {
                            prop_assert_ne!(cell, Cell::Unknown);
                        }
                    }
                }
            }

            let left_after = game.players()[1].ships_left();
            if outcome.sunk_length().is_some() {
                prop_assert_eq!(left_after + 1, left_before);
            } else {
                prop_assert_eq!(left_after, left_before);
            }
            prop_assert_eq!(game.victory().is_some(), left_before == 1 && left_after == 0);
            if game.is_over() {
                prop_assert_eq!(game.victory(), Some(0));
                prop_assert!(
                    matches!(outcome, ShotOutcome::Victory { .. }),
                    "expected a victory outcome, got {:?}",
                    outcome
                );
            }
        }
    }

    #[test]
    fn repeated_shot_leaves_grid_unchanged(seed in any::<u64>(), x in 0i32..10, y in 0i32..10) {
        let mut game = random_game(seed);
        game.turn(x, y);
        let grid = *game.players()[0].guesses();
        let step = game.step();
        prop_assert_eq!(game.turn(x, y), ShotOutcome::Illegal);
        prop_assert_eq!(*game.players()[0].guesses(), grid);
        prop_assert_eq!(game.step(), step + 1);
    }
}

#[test]
fn sweeping_the_board_always_wins() {
    let mut game = random_game(2024);
    'outer: for x in 0..10 {
        for y in 0..10 {
            game.turn(x, y);
            if game.is_over() {
                break 'outer;
            }
        }
    }
    assert_eq!(game.victory(), Some(0));
    assert!(game.players()[1].ships().iter().all(|s| s.is_sunk()));
    assert!(game.step() <= 100);
}
