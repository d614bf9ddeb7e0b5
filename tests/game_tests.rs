use broadside::{
    Cell, Game, GameStatus, Orientation, Player, Ship, ShotOutcome, TurnPolicy, LENGTH, WIDTH,
};

fn single_cell_game() -> Game {
    let target = Player::new(1, vec![Ship::new(1, [(5, 5)]).unwrap()]);
    Game::new([Player::default(), target])
}

#[test]
fn sinking_the_last_ship_wins() {
    let mut game = single_cell_game();
    let outcome = game.turn(5, 5);

    assert_eq!(outcome, ShotOutcome::Victory { length: 1 });
    assert_eq!(game.players()[1].ships_left(), 0);
    assert_eq!(game.victory(), Some(0));
    assert_eq!(game.status(), GameStatus::Finished { winner: 0 });
    assert_eq!(game.players()[0].guesses().get(5, 5), Some(Cell::Hit));
    assert_eq!(game.players()[0].guesses().to_rows()[5][5], 2);
    assert_eq!(game.step(), 1);
}

#[test]
fn open_water_is_a_miss() {
    let target = Player::new(1, vec![Ship::new(1, [(5, 5)]).unwrap()]);
    let mut game = Game::new([Player::default(), target]);
    assert_eq!(game.turn(0, 0), ShotOutcome::Miss);

    assert_eq!(game.players()[0].guesses().to_rows()[0][0], 1);
    assert_eq!(game.victory(), None);
    assert_eq!(game.step(), 1);
    assert_eq!(game.current_player(), 0);
}

#[test]
fn off_board_shot_only_counts_the_step() {
    let mut game = single_cell_game();
    let before = game.players().clone();
    assert_eq!(game.turn(-1, 0), ShotOutcome::Illegal);
    assert_eq!(game.step(), 1);
    assert_eq!(game.players(), &before);

    assert_eq!(game.turn(0, WIDTH as i32), ShotOutcome::Illegal);
    assert_eq!(game.turn(LENGTH as i32, 0), ShotOutcome::Illegal);
    assert_eq!(game.step(), 3);
}

#[test]
fn turn_after_victory_changes_nothing() {
    let mut game = single_cell_game();
    game.turn(5, 5);
    let snapshot = game.clone();

    assert_eq!(game.turn(0, 0), ShotOutcome::GameOver);
    assert_eq!(game.turn(-3, 99), ShotOutcome::GameOver);
    assert_eq!(game, snapshot);
    assert_eq!(game.step(), 1);
}

#[test]
fn repeated_shot_is_ignored() {
    let mut game = single_cell_game();
    game.turn(0, 0);
    let grid = *game.players()[0].guesses();
    assert_eq!(game.turn(0, 0), ShotOutcome::Illegal);
    assert_eq!(*game.players()[0].guesses(), grid);
    assert_eq!(game.step(), 2);
}

#[test]
fn check_legal_reads_the_acting_players_grid() {
    let mut game = single_cell_game();
    game.turn(2, 3);
    assert!(!game.check_legal(2, 3, 0));
    assert!(game.check_legal(2, 3, 1));
    assert!(!game.check_legal(10, 0, 0));
    assert!(!game.check_legal(0, -1, 0));
    assert!(!game.check_legal(0, 0, 2));
}

#[test]
fn sinking_reveals_the_border() {
    let ships = vec![
        Ship::line(3, 4, 4, Orientation::Horizontal).unwrap(),
        Ship::line(1, 0, 0, Orientation::Horizontal).unwrap(),
    ];
    let mut game = Game::new([Player::default(), Player::with_ships(ships)]);

    assert_eq!(game.turn(4, 4), ShotOutcome::Hit);
    assert_eq!(game.turn(4, 5), ShotOutcome::Hit);
    assert_eq!(game.players()[0].guesses().count(Cell::Miss), 0);
    assert_eq!(game.turn(4, 6), ShotOutcome::Sunk { length: 3 });

    let grid = game.players()[0].guesses();
    for x in 3..=5 {
        for y in 3..=7 {
            let expected = if x == 4 && (4..=6).contains(&y) {
                Cell::Hit
            } else {
                Cell::Miss
            };
            assert_eq!(grid.get(x, y), Some(expected), "cell ({}, {})", x, y);
        }
    }
    assert_eq!(grid.count(Cell::Miss), 12);
    assert_eq!(game.players()[1].ships_left(), 1);
    assert_eq!(game.players()[1].ships()[0].size(), 0);
    assert_eq!(game.victory(), None);
}

#[test]
fn corner_sink_only_marks_cells_on_the_board() {
    let ships = vec![
        Ship::line(2, 0, 0, Orientation::Vertical).unwrap(),
        Ship::line(1, 9, 9, Orientation::Vertical).unwrap(),
    ];
    let mut game = Game::new([Player::default(), Player::with_ships(ships)]);
    game.turn(5, 5);
    game.turn(0, 0);
    assert_eq!(game.turn(1, 0), ShotOutcome::Sunk { length: 2 });
    let grid = game.players()[0].guesses();
    // (0,1), (1,1), (2,0), (2,1) plus the earlier miss at (5,5)
    assert_eq!(grid.count(Cell::Miss), 5);
    assert_eq!(grid.get(2, 1), Some(Cell::Miss));
}

#[test]
fn shooter_keeps_the_turn_by_default() {
    let mut game = single_cell_game();
    assert_eq!(game.policy(), TurnPolicy::ShooterKeepsTurn);
    for y in 0..5 {
        game.turn(0, y);
        assert_eq!(game.current_player(), 0);
    }
}

#[test]
fn alternate_on_miss_hands_over_the_turn() {
    let ship = || vec![Ship::new(2, [(5, 5), (5, 6)]).unwrap()];
    let mut game = Game::new([Player::with_ships(ship()), Player::with_ships(ship())])
        .with_policy(TurnPolicy::AlternateOnMiss);

    assert_eq!(game.turn(5, 5), ShotOutcome::Hit);
    assert_eq!(game.current_player(), 0);
    assert_eq!(game.turn(0, 0), ShotOutcome::Miss);
    assert_eq!(game.current_player(), 1);
    assert_eq!(game.players()[1].guesses().count(Cell::Unknown), LENGTH * WIDTH);

    // player 1 shoots into player 0's fleet
    assert_eq!(game.turn(5, 5), ShotOutcome::Hit);
    assert_eq!(game.turn(5, 6), ShotOutcome::Victory { length: 2 });
    assert_eq!(game.victory(), Some(1));
    assert_eq!(game.players()[0].ships_left(), 0);
}

#[test]
fn default_games_do_not_share_players() {
    let mut rng = <rand::rngs::SmallRng as rand::SeedableRng>::seed_from_u64(9);
    let mut a = Game::random(&mut rng).unwrap();
    let b = Game::default();
    a.turn(0, 0);
    assert_eq!(b.players()[0].guesses().count(Cell::Unknown), LENGTH * WIDTH);
    assert!(b.players()[1].ships().is_empty());
    assert_eq!(b.players()[1].ships_left(), broadside::FLEET.len());
}

#[test]
fn victory_needs_the_last_ship() {
    let ships = vec![
        Ship::new(1, [(0, 0)]).unwrap(),
        Ship::new(1, [(9, 9)]).unwrap(),
    ];
    let mut game = Game::new([Player::default(), Player::with_ships(ships)]);
    assert_eq!(game.turn(0, 0), ShotOutcome::Sunk { length: 1 });
    assert_eq!(game.victory(), None);
    assert_eq!(game.turn(9, 9), ShotOutcome::Victory { length: 1 });
    assert_eq!(game.victory(), Some(0));
}
