use broadside::state::{decode, encode};
use broadside::{BoardError, Game, GameState, Player, Ship, ShipState, TurnPolicy};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn played_game(seed: u64) -> Game {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::random(&mut rng).unwrap();
    let shots = rng.random_range(0..120);
    for _ in 0..shots {
        game.turn(rng.random_range(-1..11), rng.random_range(-1..11));
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn game_state_roundtrip(seed in any::<u64>()) {
        let game = played_game(seed);
        let state = game.state();
        let bytes = encode(&state).unwrap();
        let decoded: GameState = decode(&bytes).unwrap();
        prop_assert_eq!(&decoded, &state);
        let restored = Game::from_state(&decoded).unwrap();
        prop_assert_eq!(&restored, &game);
    }

    #[test]
    fn restored_game_plays_on_identically(seed in any::<u64>(), x in 0i32..10, y in 0i32..10) {
        let mut game = played_game(seed);
        let mut restored = Game::from_state(&game.state()).unwrap();
        prop_assert_eq!(game.turn(x, y), restored.turn(x, y));
        prop_assert_eq!(game.state(), restored.state());
    }
}

#[test]
fn snapshot_exposes_plain_fields() {
    let mut game = played_game(5).with_policy(TurnPolicy::AlternateOnMiss);
    game.turn(-1, -1);
    let state = game.state();
    assert_eq!(state.step, game.step());
    assert_eq!(state.victory, game.victory());
    assert_eq!(state.policy, TurnPolicy::AlternateOnMiss);
    assert_eq!(state.players[1].ships.len(), game.players()[1].ships().len());
    assert_eq!(state.players[0].guesses, game.players()[0].guesses().to_rows());
}

#[test]
fn invalid_snapshots_are_rejected() {
    let good = played_game(11).state();

    let mut bad = good.clone();
    bad.current_player = 2;
    assert_eq!(Game::from_state(&bad).unwrap_err(), BoardError::InvalidPlayer(2));

    let mut bad = good.clone();
    bad.victory = Some(5);
    assert_eq!(Game::from_state(&bad).unwrap_err(), BoardError::InvalidPlayer(5));

    let mut bad = good.clone();
    bad.players[0].guesses[3][3] = 7;
    assert_eq!(Game::from_state(&bad).unwrap_err(), BoardError::InvalidCell(7));

    let mut bad = good.clone();
    bad.players[1].ships.push(ShipState {
        size: 2,
        squares: vec![(12, 0)],
    });
    assert_eq!(Game::from_state(&bad).unwrap_err(), BoardError::ShipOutOfBounds);

    assert!(decode(&[1, 2, 3]).is_err());
}

fn fresh_state() -> GameState {
    Game::random(&mut SmallRng::seed_from_u64(3)).unwrap().state()
}

fn assert_inconsistent(state: &GameState) {
    let err = Game::from_state(state).unwrap_err();
    assert!(matches!(err, BoardError::InvalidState(_)), "got {:?}", err);
}

#[test]
fn inconsistent_snapshots_are_rejected() {
    let mut bad = fresh_state();
    bad.victory = Some(0);
    assert_inconsistent(&bad);

    let mut bad = fresh_state();
    bad.players[1].ships_left = 0;
    assert_inconsistent(&bad);

    let mut bad = fresh_state();
    bad.players[0].ships_left += 1;
    assert_inconsistent(&bad);

    let mut bad = fresh_state();
    let copy = bad.players[1].ships[0].clone();
    bad.players[1].ships.push(copy);
    bad.players[1].ships_left += 1;
    assert_inconsistent(&bad);

    let mut bad = fresh_state();
    bad.players[1].ships.push(ShipState {
        size: 1,
        squares: vec![bad.players[1].ships[0].squares[0]],
    });
    assert_inconsistent(&bad);
}

#[test]
fn duplicated_ship_cannot_be_restored() {
    let ship = || Ship::new(1, [(5, 5)]).unwrap();
    let shooter = Player::with_ships(vec![Ship::new(1, [(0, 0)]).unwrap()]);
    let game = Game::new([shooter, Player::new(2, vec![ship(), ship()])]);
    assert_inconsistent(&game.state());
}

#[test]
fn finished_game_restores() {
    let shooter = Player::with_ships(vec![Ship::new(1, [(0, 0)]).unwrap()]);
    let target = Player::with_ships(vec![Ship::new(1, [(5, 5)]).unwrap()]);
    let mut game = Game::new([shooter, target]);
    game.turn(5, 5);
    assert_eq!(game.victory(), Some(0));
    let restored = Game::from_state(&game.state()).unwrap();
    assert_eq!(restored, game);
    assert!(restored.is_over());
}

#[test]
fn save_and_load_through_a_file() {
    let game = played_game(77);
    let path = std::env::temp_dir().join(format!("broadside-{}.bin", std::process::id()));
    broadside::state::save(&game, &path).unwrap();
    let loaded = broadside::state::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded, game);
}
