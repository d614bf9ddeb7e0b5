//! Plain-data snapshots of a game for saving, loading and inspection.
//!
//! Every field of [`Game`], [`Player`] and [`Ship`] appears here; restoring a
//! snapshot validates it instead of trusting it.

use alloc::vec::Vec;

use crate::board::{Coord, ShotGrid};
use crate::common::BoardError;
use crate::config::{LENGTH, WIDTH};
use crate::game::{Game, TurnPolicy};
use crate::placement::Layout;
use crate::player::Player;
use crate::ship::Ship;

/// A ship as its remaining size and covered squares.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipState {
    pub size: usize,
    pub squares: Vec<Coord>,
}

/// A player with the shot grid encoded as 0 unknown, 1 miss, 2 hit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub ships_left: usize,
    pub ships: Vec<ShipState>,
    pub guesses: [[u8; WIDTH]; LENGTH],
}

/// Serializable overall game state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub players: [PlayerState; 2],
    pub current_player: usize,
    pub victory: Option<usize>,
    pub step: u64,
    pub policy: TurnPolicy,
}

impl From<&Ship> for ShipState {
    fn from(ship: &Ship) -> Self {
        ShipState {
            size: ship.size(),
            squares: ship.squares().collect(),
        }
    }
}

impl TryFrom<&ShipState> for Ship {
    type Error = BoardError;

    fn try_from(state: &ShipState) -> Result<Self, Self::Error> {
        Ship::new(state.size, state.squares.iter().copied())
    }
}

impl From<&Player> for PlayerState {
    fn from(p: &Player) -> Self {
        PlayerState {
            ships_left: p.ships_left(),
            ships: p.ships().iter().map(ShipState::from).collect(),
            guesses: p.guesses().to_rows(),
        }
    }
}

impl TryFrom<&PlayerState> for Player {
    type Error = BoardError;

    fn try_from(state: &PlayerState) -> Result<Self, Self::Error> {
        let ships = state
            .ships
            .iter()
            .map(Ship::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let guesses = ShotGrid::from_rows(&state.guesses)?;
        Ok(Player::from_parts(state.ships_left, ships, guesses))
    }
}

impl Game {
    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        let [p0, p1] = self.players();
        GameState {
            players: [PlayerState::from(p0), PlayerState::from(p1)],
            current_player: self.current_player(),
            victory: self.victory(),
            step: self.step(),
            policy: self.policy(),
        }
    }

    /// Restore a game from a snapshot, rejecting out-of-range player indices,
    /// unknown cell codes, malformed ships and fleets or counters that no
    /// sequence of turns could have produced.
    pub fn from_state(state: &GameState) -> Result<Self, BoardError> {
        if state.current_player > 1 {
            return Err(BoardError::InvalidPlayer(state.current_player));
        }
        if let Some(winner) = state.victory {
            if winner > 1 {
                return Err(BoardError::InvalidPlayer(winner));
            }
        }
        let p0 = Player::try_from(&state.players[0])?;
        let p1 = Player::try_from(&state.players[1])?;
        check_consistent(&[&p0, &p1], state.victory)?;
        Ok(Game::from_parts(
            [p0, p1],
            state.current_player,
            state.victory,
            state.step,
            state.policy,
        ))
    }
}

fn check_consistent(players: &[&Player; 2], victory: Option<usize>) -> Result<(), BoardError> {
    for p in players {
        if Layout::from_ships(p.ships()).is_err() {
            return Err(BoardError::InvalidState("ships overlap or touch"));
        }
        let afloat = p.ships().iter().filter(|s| !s.is_sunk()).count();
        if p.ships_left() > afloat {
            return Err(BoardError::InvalidState("more ships left than ships afloat"));
        }
    }
    match victory {
        Some(winner) if players[1 - winner].ships_left() != 0 => {
            Err(BoardError::InvalidState("winner declared while the loser has ships left"))
        }
        None if players.iter().any(|p| p.ships_left() == 0) => {
            Err(BoardError::InvalidState("a fleet is destroyed but no winner is set"))
        }
        _ => Ok(()),
    }
}

/// Encode a snapshot with `bincode`.
#[cfg(feature = "std")]
pub fn encode(state: &GameState) -> anyhow::Result<Vec<u8>> {
    Ok(bincode::serialize(state)?)
}

/// Decode a snapshot produced by [`encode`].
#[cfg(feature = "std")]
pub fn decode(bytes: &[u8]) -> anyhow::Result<GameState> {
    Ok(bincode::deserialize(bytes)?)
}

/// Write a game to `path`.
#[cfg(feature = "std")]
pub fn save(game: &Game, path: &std::path::Path) -> anyhow::Result<()> {
    let bytes = encode(&game.state())?;
    std::fs::write(path, bytes)?;
    log::info!("saved game at step {} to {}", game.step(), path.display());
    Ok(())
}

/// Read a game written by [`save`].
#[cfg(feature = "std")]
pub fn load(path: &std::path::Path) -> anyhow::Result<Game> {
    let bytes = std::fs::read(path)?;
    let state = decode(&bytes)?;
    let game = Game::from_state(&state).map_err(|e| anyhow::anyhow!(e))?;
    log::info!("loaded game at step {} from {}", game.step(), path.display());
    Ok(game)
}
