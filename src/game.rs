//! The two-player game state machine.

use log::{debug, info};
use rand::Rng;

use crate::board::{in_bounds, neighbours, Cell, ShotGrid};
use crate::common::{BoardError, ShotOutcome};
use crate::config::FLEET;
use crate::player::Player;

/// Who fires after a shot has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnPolicy {
    /// The shooter keeps the turn whatever the outcome.
    #[default]
    ShooterKeepsTurn,
    /// A miss hands the turn to the opponent; hits keep it.
    AlternateOnMiss,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Finished { winner: usize },
}

/// Two players, whose turn it is, the winner once decided, and a step counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    players: [Player; 2],
    current_player: usize,
    victory: Option<usize>,
    step: u64,
    policy: TurnPolicy,
}

impl Default for Game {
    /// Two fresh default players with no ships.
    fn default() -> Self {
        Self::new([Player::default(), Player::default()])
    }
}

/// A shot at `(x, y)` is open when the cell is on the board and unresolved.
fn is_open(grid: &ShotGrid, x: i32, y: i32) -> bool {
    grid.get(x, y) == Some(Cell::Unknown)
}

/// Record a resolved cell that has already passed [`in_bounds`].
fn resolve(grid: &mut ShotGrid, row: usize, col: usize, cell: Cell) {
    let marked = grid.mark(row, col, cell);
    debug_assert!(marked.is_ok(), "on-board cell ({}, {}) rejected", row, col);
}

impl Game {
    /// New game between `players`; player 0 moves first.
    pub fn new(players: [Player; 2]) -> Self {
        Self {
            players,
            current_player: 0,
            victory: None,
            step: 0,
            policy: TurnPolicy::default(),
        }
    }

    /// New game with both players given a random [`FLEET`].
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, BoardError> {
        Self::random_with_fleet(rng, FLEET)
    }

    /// New game with both players given a random layout of `fleet`.
    pub fn random_with_fleet<R: Rng + ?Sized>(
        rng: &mut R,
        fleet: &[usize],
    ) -> Result<Self, BoardError> {
        let mut players = [Player::default(), Player::default()];
        for p in players.iter_mut() {
            p.random_place_fleet(rng, fleet)?;
        }
        Ok(Self::new(players))
    }

    /// Replace the turn policy.
    pub fn with_policy(mut self, policy: TurnPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub(crate) fn from_parts(
        players: [Player; 2],
        current_player: usize,
        victory: Option<usize>,
        step: u64,
        policy: TurnPolicy,
    ) -> Self {
        Self {
            players,
            current_player,
            victory,
            step,
            policy,
        }
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Player by index, `None` unless 0 or 1.
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Index of the player whose shot `turn` resolves next.
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// Winner's index once the game is finished.
    pub fn victory(&self) -> Option<usize> {
        self.victory
    }

    /// Number of `turn` calls made while the game was in progress.
    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn policy(&self) -> TurnPolicy {
        self.policy
    }

    pub fn status(&self) -> GameStatus {
        match self.victory {
            Some(winner) => GameStatus::Finished { winner },
            None => GameStatus::InProgress,
        }
    }

    pub fn is_over(&self) -> bool {
        self.victory.is_some()
    }

    /// Whether `player` may fire at `(x, y)`: the cell must be on the board
    /// and still unknown in that player's shot grid. Unknown player indices
    /// are never legal.
    pub fn check_legal(&self, x: i32, y: i32, player: usize) -> bool {
        self.players
            .get(player)
            .map(|p| is_open(p.guesses(), x, y))
            .unwrap_or(false)
    }

    /// Fire the current player's shot at `(x, y)`.
    ///
    /// Once the game is finished this does nothing, not even count the step.
    /// Otherwise the step always counts; an illegal shot changes nothing else.
    /// A hit that sinks a ship marks every open cell around it as a miss.
    pub fn turn(&mut self, x: i32, y: i32) -> ShotOutcome {
        if self.victory.is_some() {
            return ShotOutcome::GameOver;
        }
        self.step += 1;
        let shooter = self.current_player;
        if !self.check_legal(x, y, shooter) {
            debug!("step {}: player {} illegal shot at ({}, {})", self.step, shooter, x, y);
            return ShotOutcome::Illegal;
        }
        let Some((r, c)) = in_bounds(x, y) else {
            return ShotOutcome::Illegal;
        };

        let [p0, p1] = &mut self.players;
        let (attacker, defender) = if shooter == 0 { (p0, p1) } else { (p1, p0) };

        let Some(ship) = defender.ships_mut().iter_mut().find(|s| s.contains(x, y)) else {
            resolve(attacker.guesses_mut(), r, c, Cell::Miss);
            debug!("step {}: player {} missed at ({}, {})", self.step, shooter, x, y);
            if self.policy == TurnPolicy::AlternateOnMiss {
                self.current_player = 1 - shooter;
            }
            return ShotOutcome::Miss;
        };

        let sunk = ship.register_hit();
        let ship = *ship;
        resolve(attacker.guesses_mut(), r, c, Cell::Hit);
        debug!("step {}: player {} hit at ({}, {})", self.step, shooter, x, y);
        if !sunk {
            return ShotOutcome::Hit;
        }

        let grid = attacker.guesses_mut();
        for (sx, sy) in ship.squares() {
            for (nx, ny) in neighbours(sx, sy) {
                if !is_open(grid, nx, ny) {
                    continue;
                }
                if let Some((nr, nc)) = in_bounds(nx, ny) {
                    resolve(grid, nr, nc, Cell::Miss);
                }
            }
        }

        let length = ship.length();
        let before = defender.ships_left();
        let left = defender.lose_ship();
        info!(
            "player {} sank a ship of length {}, {} left",
            shooter, length, left
        );
        if before == 1 {
            self.victory = Some(shooter);
            info!("player {} wins after {} steps", shooter, self.step);
            return ShotOutcome::Victory { length };
        }
        ShotOutcome::Sunk { length }
    }
}
