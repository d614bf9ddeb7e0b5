#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    ai::calc_pdf,
    cli::{coord_to_string, describe_outcome, parse_coord, print_player_view, print_probability_board},
    init_logging, state, Agent, Game, GameStatus, ProbabilityAgent, RandomAgent, TurnPolicy,
    CLASSIC_FLEET, TRIPLE_FLEET,
};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum FleetKind {
    /// 4, 3, 3, 2, 2, 2, 1, 1, 1, 1
    Classic,
    /// 4, 4, 4
    Triple,
}

#[cfg(feature = "std")]
impl FleetKind {
    fn sizes(self) -> &'static [usize] {
        match self {
            FleetKind::Classic => &CLASSIC_FLEET,
            FleetKind::Triple => &TRIPLE_FLEET,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum AgentKind {
    Random,
    Probability,
}

#[cfg(feature = "std")]
fn make_agent(kind: AgentKind, fleet: &[usize]) -> Box<dyn Agent> {
    match kind {
        AgentKind::Random => Box::new(RandomAgent::new()),
        AgentKind::Probability => Box::new(ProbabilityAgent::new(fleet)),
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against a computer fleet from the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = FleetKind::Classic)]
        fleet: FleetKind,
        #[arg(long, help = "A miss hands the turn to the opponent")]
        alternate_turns: bool,
        #[arg(long, help = "Resume a game written with `save <path>`")]
        load: Option<PathBuf>,
    },
    /// Let two agents play each other and print the result.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = FleetKind::Classic)]
        fleet: FleetKind,
        #[arg(long, value_enum, default_value_t = AgentKind::Probability)]
        agent: AgentKind,
        #[arg(long, help = "A miss hands the turn to the opponent")]
        alternate_turns: bool,
        #[arg(long, help = "Write the final game state to this file")]
        save: Option<PathBuf>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn policy(alternate_turns: bool) -> TurnPolicy {
    if alternate_turns {
        TurnPolicy::AlternateOnMiss
    } else {
        TurnPolicy::ShooterKeepsTurn
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            fleet,
            alternate_turns,
            load,
        } => {
            let mut rng = make_rng(seed);
            let game = match load {
                Some(path) => state::load(&path)?,
                None => Game::random_with_fleet(&mut rng, fleet.sizes())
                    .map_err(|e| anyhow::anyhow!(e))?
                    .with_policy(policy(alternate_turns)),
            };
            run_interactive(game, rng)?;
        }
        Commands::Auto {
            seed,
            fleet,
            agent,
            alternate_turns,
            save,
        } => {
            let mut rng = make_rng(seed);
            let mut game = Game::random_with_fleet(&mut rng, fleet.sizes())
                .map_err(|e| anyhow::anyhow!(e))?
                .with_policy(policy(alternate_turns));
            let mut agents = [make_agent(agent, fleet.sizes()), make_agent(agent, fleet.sizes())];
            while !game.is_over() {
                let shooter = game.current_player();
                let Some(target) =
                    agents[shooter].select_target(&mut rng, game.players()[shooter].guesses())
                else {
                    anyhow::bail!("player {} has no cells left to fire at", shooter);
                };
                let outcome = game.turn(target.0, target.1);
                agents[shooter].handle_outcome(target, outcome, game.players()[shooter].guesses());
            }
            if let GameStatus::Finished { winner } = game.status() {
                print_player_view(&game, winner);
                println!("\nPlayer {} wins after {} steps.", winner, game.step());
            }
            if let Some(path) = save {
                state::save(&game, &path)?;
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn print_help() {
    println!("Commands:");
    println!("  A5           fire at column A, row 5");
    println!("  hint         show the probability board");
    println!("  save <path>  write the game to a file");
    println!("  quit         leave the game");
}

#[cfg(feature = "std")]
fn run_interactive(mut game: Game, mut rng: SmallRng) -> anyhow::Result<()> {
    // a loaded game may use another fleet and have ships already sunk
    let mut hinter = ProbabilityAgent::against(&game.players()[1]);
    let mut opponent = ProbabilityAgent::against(&game.players()[0]);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    print_help();

    while !game.is_over() {
        if game.current_player() == 1 {
            let Some(target) = opponent.select_target(&mut rng, game.players()[1].guesses()) else {
                anyhow::bail!("opponent has no cells left to fire at");
            };
            let outcome = game.turn(target.0, target.1);
            opponent.handle_outcome(target, outcome, game.players()[1].guesses());
            println!(
                "Enemy fires at {}: {:?}",
                coord_to_string(target.0, target.1),
                outcome
            );
            continue;
        }

        println!();
        print_player_view(&game, 0);
        print!("\nEnter target: ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        let mut words = line.split_whitespace();
        match words.next() {
            None => continue,
            Some("quit") => break,
            Some("help") => print_help(),
            Some("hint") => {
                let pdf = calc_pdf(
                    game.players()[0].guesses(),
                    &hinter.sunk_cells(),
                    hinter.remaining(),
                );
                print_probability_board(&pdf);
            }
            Some("save") => match words.next() {
                Some(path) => state::save(&game, &PathBuf::from(path))?,
                None => println!("Usage: save <path>"),
            },
            Some(coord) => match parse_coord(coord) {
                Ok((x, y)) => {
                    let outcome = game.turn(x, y);
                    hinter.handle_outcome((x, y), outcome, game.players()[0].guesses());
                    println!("{}", describe_outcome((x, y), outcome));
                }
                Err(e) => {
                    println!("Invalid coordinate: {}", e);
                    println!("   Example: A5, B10, J1");
                }
            },
        }
    }

    match game.status() {
        GameStatus::Finished { winner: 0 } => {
            println!("\nVICTORY! You have sunk all enemy ships in {} steps.", game.step());
        }
        GameStatus::Finished { .. } => {
            println!("\nDEFEAT. All your ships have been destroyed.");
        }
        GameStatus::InProgress => println!("\nGame left unfinished at step {}.", game.step()),
    }
    Ok(())
}
