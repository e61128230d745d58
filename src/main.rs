#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, Write};
#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use salvo::{
    init_logging, ui, Action, ActionKind, Actor, Board, FleetBuilder, GameSession, GameStatus,
    Replay, ReplayView,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the AI on the local machine.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Skip manual placement and use a random fleet")]
        random_fleet: bool,
        #[arg(long, help = "Write the finished game's replay to this file")]
        save: Option<PathBuf>,
    },
    /// Play back a saved game.
    Replay {
        path: PathBuf,
        #[arg(long, help = "Print the boards after every shot")]
        step: bool,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            random_fleet,
            save,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let board = if random_fleet {
                Board::random(&mut rng).map_err(|e| anyhow::anyhow!(e))?
            } else {
                match build_fleet(&mut rng)? {
                    Some(board) => board,
                    None => return Ok(()),
                }
            };
            let mut session = GameSession::new(board, rng).map_err(|e| anyhow::anyhow!(e))?;
            if !play(&mut session)? {
                return Ok(());
            }

            ui::print_session(&session);
            ui::print_game_over(session.status());
            let replay = session.replay();
            println!("\nShots in order:");
            for (i, action) in replay.actions.iter().enumerate() {
                println!("{:3}. {}", i + 1, describe(action));
            }
            if let Some(path) = save {
                std::fs::write(&path, replay.to_bytes()?)?;
                println!("Replay saved to {}", path.display());
            }
        }
        Commands::Replay { path, step } => {
            let bytes = std::fs::read(&path)?;
            let replay = Replay::from_bytes(&bytes)?;
            let fleet = Board::from_ships(replay.player_ships.iter().copied())
                .map_err(|e| anyhow::anyhow!(e))?;
            let mut view = ReplayView::default();
            let mut cursor = replay.cursor();
            let mut n = 0;
            while let Some(action) = cursor.step(&mut view) {
                n += 1;
                println!("{:3}. {}", n, describe(&action));
                if step {
                    ui::print_replay_frame(&fleet, &view);
                }
            }
            if !step {
                ui::print_replay_frame(&fleet, &view);
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn describe(action: &Action) -> String {
    let who = match action.actor {
        Actor::Player => "You",
        Actor::Ai => "AI",
    };
    let what = match action.kind {
        ActionKind::Shot => "hit",
        ActionKind::Miss => "miss",
    };
    format!("{:<3} {} -> {}", who, action.coord, what)
}

/// Read one trimmed line; `None` at end of input.
#[cfg(feature = "std")]
fn prompt(text: &str) -> anyhow::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Interactive placement, largest ship first. An empty first answer picks
/// a random fleet instead. Returns `None` if input ends early.
#[cfg(feature = "std")]
fn build_fleet(rng: &mut SmallRng) -> anyhow::Result<Option<Board>> {
    let mut builder = FleetBuilder::new();
    println!("Place your ships. Press enter at the first prompt for a random fleet.");
    while let Some(size) = builder.current_size() {
        ui::print_board(builder.board(), true);
        let Some(line) = prompt(&format!("Start of ship (length {}): ", size))? else {
            return Ok(None);
        };
        if line.is_empty() && builder.board().ships().is_empty() {
            return Ok(Some(Board::random(rng).map_err(|e| anyhow::anyhow!(e))?));
        }
        let start = match ui::parse_coord(&line) {
            Ok(c) => c,
            Err(e) => {
                println!("Error: {}", e);
                continue;
            }
        };
        let ends = builder.possible_ends(start);
        if ends.is_empty() {
            println!("No ship of length {} fits at {}", size, start);
            continue;
        }
        let end = if size == 1 {
            start
        } else {
            let options: Vec<String> = ends.iter().map(|c| c.to_string()).collect();
            let Some(line) = prompt(&format!("End of ship [{}]: ", options.join(" ")))? else {
                return Ok(None);
            };
            match ui::parse_coord(&line) {
                Ok(c) if ends.contains(&c) => c,
                Ok(c) => {
                    println!("{} is not one of the offered ends", c);
                    continue;
                }
                Err(e) => {
                    println!("Error: {}", e);
                    continue;
                }
            }
        };
        if let Err(e) = builder.place(start, end) {
            println!("Error: {}", e);
        }
    }
    Ok(Some(builder.finish().map_err(|e| anyhow::anyhow!(e))?))
}

/// Run turns until someone wins. Returns `false` if input ended first.
#[cfg(feature = "std")]
fn play(session: &mut GameSession<SmallRng>) -> anyhow::Result<bool> {
    while session.status() == GameStatus::InProgress {
        ui::print_session(session);
        let Some(line) = prompt("Enter guess: ")? else {
            return Ok(false);
        };
        let target = match ui::parse_coord(&line) {
            Ok(c) => c,
            Err(e) => {
                println!("Error: {}", e);
                continue;
            }
        };
        if session.ai_board().shots().has(target) {
            println!("You already fired at {}", target);
            continue;
        }
        let outcome = session.attack(target);
        println!("You fired at {} -> {:?}", target, outcome.player_result);
        if let Some(ai) = outcome.ai_move {
            println!("AI fired at {} -> {:?}", ai.target, ai.result);
        }
    }
    Ok(true)
}
