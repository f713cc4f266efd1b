//! Headless autoplay runner (default binary).
//!
//! Plays one or more sessions with a first-fit policy and prints the
//! results. Useful for exercising the whole placement pipeline and for
//! eyeballing score distributions across seeds.

use std::path::PathBuf;

use anyhow::{bail, Result};

use blockblast::core::GameSession;
use blockblast::store::{BestScoreStore, JsonFileStore, NullStore};
use blockblast::types::{ColorTag, BOARD_HEIGHT, BOARD_WIDTH, POOL_SIZE};

struct SimCli {
    seed: u32,
    games: u32,
    print_board: bool,
    store_path: Option<PathBuf>,
    help: bool,
}

impl Default for SimCli {
    fn default() -> Self {
        Self {
            seed: 1,
            games: 1,
            print_board: false,
            store_path: None,
            help: false,
        }
    }
}

fn parse_cli() -> Result<SimCli> {
    let mut cli = SimCli::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                cli.help = true;
            }
            "--seed" => {
                let Some(value) = args.next() else {
                    bail!("--seed requires a number");
                };
                cli.seed = value.parse()?;
            }
            "--games" => {
                let Some(value) = args.next() else {
                    bail!("--games requires a number");
                };
                cli.games = value.parse()?;
            }
            "--print-board" => {
                cli.print_board = true;
            }
            "--store" => {
                let Some(path) = args.next() else {
                    bail!("--store requires a path");
                };
                cli.store_path = Some(PathBuf::from(path));
            }
            other => {
                bail!("unknown argument: {other} (try --help)");
            }
        }
    }

    Ok(cli)
}

fn print_help() {
    println!("blockblast-sim - headless autoplay runner");
    println!();
    println!("Options:");
    println!("  --seed <n>      RNG seed (default 1)");
    println!("  --games <n>     number of sessions to play (default 1)");
    println!("  --store <path>  best-score JSON file (default: none)");
    println!("  --print-board   print the final board of each session");
    println!("  -h, --help      show this help");
}

fn main() -> Result<()> {
    let cli = parse_cli()?;
    if cli.help {
        print_help();
        return Ok(());
    }

    let store: Box<dyn BestScoreStore> = match &cli.store_path {
        Some(path) => {
            let store = JsonFileStore::new(path);
            println!("best-score store: {}", store.path().display());
            Box::new(store)
        }
        None => Box::new(NullStore),
    };

    let mut session = GameSession::with_collaborators(
        Box::new(blockblast::core::SimpleRng::new(cli.seed)),
        store,
        Box::new(blockblast::effects::NullSink),
    );

    for game in 0..cli.games {
        if game > 0 {
            session.restart();
        }
        let (moves, lines) = run_to_game_over(&mut session);

        println!(
            "game {}: {} after {} moves, score {} (best {}), {} lines",
            game + 1,
            session.state().as_str(),
            moves,
            session.score(),
            session.best(),
            lines
        );
        if cli.print_board {
            print_board(&session);
            print_pool(&session);
        }
    }

    Ok(())
}

/// Play first-fit moves until the session ends
///
/// While the session is active at least one pooled shape fits somewhere,
/// so the scan below always finds a move.
fn run_to_game_over(session: &mut GameSession) -> (u32, u32) {
    let mut moves = 0u32;
    let mut lines = 0u32;

    while !session.is_game_over() {
        let Some((slot, row, col)) = first_fit(session) else {
            break;
        };
        let report = session.attempt_placement(slot, row, col);
        debug_assert!(report.accepted);
        moves += 1;
        lines += report.lines_cleared;
    }

    (moves, lines)
}

/// Find the first (slot, row, col) where a pooled shape fits
fn first_fit(session: &GameSession) -> Option<(usize, i8, i8)> {
    for slot in 0..POOL_SIZE {
        let Some(shape) = session.pool()[slot] else {
            continue;
        };
        for row in 0..BOARD_HEIGHT as i8 {
            for col in 0..BOARD_WIDTH as i8 {
                if session.board().fits(shape.cells(), row, col) {
                    return Some((slot, row, col));
                }
            }
        }
    }
    None
}

fn print_board(session: &GameSession) {
    let snap = session.snapshot();
    for row in snap.board.iter() {
        let line: String = row
            .iter()
            .map(|&cell| {
                // Grid values are palette index + 1; 0 stays empty
                ColorTag::from_index(cell.wrapping_sub(1))
                    .and_then(|tag| tag.as_str().chars().next())
                    .unwrap_or('.')
            })
            .collect();
        println!("  {line}");
    }
}

fn print_pool(session: &GameSession) {
    let slots: Vec<String> = session
        .pool()
        .iter()
        .flatten()
        .map(|shape| format!("{}({})", shape.kind.as_str(), shape.cell_count()))
        .collect();
    println!("  pool: {}", slots.join(" "));
}
