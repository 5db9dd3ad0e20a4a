use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::{error, info};

use pawn_storm::ai::mate_in;
use pawn_storm::{Difficulty, Game, GameResult, SearchConfig, SearchResult};

#[derive(Parser)]
#[command(name = "pawn_storm", version, about = "Eight pawns against a queen")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search one position and print the best lines
    Analyze {
        /// Position in text form, start position when omitted
        #[arg(long)]
        fen: Option<String>,
        #[arg(long, default_value_t = 8)]
        depth: u8,
        /// Wall-clock budget in milliseconds
        #[arg(long)]
        time_ms: Option<u64>,
        #[arg(long, default_value_t = 3)]
        lines: usize,
        /// easy, medium, hard or expert; overrides depth and time
        #[arg(long)]
        difficulty: Option<Difficulty>,
    },
    /// Let the engine play both sides until the game ends
    Selfplay {
        #[arg(long, default_value_t = 5)]
        depth: u8,
        #[arg(long, default_value_t = 200)]
        max_plies: u16,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze {
            fen,
            depth,
            time_ms,
            lines,
            difficulty,
        } => {
            let config = match difficulty {
                Some(level) => level.config(),
                None => SearchConfig::default()
                    .with_max_depth(depth)
                    .with_time_budget(time_ms.map(Duration::from_millis)),
            };
            let mut game = Game::with_config(config.with_line_count(lines));

            if let Some(fen) = fen {
                if let Err(e) = game.load_fen(&fen) {
                    error!("{e}");
                    return ExitCode::from(2);
                }
            }

            game.set_listener(|snapshot: &SearchResult| {
                info!(
                    "depth {} seldepth {} score {} nodes {} nps {}",
                    snapshot.depth, snapshot.sel_depth, snapshot.score, snapshot.nodes, snapshot.nps
                );
            });

            let result = game.search();
            print_lines(&result);
            ExitCode::SUCCESS
        }
        Command::Selfplay { depth, max_plies } => {
            let mut game = Game::with_config(SearchConfig::default().with_max_depth(depth).with_line_count(1));

            while game.result() == GameResult::Ongoing && game.board_state().ply < max_plies {
                let result = game.search();
                let Some(mv) = result.best_move() else {
                    error!("search returned no move in an ongoing game");
                    return ExitCode::FAILURE;
                };
                info!("{:>3}. {} ({})", game.board_state().ply + 1, mv, result.score);
                if !game.apply_move(mv.from(), mv.to()) {
                    error!("engine move {mv} rejected");
                    return ExitCode::FAILURE;
                }
            }

            println!("{}", game.move_history().join(" "));
            println!("result: {:?}", game.result());
            println!("{}", game.fen());
            ExitCode::SUCCESS
        }
    }
}

fn print_lines(result: &SearchResult) {
    println!(
        "depth {} seldepth {} nodes {} time {}ms",
        result.depth, result.sel_depth, result.nodes, result.time_ms
    );
    for (i, line) in result.lines.iter().enumerate() {
        let score = match mate_in(line.score) {
            Some(n) => format!("mate {n}"),
            None => format!("cp {}", line.score),
        };
        let moves: Vec<String> = line.moves.iter().map(|mv| mv.to_string()).collect();
        println!("{:>2}. {:<10} {}", i + 1, score, moves.join(" "));
    }
}
