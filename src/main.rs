use std::io::{self, BufRead, Write};

use battleline::{
    init_logging,
    ui::render_side_by_side,
    AiPlayer, CliPlayer, GameError, Match, MatchStatus, Player, Turn,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Play against the computer at this console.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch the computer play both sides.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            let mut rng = make_rng(seed);
            loop {
                println!(" === BATTLELINE === ");
                let status = {
                    let mut player = CliPlayer::new();
                    play_match(&mut player, &mut rng, true)?
                };
                if status == MatchStatus::Aborted || !ask_replay()? {
                    println!("Thanks for playing!");
                    break;
                }
            }
        }
        Commands::Watch { seed } => {
            let mut rng = make_rng(seed);
            let mut player = AiPlayer::new();
            play_match(&mut player, &mut rng, false)?;
        }
    }
    Ok(())
}

/// Set up and play one match, rendering both boards each time the player
/// side is about to fire when `show_turns` is set.
fn play_match(
    player: &mut dyn Player,
    rng: &mut SmallRng,
    show_turns: bool,
) -> anyhow::Result<MatchStatus> {
    let mut game = match Match::setup(player, rng) {
        Ok(game) => game,
        Err(GameError::Aborted) => {
            println!("Match abandoned.");
            return Ok(MatchStatus::Aborted);
        }
        Err(e) => return Err(anyhow::anyhow!(e)),
    };
    let mut status = MatchStatus::InProgress;
    while status == MatchStatus::InProgress {
        if show_turns && game.turn() == Turn::Player {
            println!("\n{}", render_side_by_side(game.player_board(), game.opponent_view()));
        }
        status = game
            .play_round(player, rng)
            .map_err(|e| anyhow::anyhow!(e))?;
    }

    println!("\n{}", render_side_by_side(game.player_board(), game.opponent_view()));
    match status {
        MatchStatus::Won => println!("VICTORY! Every enemy unit is destroyed."),
        MatchStatus::Lost => println!("DEFEAT. All your units have been destroyed."),
        MatchStatus::Aborted => println!("Match abandoned."),
        MatchStatus::InProgress => {}
    }
    Ok(status)
}

fn ask_replay() -> anyhow::Result<bool> {
    print!("Play again? (y/n): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}
