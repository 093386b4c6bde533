use battleline::{AiPlayer, GameError, Match, MatchStatus, Player};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Play one automated match: `placement_seed` drives both boards' setup,
/// `play_seed` drives targeting.
fn simulate(placement_seed: u64, play_seed: u64) -> Result<(MatchStatus, Match), GameError> {
    let mut setup_rng = SmallRng::seed_from_u64(placement_seed);
    let mut player = AiPlayer::new();
    let mut game = Match::setup(&mut player, &mut setup_rng)?;
    let mut play_rng = SmallRng::seed_from_u64(play_seed);
    let status = game.run(&mut player as &mut dyn Player, &mut play_rng)?;
    Ok((status, game))
}

fn main() -> anyhow::Result<()> {
    battleline::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <placement-seed> <play-seed>", args[0]);
        std::process::exit(1);
    }
    let placement_seed: u64 = args[1].parse()?;
    let play_seed: u64 = args[2].parse()?;

    let (status, game) = simulate(placement_seed, play_seed).map_err(|e| anyhow::anyhow!(e))?;
    let view = game.opponent_view();

    let winner = match status {
        MatchStatus::Won => Some("player"),
        MatchStatus::Lost => Some("opponent"),
        _ => None,
    };

    let result = json!({
        "status": status,
        "winner": winner,
        "player": {
            "shots": view.shots().len(),
            "hits": view.shots().iter().filter(|s| s.hit()).count(),
        },
        "opponent": {
            "shots": game.player_board().shots().len(),
            "hits": game.player_board().shots().iter().filter(|s| s.hit()).count(),
            "units_remaining_on_player_board": game.player_board().remaining_units(),
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
