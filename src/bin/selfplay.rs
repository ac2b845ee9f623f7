//! Random self-play.
//!
//! Plays a batch of games between two random choosers and prints a summary.
//! Set `RUST_LOG=cuttle=debug` to follow every action.
//!
//! ```text
//! cuttle-selfplay --games 100 --seed 7 --max-actions 1000
//! ```

use cuttle::core::{PlayerId, RulesConfig};
use cuttle::game::{Match, MatchConfig, MatchOutcome};
use tracing_subscriber::EnvFilter;

struct Options {
    games: u64,
    seed: u64,
    max_actions: usize,
}

fn parse_options() -> Result<Options, Box<dyn std::error::Error>> {
    let mut options = Options {
        games: 10,
        seed: 0,
        max_actions: MatchConfig::default().max_actions,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let value = args.next().ok_or_else(|| format!("missing value for {arg}"))?;
        match arg.as_str() {
            "--games" => options.games = value.parse()?,
            "--seed" => options.seed = value.parse()?,
            "--max-actions" => options.max_actions = value.parse()?,
            other => return Err(format!("unknown option {other}").into()),
        }
    }
    Ok(options)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = parse_options()?;
    let config = MatchConfig::new().with_max_actions(options.max_actions);

    let mut wins = [0u64; 2];
    let mut stalemates = 0u64;
    let mut concessions = 0u64;
    let mut abandoned = 0u64;
    let mut total_actions = 0usize;

    for i in 0..options.games {
        let seed = options.seed.wrapping_add(i);
        let mut game = Match::self_play(seed, RulesConfig::default())?.with_config(config.clone());
        let outcome = game.play()?;
        total_actions += game.actions_taken();

        match outcome {
            MatchOutcome::Winner(p) => wins[p.index()] += 1,
            MatchOutcome::Conceded { by } => wins[by.opponent().index()] += 1,
            MatchOutcome::Stalemate => stalemates += 1,
            MatchOutcome::ActionLimit => abandoned += 1,
        }
        if matches!(outcome, MatchOutcome::Conceded { .. }) {
            concessions += 1;
        }
    }

    println!("games:       {}", options.games);
    println!("{} wins: {}", PlayerId::P0, wins[0]);
    println!("{} wins: {}", PlayerId::P1, wins[1]);
    println!("stalemates:  {stalemates}");
    println!("concessions: {concessions}");
    println!("abandoned:   {abandoned}");
    if options.games > 0 {
        println!("avg actions: {:.1}", total_actions as f64 / options.games as f64);
    }
    Ok(())
}
