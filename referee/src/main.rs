use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use referee::{
    play_session, simulate_events, EventScript, MatchConfig, MatchOutcome, Recorder,
};
use sinuca::{MatchState, TurnOwner};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to the match config JSON file
    config: PathBuf,

    /// Replay this JSON-lines event script instead of simulating matches
    #[arg(short, long)]
    events: Option<PathBuf>,

    /// How many matches to simulate. Ignored when replaying a script.
    #[arg(short, long, default_value_t = 1)]
    num_matches: usize,

    /// RNG seed for simulated matches
    #[arg(long)]
    seed: Option<u64>,

    /// Record each match's events and turn history as JSON files into this directory
    #[arg(short, long)]
    record_to: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct MatchTally {
    wins: [usize; 2],
    ties: usize,
    unfinished: usize,
}

fn owner_idx(owner: TurnOwner) -> usize {
    match owner {
        TurnOwner::Player1 => 0,
        TurnOwner::Player2 => 1,
    }
}

fn report(state: &MatchState, outcome: MatchOutcome) {
    let snapshot = state.current_snapshot();
    println!("{}", snapshot);
    match outcome {
        MatchOutcome::Won { owner } => println!("{} wins", snapshot.name_of(owner)),
        MatchOutcome::Tie => println!("Tie"),
        MatchOutcome::Unfinished => println!(
            "Unfinished, {} of {} colored balls left",
            state.balls_remaining(),
            state.amount_of_colored_balls()
        ),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let config = MatchConfig::load(&args.config)?;
    info!(
        player_1 = %config.player_1,
        player_2 = config.player_2.as_deref().unwrap_or(""),
        amount_of_colored_balls = config.amount_of_colored_balls
    );

    let mut recorder = if let Some(dir_path) = args.record_to {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    if let Some(script_path) = args.events {
        let script = EventScript::load(&script_path)?;
        let mut state = config.new_match();
        let result = play_session(&mut state, script.0, &mut recorder)?;
        info!(
            events_applied = result.events_applied,
            events_ignored = result.events_ignored,
            turns = state.turn_count()
        );
        report(&state, result.outcome);
        return Ok(());
    }

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut tally = MatchTally::default();
    for match_idx in 0..args.num_matches {
        let events = simulate_events(&mut rng, config.amount_of_colored_balls);
        let mut state = config.new_match();
        let result = play_session(&mut state, events, &mut recorder)?;
        debug!(match_idx, turns = state.turn_count(), outcome = ?result.outcome);
        match result.outcome {
            MatchOutcome::Won { owner } => tally.wins[owner_idx(owner)] += 1,
            MatchOutcome::Tie => tally.ties += 1,
            MatchOutcome::Unfinished => tally.unfinished += 1,
        }
        if args.num_matches == 1 {
            report(&state, result.outcome);
        }
    }

    if args.num_matches > 1 {
        let player_2 = config.player_2.as_deref().unwrap_or("player 2");
        eprintln!(
            "End result:\n- {} wins by {}\n- {} wins by {}\n- {} ties",
            tally.wins[0], config.player_1, tally.wins[1], player_2, tally.ties
        );
        if tally.unfinished > 0 {
            eprintln!("- {} unfinished", tally.unfinished);
        }
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
