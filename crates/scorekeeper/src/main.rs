//! Scorekeeper CLI
//!
//! Run a round-robin tournament, enter scores, and keep standings across a
//! session. State persists in a JSON blob and expires two hours after the
//! tournament was created.

use std::env;
use std::path::Path;

use roundrobin_core::Tournament;
use scorekeeper::{FileStore, Session, StoreConfig, DEFAULT_CONFIG_PATH};

fn print_usage() {
    println!("Round-Robin Scorekeeper");
    println!();
    println!("Usage:");
    println!("  scorekeeper start <name> <name> [name...]");
    println!("  scorekeeper score <round> <pairing> <value>");
    println!("  scorekeeper show");
    println!("  scorekeeper standings");
    println!("  scorekeeper clear --yes");
    println!();
    println!("Rounds and pairings are numbered from 1, as shown by 'show'.");
    println!("A blank or non-numeric score value clears the pairing's score.");
    println!();
    println!("Examples:");
    println!("  scorekeeper start Alice Bob Carol");
    println!("  scorekeeper score 1 2 5");
}

fn print_schedule(tournament: &Tournament) {
    for (i, round) in tournament.rounds().iter().enumerate() {
        println!();
        println!("=== Round {} ===", i + 1);
        println!("{:<3} {:<30} {:>6}", "#", "Pair", "Score");
        for (j, pairing) in round.iter().enumerate() {
            let score = pairing
                .score
                .map(|s| s.to_string())
                .unwrap_or_default();
            println!(
                "{:<3} {:<30} {:>6}",
                j + 1,
                tournament.pairing_label(pairing),
                score
            );
        }
    }
}

fn print_standings(session: &Session<FileStore>) {
    println!();
    println!("=== Standings ===");
    println!("{:<20} {:>8}", "Competitor", "Total");
    println!("{}", "-".repeat(30));
    for row in session.rankings() {
        println!("{:<20} {:>8}", row.name, row.total);
    }
}

fn run_start(session: &mut Session<FileStore>, args: &[String]) {
    if args.is_empty() {
        eprintln!("Error: start requires at least one competitor name");
        print_usage();
        return;
    }

    if let Err(e) = session.start(args.to_vec()) {
        eprintln!("Error: {}", e);
        return;
    }
    // The CLI has no memory between invocations, so snapshot immediately
    // rather than waiting for the first score edit.
    if let Err(e) = session.persist() {
        eprintln!("Warning: failed to save session: {}", e);
    }

    if let Some(tournament) = session.tournament() {
        println!(
            "Started tournament with {} competitors.",
            tournament.roster().real_count()
        );
        print_schedule(tournament);
    }
}

fn run_score(session: &mut Session<FileStore>, args: &[String]) {
    if args.len() < 3 {
        eprintln!("Error: score requires <round> <pairing> <value>");
        print_usage();
        return;
    }

    let round = args[0].parse::<usize>().unwrap_or(0);
    let pairing = args[1].parse::<usize>().unwrap_or(0);
    if round == 0 || pairing == 0 {
        eprintln!("Error: round and pairing are numbered from 1");
        return;
    }

    match session.record_score(round - 1, pairing - 1, &args[2]) {
        Ok(_) => print_standings(session),
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn run_clear(session: &mut Session<FileStore>, args: &[String]) {
    if !args.iter().any(|a| a == "--yes") {
        eprintln!("This deletes all tournament data. Re-run with --yes to confirm.");
        return;
    }
    match session.clear() {
        Ok(()) => println!("Tournament cleared."),
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn show_schedule(session: &Session<FileStore>) {
    match session.tournament() {
        Some(tournament) => print_schedule(tournament),
        None => println!("No tournament in progress. Run 'start' first."),
    }
}

fn show_standings(session: &Session<FileStore>) {
    if session.tournament().is_some() {
        print_standings(session);
    } else {
        println!("No tournament in progress. Run 'start' first.");
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let config = match StoreConfig::load(Path::new(DEFAULT_CONFIG_PATH)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return;
        }
    };
    let store = FileStore::new(&config.dir);
    let mut session = Session::restore(store, config.key.as_str());

    match args[1].as_str() {
        "start" => run_start(&mut session, &args[2..]),
        "score" => run_score(&mut session, &args[2..]),
        "show" => show_schedule(&session),
        "standings" => show_standings(&session),
        "clear" => run_clear(&mut session, &args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
