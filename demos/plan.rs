//! Plan a route across a map and print it.
//!
//! Run: cargo run --bin plan [SEED | MAP_FILE]
//!
//! With no argument a map is generated from seed 42. A numeric argument is
//! used as the seed; anything else is read as a map file.

use hexdozer_demos::{Scenario, render};
use hexdozer_paths::{Planner, SearchConfig};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let scenario = match std::env::args().nth(1) {
        None => Scenario::generated(42, 16, 12),
        Some(arg) => match arg.parse::<u64>() {
            Ok(seed) => Scenario::generated(seed, 16, 12),
            Err(_) => Scenario::from_text(&std::fs::read_to_string(&arg)?)?,
        },
    };

    let planner = Planner::new(SearchConfig::default().with_max_expansions(200_000));
    let outcome = scenario.plan(&planner)?;

    println!("{}", render(&scenario.map, outcome.best.as_ref()));
    println!();
    match &outcome.best {
        Some(p) => println!(
            "{} -> {}: cost {} ({} mp + {} leveling), {} hexes, {} moves, {} hexes leveled",
            scenario.start,
            scenario.dest,
            p.total_cost(),
            p.mp_used(),
            p.leveling_cost(),
            p.hexes_moved(),
            p.len(),
            p.cells_to_level().len()
        ),
        None => println!("{} -> {}: no route", scenario.start, scenario.dest),
    }
    let stats = &outcome.stats;
    println!(
        "{:?} after {} expansions ({} children, {} admitted, {} cells visited)",
        outcome.termination, stats.expansions, stats.children, stats.admitted, stats.visited_cells
    );
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
