#![deny(warnings)]

//! Headless CLI: runs a scripted session and prints the resulting KPIs.

use anyhow::Result;
use sim_core::{validate_state, ResearchTrack};
use sim_runtime::Session;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

struct Args {
    seed: u64,
    units: u64,
    json: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        seed: 42,
        units: 60,
        json: false,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--seed" => args.seed = it.next().and_then(|s| s.parse().ok()).unwrap_or(args.seed),
            "--units" => args.units = it.next().and_then(|s| s.parse().ok()).unwrap_or(args.units),
            "--json" => args.json = true,
            _ => {}
        }
    }
    args
}

fn main() -> Result<()> {
    // Logging setup
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .init();

    let args = parse_args();
    info!(seed = args.seed, units = args.units, "starting session");

    let mut session = Session::new(args.seed);

    // Scripted opening: one research level per track, then launch products
    // until the balance runs dry, then let passive income accrue.
    for track in ResearchTrack::ALL {
        if session.invest_research(track, 150).is_err() {
            break;
        }
    }
    while session.create_product().is_ok() {}
    let events = session.advance(args.units);
    session.shutdown();

    let state = session.state();
    validate_state(state)?;

    let summary = session.summary();
    println!(
        "Session OK | company: {} | level: {} | xp: {}/{}",
        state.company_name, state.level, state.xp, state.xp_to_next_level
    );
    println!(
        "KPI | balance: ${} | revenue: ${}/h | products: {} | research: m{} d{} g{} | events: {}",
        summary.balance,
        summary.total_revenue,
        summary.product_count,
        summary.research.marketing,
        summary.research.development,
        summary.research.design,
        events.len()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(state)?);
    }

    Ok(())
}
