use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use num_traits::ToPrimitive;
use tracing_subscriber::fmt::SubscriberBuilder;

use scl::lp::{assemble, solve_assembled, SparseLp};
use scl::prelude::*;

mod print;

#[derive(Parser)]
#[command(name = "scl")]
#[command(about = "scl of integral chains in free products of cyclic groups")]
struct Cmd {
    /// Generator string: letter then order, order 0 for an infinite
    /// factor (a5b0 computes in Z/5Z * Z)
    gens: String,

    /// Chain: words with optional integer weights (e.g. abAB, 2ab, -ba)
    #[arg(required = true)]
    words: Vec<String>,

    /// Suppress the edge and polygon catalogue dump
    #[arg(long)]
    no_catalogue: bool,

    /// Abort when the solve exceeds this many seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();

    let group = CyclicProduct::parse(&cmd.gens)?;
    let chain = Chain::new(group, &cmd.words)?;
    tracing::info!(group = %chain.group(), chain = %chain, letters = chain.num_letters(), "chain");

    let catalogue = Catalogue::build(&chain);
    tracing::info!(
        central_edges = catalogue.central_edges.len(),
        interface_edges = catalogue.interface_edges.len(),
        central_polygons = catalogue.central_polygons.len(),
        pieces = catalogue.num_pieces(),
        "catalogue"
    );
    if !cmd.no_catalogue {
        let stdout = std::io::stdout();
        print::catalogue(&mut stdout.lock(), &chain, &catalogue)?;
    }

    let lp = assemble(&chain, &catalogue);
    tracing::info!(rows = lp.rows, cols = lp.cols, entries = lp.entries.len(), "assembled");

    let result = solve_with_budget(&lp, cmd.timeout.map(Duration::from_secs))?;
    let decimal = result.value.to_f64().unwrap_or(f64::NAN);
    println!("scl( {chain} ) = {} = {decimal}", result.value);
    Ok(())
}

/// Solve, optionally bounded by a wall-clock budget. The solve runs on
/// a worker thread; on expiry the worker is abandoned and the overrun
/// reported.
fn solve_with_budget(lp: &SparseLp, budget: Option<Duration>) -> Result<SclResult> {
    let Some(budget) = budget else {
        return Ok(solve_assembled(lp, SolverKind::ExactRational)?);
    };
    let (tx, rx) = std::sync::mpsc::channel();
    let lp = lp.clone();
    std::thread::spawn(move || {
        let _ = tx.send(solve_assembled(&lp, SolverKind::ExactRational));
    });
    match rx.recv_timeout(budget) {
        Ok(outcome) => Ok(outcome?),
        Err(_) => anyhow::bail!("solve exceeded the {}s budget", budget.as_secs()),
    }
}
