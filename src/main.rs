//! Command-line front end: generate all non-equivalent rooted trees with
//! `N` nodes and at most `M` leaves, printing each in canonical form.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use arbora::utils::{progress::StatusLine, timing::Timer};
use arbora::Generator;

/// Generate all non-equivalent trees with N nodes and at most M leaves
#[derive(Parser)]
#[command(name = "arbora", version, about, long_about = None)]
struct Cli {
    /// Number of nodes in the tree
    n: usize,

    /// Maximum number of leaf nodes allowed
    m: usize,

    /// Suppress tree output, show only the summary
    #[arg(long)]
    quiet: bool,

    /// Disable the parallel driver
    #[arg(long)]
    sequential: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are not usage errors
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return code;
        }
    };

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    println!(
        "Generating all trees with N={} nodes and M<={} leaves",
        cli.n, cli.m
    );
    println!("{}\n", "=".repeat(60));

    let timer = Timer::start();
    let mut status = StatusLine::new();
    let mut emitted = 0usize;

    let mut generator = Generator::new();
    let total = generator.generate(cli.n, cli.m, !cli.sequential, |tree| {
        emitted += 1;
        if !cli.quiet {
            println!("Tree #{emitted}:");
            println!("  Representation: {tree}");
            println!(
                "  Nodes: {}, Leaves: {}",
                tree.node_count(),
                tree.leaf_count()
            );
            print!("{}", tree.render_ascii("  "));
            println!();
        } else if emitted % 1000 == 0 {
            status.update(&format!("Generated {emitted} trees so far..."));
        }
    })
    .with_context(|| format!("cannot enumerate N={} M={}", cli.n, cli.m))?;

    if cli.quiet {
        status.clear();
    }

    let elapsed_ms = timer.elapsed_ms();
    println!("{}", "=".repeat(60));
    println!("Total trees generated: {total}");
    print!("Time taken: {elapsed_ms} ms");
    if elapsed_ms >= 1000 {
        print!(" ({:.2} seconds)", elapsed_ms as f64 / 1000.0);
    }
    println!();
    if total > 0 {
        println!(
            "Average time per tree: {:.6} ms",
            elapsed_ms as f64 / total as f64
        );
    }
    Ok(())
}
