//! Turns an expression into a Graphviz rendering.
//!
//! Compiles the expression, prints the DOT text, writes it to disk, and
//! shells out to `dot` for a PNG next to it.

use std::path::PathBuf;
use std::process::{Command, ExitCode};

use clap::Parser;
use grex_lib::{IdFactory, parse};

/// Compile a symbol regular expression into a transition graph.
#[derive(Parser)]
#[command(name = "grex", version, about)]
struct Cli {
    /// Expression to compile, e.g. "(a, b+)*, end"
    expression: String,

    /// Path of the DOT file to write; the PNG lands next to it
    #[arg(short, long, default_value = "graph.dot")]
    output: PathBuf,

    /// Write the DOT file only, without invoking Graphviz
    #[arg(long)]
    no_render: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let mut factory = IdFactory::new();
    let grex = parse(&mut factory, &cli.expression).map_err(|e| e.to_string())?;

    let dot = grex.to_dot(&factory);
    print!("{dot}");

    std::fs::write(&cli.output, &dot)
        .map_err(|e| format!("writing {}: {e}", cli.output.display()))?;

    if cli.no_render {
        return Ok(());
    }

    let png = cli.output.with_extension("png");
    let status = Command::new("dot")
        .arg("-Tpng")
        .arg("-o")
        .arg(&png)
        .arg(&cli.output)
        .status()
        .map_err(|e| format!("running dot: {e}"))?;
    if !status.success() {
        return Err(format!("dot exited with {status}"));
    }
    Ok(())
}
