//! Assembly-subset interpreter CLI.
//!
//! This binary is the driver around the `rvi-core` engine. It performs:
//! 1. **Sourcing:** Reads an assembly text file from disk.
//! 2. **Execution:** Runs the engine over the file's lines to completion.
//! 3. **Reporting:** Prints the final value of the result register (default
//!    `a0`) and, on request, a dump of the whole register file.
//!
//! Unknown-opcode warnings are emitted through `tracing`; control them with
//! `RUST_LOG` (e.g. `RUST_LOG=rvi_core=error` to silence them).

use clap::Parser;
use std::path::{Path, PathBuf};
use std::{fs, process};
use tracing_subscriber::EnvFilter;

use rvi_core::{Config, Machine};

#[derive(Parser, Debug)]
#[command(
    name = "rvi",
    version,
    about = "Run a register-based assembly subset program",
    long_about = "Execute a text file of assembly instructions (li, mv, add, sub, rem, sw, lw) \
                  sequentially and report the final value of the result register.\n\nExamples:\n  \
                  rvi hello.asm\n  rvi hello.asm --dump\n  rvi hello.asm --result t0 --config cfg.json"
)]
struct Cli {
    /// Assembly source file to execute.
    file: PathBuf,

    /// JSON configuration file (memory layout, addi behaviour).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Register whose final value is reported.
    #[arg(long, default_value = "a0")]
    result: String,

    /// Dump the full register file after execution.
    #[arg(long)]
    dump: bool,
}

/// Reads a text file from disk, exiting the process if it cannot be read.
fn read_source(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: Could not read file '{}': {}", path.display(), e);
        process::exit(1);
    })
}

/// Loads the configuration, exiting the process on a malformed file.
fn load_config(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    serde_json::from_str(&read_source(path)).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: Invalid config '{}': {}", path.display(), e);
        process::exit(1);
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());
    let source = read_source(&cli.file);

    let mut machine = Machine::new(&config);
    if let Err(fault) = machine.run_source(&source) {
        eprintln!("[!] FATAL: {fault}");
        process::exit(1);
    }

    if cli.dump {
        machine.regs.dump();
    }

    match machine.snapshot(&cli.result) {
        Ok(val) => println!("Final value of {}: {}", cli.result, val),
        Err(fault) => {
            eprintln!("[!] FATAL: {fault}");
            process::exit(1);
        }
    }
}
