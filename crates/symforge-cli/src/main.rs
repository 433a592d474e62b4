//! Symforge CLI
//!
//! Feeds a Ghidra-exported header through the symbol pipeline and reports
//! what the compiler had to say about it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use symforge_core::{CompileOptions, Compiler, DEFAULT_COMPILER, DEFAULT_OUTPUT, Error};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Generate an object file with symbol information from a Ghidra-exported
/// header file, ready to be imported into gdb
#[derive(Parser)]
#[command(name = "symforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The header file path
    header: PathBuf,

    /// Additional arguments passed to the compiler, separated by a comma (,)
    #[arg(long, value_name = "ARGS", allow_hyphen_values = true)]
    gcc_args: Option<String>,

    /// The name of the output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Compiler used to produce the object file
    #[arg(long, default_value = DEFAULT_COMPILER)]
    compiler: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging on stderr; stdout carries the compiler report
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run(cli) {
        match err.downcast_ref::<Error>() {
            // The compiler ran and failed; its own exit status becomes ours
            Some(Error::CompilerFailed {
                status,
                command,
                stderr,
            }) => {
                report_compiler_trouble(command, stderr);
                std::process::exit(*status);
            }
            // The compiler never started; there is no status to propagate
            Some(Error::CompilerLaunch { command, source }) => {
                report_compiler_trouble(command, &source.to_string());
                std::process::exit(1);
            }
            _ => return Err(err),
        }
    }

    Ok(())
}

fn report_compiler_trouble(command: &str, detail: &str) {
    eprintln!("Something went wrong while running:");
    eprintln!(" > {}", command);
    eprintln!("{}", detail);
}

fn run(cli: Cli) -> Result<()> {
    if !cli.header.exists() {
        anyhow::bail!("header not found: {}", cli.header.display());
    }

    let options = CompileOptions {
        compiler: cli.compiler,
        output_path: cli.output,
        extra_args: split_extra_args(cli.gcc_args.as_deref()),
    };
    tracing::debug!("Writing object file to {}", options.output_path.display());

    let object = Compiler::new(options)
        .compile_header(&cli.header)
        .context("Failed to generate symbols")?;

    if let Some(warnings) = &object.warnings {
        println!("Compiled with some warnings:\n\n{}", warnings);
    }
    println!("generated {} successfully!", object.path.display());

    Ok(())
}

/// Split the comma-separated pass-through flags
fn split_extra_args(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(args) => args.split(',').map(|s| s.to_string()).collect(),
        None => Vec::new(),
    }
}
