//! Command-line interface for minerid-extensions.
//!
//! Builds extensions from captured job data, or recomputes a Merkle root
//! from a coinbase hash and branch, printing JSON to stdout.

use std::env;
use std::fs;

use anyhow::{Context, Result};

use minerid_extensions::tracing::prelude::*;
use minerid_extensions::{AssemblerConfig, JobData, assemble, merkle};

fn main() -> Result<()> {
    minerid_extensions::tracing::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        usage();
        std::process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "assemble" => cmd_assemble(&args[2..])?,
        "merkle-root" => cmd_merkle_root(&args[2..])?,
        _ => {
            eprintln!("Unknown command: {}", command);
            eprintln!("Run without arguments to see usage.");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn usage() {
    eprintln!("Usage: minerid-ext <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  assemble <job.json> [coinbase-hex]");
    eprintln!("      Print the extensions object for the given job data");
    eprintln!("      (coinbase-hex defaults to the job's coinbase2)");
    eprintln!("  merkle-root <coinbase-hash> [branch...]");
    eprintln!("      Recompute a Merkle root (display-order hex)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MINERID_POLICY_NUMBERS    exact | float (default: exact)");
    eprintln!("  RUST_LOG                  log filter (default: info)");
}

/// Print the extensions built from a job data file.
fn cmd_assemble(args: &[String]) -> Result<()> {
    let path = args.first().context("missing job data path")?;
    let coinbase = args.get(1).map(String::as_str);

    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    let job: JobData =
        serde_json::from_str(&text).with_context(|| format!("parsing job data in {}", path))?;

    let config = AssemblerConfig::from_env();
    let doc = assemble(coinbase, &job, &config);

    if doc.is_empty() {
        info!("No extensions apply to this job data");
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

/// Print the Merkle root for a coinbase hash and branch.
fn cmd_merkle_root(args: &[String]) -> Result<()> {
    let (leaf, branch) = args.split_first().context("missing coinbase hash")?;
    let root = merkle::recombine_display_hex(leaf, branch).context("invalid digest")?;
    println!("{}", root);
    Ok(())
}
