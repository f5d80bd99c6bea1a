// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Create the destination directory (refusing one that already exists,
//    BEFORE any network request is made)
// 3. Run the harvest pipeline
// 4. Exit with proper code (0 = success, 1 = directory exists, 2 = error)
//
// Rust concepts used:
// - async/await: The pipeline awaits each network request in turn
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching on the run outcome
// =============================================================================

use std::io::ErrorKind;
use std::path::Path;

use anyhow::{anyhow, Result};
use clap::Parser;

use repo_harvester::cli::Cli;
use repo_harvester::fetch;
use repo_harvester::harvest::{harvest_archives, GITHUB_URL};

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            // {:#} renders the whole anyhow cause chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = all archives downloaded
//   Ok(1) = destination directory already exists
//   Err  = transport or filesystem failure somewhere in the run
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Create the destination directory up front. Attempting the create and
    // matching on AlreadyExists (instead of an exists() pre-check) leaves
    // no race window between check and create.
    println!("creating the {} directory...", cli.dir);
    if let Err(e) = std::fs::create_dir(&cli.dir) {
        if e.kind() == ErrorKind::AlreadyExists {
            // Refuse to write into a pre-existing directory; note that no
            // network request has been made at this point
            println!("the directory {} already exists", cli.dir);
            return Ok(1);
        }
        return Err(anyhow!("could not create directory {}: {}", cli.dir, e));
    }

    let client = fetch::build_client()?;
    harvest_archives(
        &client,
        GITHUB_URL,
        &cli.user_name,
        Path::new(&cli.dir),
        &mut std::io::stdout(),
    )
    .await?;

    Ok(0)
}
