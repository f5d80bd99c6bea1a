// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// repo-harvester does exactly one thing, so there are no subcommands:
// just two required options, each with a short and a long form.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "repo-harvester",
    version = "0.1.0",
    about = "Download zip archives of all public repositories owned by a GitHub user",
    long_about = "repo-harvester walks a GitHub profile's repository listing pages, finds the \
                  download link on every repository page, and saves each repository as \
                  <repo-name>.zip in a fresh destination directory."
)]
pub struct Cli {
    /// The GitHub username whose repositories should be downloaded
    ///
    /// Both -u and --user-name work. String fields without a default
    /// are required by clap.
    #[arg(short = 'u', long = "user-name", value_name = "name")]
    pub user_name: String,

    /// The directory to download the archives to
    ///
    /// The directory must NOT already exist: the program creates it and
    /// refuses to run against a pre-existing one.
    #[arg(short = 'd', long = "dir", value_name = "dir")]
    pub dir: String,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why no Subcommand enum?
//    - Subcommands make sense when a tool has several distinct modes
//    - This tool has one mode, so a flat struct of options is simpler
//    - clap treats every non-Option field without a default as required
//
// 2. What does value_name do?
//    - It controls how the placeholder renders in --help output
//    - e.g. "-u, --user-name <name>" instead of "<USER_NAME>"
//
// 3. What does 'pub' mean?
//    - pub = public, meaning other modules can use this
//    - Without pub, items are private to this module
// -----------------------------------------------------------------------------
