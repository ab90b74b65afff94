//! CLI entry point.
//!
//! Thin caller over `playerpath-core`: formats resolver output and maps
//! "not found" to a non-zero exit code. All diagnostics go to stderr so
//! stdout stays scriptable.

use clap::{Parser, Subcommand};
use playerpath_core::players::{self, PlayerApp};
use playerpath_core::{find_iina_player, find_vlc_player, locate_app_bundle};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "playerpath",
    about = "Locate installed media player applications",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a bundle identifier to the installed application's path
    Locate {
        /// Reverse-DNS bundle identifier, e.g. org.videolan.vlc
        bundle_id: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Report the well-known external players (IINA, VLC)
    Players {
        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Locate { bundle_id, json } => locate(&bundle_id, json),
        Commands::Players { json } => report_players(json),
    }
}

fn locate(bundle_id: &str, json: bool) -> ExitCode {
    let path = locate_app_bundle(bundle_id);

    if json {
        println!(
            "{}",
            serde_json::json!({ "bundle_id": bundle_id, "path": &path })
        );
    } else {
        match &path {
            Some(p) => println!("{}", p.display()),
            None => eprintln!("{bundle_id}: not installed"),
        }
    }

    if path.is_some() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn report_players(json: bool) -> ExitCode {
    let results: Vec<(PlayerApp, Option<PathBuf>)> = vec![
        (players::IINA, find_iina_player()),
        (players::VLC, find_vlc_player()),
    ];

    if json {
        let entries: Vec<serde_json::Value> = results
            .iter()
            .map(|(app, path)| serde_json::json!({ "bundle_id": app.bundle_id, "path": path }))
            .collect();
        println!("{}", serde_json::Value::Array(entries));
    } else {
        for (app, path) in &results {
            match path {
                Some(p) => println!("{}\t{}", app.bundle_id, p.display()),
                None => println!("{}\tnot installed", app.bundle_id),
            }
        }
    }

    if results.iter().any(|(_, path)| path.is_some()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
