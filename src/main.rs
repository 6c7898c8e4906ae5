// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! autoupdate - release metadata query tool
//!
//! Reads a release data directory laid out as
//! `<root>/<version>/<release>/<artifact>` and prints the same JSON
//! envelopes the update server answers with:
//! - every known version, oldest first
//! - the latest version and its releases
//! - one version and its releases
//! - the artifact paths of one release

use std::error::Error;
use std::process::exit;

use clap::Parser;
use serde::Serialize;
use tracing::debug;

use autoupdate::logging::{init_tracing, level_for};
use autoupdate::service::Reply;
use autoupdate::{Config, Status, UpdatePaths, VersionRepository, VersionService};

mod cli;

use cli::{Cli, Command};

/// Exit status when the requested version or release does not exist
const EXIT_NOT_FOUND: i32 = 1;

/// Exit status when the release tree cannot be read
const EXIT_FAULT: i32 = 2;

/// Main application entry point
///
/// Parses command line arguments, runs the requested query and maps the
/// outcome to an exit status.
fn main() {
    let cli = Cli::parse();
    init_tracing(level_for(cli.verbose));

    let config = Config::new(&cli.root)
        .with_paths(UpdatePaths::new(&cli.api_base, &cli.update_data));
    debug!(root = %config.root.display(), "using release data directory");

    let service = VersionService::new(VersionRepository::new(config));

    match run(&service, &cli.command, cli.pretty) {
        Ok(Status::Ok) => {}
        Ok(Status::NotFound) => exit(EXIT_NOT_FOUND),
        Err(e) => {
            eprintln!("autoupdate: {e}");
            exit(EXIT_FAULT);
        }
    }
}

/// Dispatch a subcommand and print its response envelope
fn run(
    service: &VersionService,
    command: &Command,
    pretty: bool,
) -> Result<Status, Box<dyn Error>> {
    match command {
        Command::All => emit(service.all()?, pretty),
        Command::Latest => emit(service.latest()?, pretty),
        Command::Info { version } => emit(service.info(version)?, pretty),
        Command::UpdateUrls { version, release } => {
            emit(service.update_urls(version, release)?, pretty)
        }
    }
}

/// Print a response body as JSON on stdout
fn emit<T: Serialize>(reply: Reply<T>, pretty: bool) -> Result<Status, Box<dyn Error>> {
    let content = if pretty {
        serde_json::to_string_pretty(&reply.body)?
    } else {
        serde_json::to_string(&reply.body)?
    };
    println!("{content}");
    Ok(reply.status)
}
