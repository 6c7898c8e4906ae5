// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
// CLI argument definitions for autoupdate
//
// Separated from main.rs so that build.rs can include this file
// to generate the man page via clap_mangen.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// CLI argument parser
#[derive(Parser)]
#[command(
    name = "autoupdate",
    version,
    about = "Query release metadata from an auto-update data directory"
)]
pub struct Cli {
    /// Directory holding one folder per version
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        env = "AUTOUPDATE_ROOT",
        default_value = "release_data",
        global = true
    )]
    pub root: PathBuf,

    /// Prefix for exposed artifact paths
    #[arg(
        long = "api-base",
        value_name = "PATH",
        env = "AUTOUPDATE_API_BASE",
        default_value = "/api",
        global = true
    )]
    pub api_base: String,

    /// Segment the artifact tree is served under
    #[arg(
        long = "update-data",
        value_name = "PATH",
        env = "AUTOUPDATE_UPDATE_DATA",
        default_value = "/update_data",
        global = true
    )]
    pub update_data: String,

    /// Indent JSON output
    #[arg(short, long, global = true)]
    pub pretty: bool,

    /// Make the operation more talkative
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    /// List every version, oldest first
    All,
    /// Show the highest version and its releases
    Latest,
    /// Show one version and its releases
    Info {
        /// Version to look up
        #[arg(value_name = "VERSION")]
        version: String,
    },
    /// List the artifact paths of one release
    UpdateUrls {
        /// Version to look up
        #[arg(value_name = "VERSION")]
        version: String,
        /// Release platform under that version
        #[arg(value_name = "RELEASE")]
        release: String,
    },
}
