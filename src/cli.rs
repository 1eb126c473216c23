use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Server the list commands talk to
    #[arg(long, global = true, value_name = "URL")]
    pub server: Option<String>,
    /// Log debug records from this crate
    #[arg(long, global = true)]
    pub debug: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the list over HTTP
    Serve {
        #[arg(long, value_name = "ADDR")]
        listen: Option<SocketAddr>,
        /// Directory holding todos.json and names.json
        #[arg(long, value_name = "DIR")]
        data_dir: Option<PathBuf>,
        /// Front-end assets to serve for unrouted paths
        #[arg(long, value_name = "DIR")]
        static_dir: Option<PathBuf>,
    },
    /// Show the to-do list
    List,
    /// Add a to-do
    Add {
        #[arg(value_name = "OWNER")]
        owner: String,
        #[arg(value_name = "TODO")]
        todo: String,
    },
    /// Check or uncheck a to-do
    Toggle {
        #[arg(value_name = "ID")]
        id: Uuid,
    },
    /// Set the priority of a to-do (1, 2 or 3)
    Prio {
        #[arg(value_name = "ID")]
        id: Uuid,
        #[arg(value_name = "PRIO")]
        prio: String,
    },
    /// Delete a to-do
    Remove {
        #[arg(value_name = "ID")]
        id: Uuid,
    },
    /// Greet someone and add them to the name list
    Hello {
        #[arg(value_name = "NAME")]
        name: String,
        #[arg(long)]
        last_name: Option<String>,
    },
    /// Show the name list
    Names,
    /// Delete an entry from the name list
    Forget {
        #[arg(value_name = "ID")]
        id: Uuid,
    },
}
