use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use dotjson::PathConfig;

#[derive(Parser)]
#[command(
    name = "dotjson",
    about = "Query and edit JSON documents by dot path",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// JSON document to read (defaults to stdin)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Character separating path segments
    #[arg(long, global = true, default_value_t = dotjson::DEFAULT_SEPARATOR)]
    pub separator: char,

    /// Create missing intermediate objects on put
    #[arg(long, global = true)]
    pub create_missing: bool,
}

impl Cli {
    pub fn path_config(&self) -> PathConfig {
        PathConfig {
            separator: self.separator,
            create_missing: self.create_missing,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the value at a path
    Get(GetArgs),
    /// Report whether a path holds a value
    Contains(ContainsArgs),
    /// Set the value at a path (null deletes)
    Put(PutArgs),
    /// Delete the value at a path. If an intermediate segment is missing or
    /// not an object, the last segment is deleted from the deepest object
    /// reached instead
    Remove(RemoveArgs),
    /// List the keys of the document or of the object at a path
    Keys(KeysArgs),
}

#[derive(Args)]
pub struct GetArgs {
    pub path: String,
}

#[derive(Args)]
pub struct ContainsArgs {
    pub path: String,
}

#[derive(Args)]
pub struct PutArgs {
    pub path: String,
    /// JSON value; anything that does not parse is stored as a string
    pub value: String,
    #[command(flatten)]
    pub write: WriteArgs,
}

#[derive(Args)]
pub struct RemoveArgs {
    pub path: String,
    #[command(flatten)]
    pub write: WriteArgs,
}

#[derive(Args)]
pub struct KeysArgs {
    pub path: Option<String>,
}

/// Where an edited document goes.
#[derive(Args)]
pub struct WriteArgs {
    /// Rewrite the input file
    #[arg(long, conflicts_with = "output")]
    pub in_place: bool,
    /// Write the edited document to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Indent the written document
    #[arg(long)]
    pub pretty: bool,
}
