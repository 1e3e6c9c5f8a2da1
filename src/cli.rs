//! Command line interface

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "todoterm", about = "A terminal todo-list client for REST task endpoints", version)]
pub struct Cli {
    /// Read configuration from this file instead of the default locations
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write a default configuration file to PATH and exit
    #[arg(long, value_name = "PATH")]
    pub generate_config: Option<PathBuf>,
}
