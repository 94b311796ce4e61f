//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "intellisort")]
#[command(version)]
#[command(about = "Waste image classification with disposal instructions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// TOML configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// ONNX model path override
    #[arg(long, global = true)]
    pub model: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a single image and print a disposal report
    Classify {
        /// Path to image file. Prompts for one if omitted.
        image: Option<PathBuf>,
    },

    /// Run the HTTP classification service
    Serve {
        /// Address to bind, overrides config
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on, overrides config
        #[arg(long, short = 'p')]
        port: Option<u16>,
    },
}
