//! IntelliSort - waste image classification
//!
//! Classifies a photo of waste into a material category and tells where it goes:
//! a one-shot CLI report, or an HTTP JSON service.

mod classification_service;
mod cli;
mod commands;
mod config;
mod error;
mod http_server;
mod image_classifier;
mod library;
mod report;
mod waste;

use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
