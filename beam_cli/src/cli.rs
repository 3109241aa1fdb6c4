use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "beam_cli")]
#[command(
    about = "Single-span beam analysis: reactions, diagrams, deflection and checks",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Analyze a beam described by a JSON parameter file")]
    Analyze {
        #[arg(help = "Path to the JSON parameters, or '-' for stdin")]
        input: PathBuf,

        #[arg(long, help = "Print the full JSON result instead of the text summary")]
        json: bool,

        #[arg(long, help = "Override the number of station intervals (10 to 1000)")]
        stations: Option<usize>,
    },

    #[command(about = "Print the JSON schema of the parameter object")]
    Schema,
}
