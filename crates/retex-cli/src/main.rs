mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "retex",
    version,
    about = "Convert resumes between structured JSON and LaTeX, and import them from PDFs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a resume document (JSON) to a standalone LaTeX file
    Generate {
        /// Path to resume document JSON
        input_file: PathBuf,

        /// Write LaTeX to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Import a resume from LaTeX source, a PDF, or plain text
    Import {
        /// Path to .tex, .pdf or .txt file
        input_file: PathBuf,

        /// Input format: auto (by extension), latex, pdf or text
        #[arg(short, long, default_value = "auto")]
        format: String,

        /// Output format: json (default) or summary
        #[arg(short, long, default_value = "json")]
        output: String,

        /// Write the recovered document to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Print the built-in starter document
    Template {
        /// Write the document to a JSON file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { input_file, out } => commands::generate::run(input_file, out),
        Commands::Import {
            input_file,
            format,
            output,
            out,
        } => commands::import::run(input_file, &format, &output, out),
        Commands::Template { out } => commands::template::run(out),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
