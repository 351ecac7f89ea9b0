mod platform;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use slidecast_core::ResultView;

use platform::{AppArgs, LogDestination};

#[derive(Parser, Debug)]
#[command(
    name = "slidecast",
    about = "Submit a document and a question to the presentation service"
)]
struct Cli {
    /// Document to upload.
    file: PathBuf,

    /// Question to ask about the document.
    #[arg(short, long, default_value = "")]
    question: String,

    /// Base address of the generation service.
    #[arg(long)]
    base_url: Option<String>,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    log: LogDestination,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let args = AppArgs {
        file: cli.file,
        question: cli.question,
        base_url: cli.base_url,
        log: cli.log,
    };

    match platform::run_app(args) {
        Ok(view) => match view.result {
            ResultView::Ready { .. } => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        },
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
