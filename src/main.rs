use std::io;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser as ClapParser;
use color_eyre::eyre::Result;
use tracing::error;

use hooklog::app::{App, Outcome};
use hooklog::config::Config;
use hooklog::events::EventKind;
use hooklog::ingest::read_input;
use hooklog::logging::init_logging;

/// Exit status for every handled path. Hooks must never block the host.
const EXIT_OK: i32 = 0;

#[derive(ClapParser, Debug)]
#[command(
    name = "hooklog",
    version,
    about = "Append Claude Code hook events to a markdown log",
    long_about = "Reads one hook payload as JSON on stdin, works out which lifecycle event it \
                  describes, and appends a readable entry to <project>/log.md."
)]
struct Cli {
    /// Project root; the log is written here. Defaults to the current directory.
    #[arg(long, env = "CLAUDE_PROJECT_DIR", value_name = "DIR")]
    project_dir: Option<PathBuf>,

    /// Log file path, relative to the project root unless absolute.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log the payload as this event kind instead of inferring it
    /// (e.g. SubagentStop, which cannot be told apart from Stop by shape).
    #[arg(long, value_name = "KIND", value_parser = parse_event_kind)]
    event: Option<EventKind>,
}

fn parse_event_kind(s: &str) -> std::result::Result<EventKind, String> {
    s.parse::<EventKind>().map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            std::process::exit(EXIT_OK);
        }
        Err(err) => {
            error!("Invalid arguments: {}", err.render());
            std::process::exit(EXIT_OK);
        }
    };

    // The only failure surfaced through the exit status.
    let input = read_input(io::stdin().lock())?;

    if let Err(err) = run(&cli, &input) {
        error!("Error in logger: {err:#}");
    }
    Ok(())
}

fn run(cli: &Cli, input: &str) -> Result<Outcome> {
    let config = Config::resolve(cli.project_dir.clone(), cli.log_file.clone())?;
    App::new(&config)
        .with_event_override(cli.event)
        .process(input)
}
