// cranemover: supply-stack crane simulator

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cranemover::crane::{MovePolicy, Replay};
use cranemover::parser::{self, instructions};
use cranemover::pipeline;
use cranemover::ui::{terminal, App};
use cranemover::Error;

#[derive(Parser, Debug)]
#[command(name = "cranemover")]
#[command(about = "Rearrange crate stacks and report the crate on top of each", long_about = None)]
struct Cli {
    /// Input file with the diagram and procedure (`-` or absent reads stdin)
    input: Option<PathBuf>,

    /// Move policy: single (9000) or bulk (9001)
    #[arg(short, long, default_value = "single")]
    policy: MovePolicy,

    /// Print the answer for both policies, one per line
    #[arg(long, conflicts_with = "policy")]
    both: bool,

    /// Print the final diagram to stderr
    #[arg(long)]
    show: bool,

    /// Step through the run in the terminal viewer
    #[arg(long, conflicts_with_all = ["both", "show"])]
    tui: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

fn read_input(path: Option<&PathBuf>) -> Result<String, Error> {
    match path {
        Some(path) if path.as_os_str() != "-" => pipeline::load(path),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| Error::Input {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            Ok(text)
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let text = read_input(cli.input.as_ref())?;

    let policies: &[MovePolicy] = if cli.both {
        &MovePolicy::ALL
    } else {
        std::slice::from_ref(&cli.policy)
    };

    for &policy in policies {
        let solution = pipeline::solve(&text, policy)?;
        info!(%policy, moves = solution.moves_applied, "solved");
        if cli.show {
            eprintln!("Final stacks ({} policy):", policy);
            eprint!("{}", solution.yard);
        }
        println!("{}", solution.message);
    }

    Ok(())
}

fn run_viewer(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(cli.input.as_ref())?;
    let manifest = parser::parse(&text).map_err(Error::from)?;
    instructions::validate(&manifest.moves, manifest.yard.len()).map_err(Error::from)?;
    let replay = Replay::new(manifest.yard, manifest.moves, cli.policy);

    // Restored when `_session` drops, on every return path
    let _session = terminal::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(replay);
    app.run(&mut terminal)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.tui {
        // Log lines would tear through the alternate screen
        return match run_viewer(&cli) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                match err.downcast_ref::<Error>() {
                    Some(e) => eprintln!("error: {} failed: {}", e.stage(), e),
                    None => eprintln!("error: terminal failure: {}", err),
                }
                ExitCode::FAILURE
            }
        };
    }

    init_logging(cli.log_level());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {} failed: {}", err.stage(), err);
            ExitCode::FAILURE
        }
    }
}
