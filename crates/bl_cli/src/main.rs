use bl_core::classifier::{classify, describe, INSIGHT_DIMENSIONS};
use bl_core::{sample_articles, Error, Result, PRESET_LOCATORS};
use bl_inference::{create_session, SessionRun, SimulatorConfig, DEFAULT_STEP_DELAY};
use bl_store::view::{analyzer_view, operations_view, ProgressView};
use bl_store::{Action, DashboardState, Store};
use bl_web::AppState;
use clap::Parser;
use std::io::{self, Write};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, info};

mod logging;
mod render;

#[derive(Parser, Debug)]
#[command(author, version, about = "Simulated media-bias analysis dashboard", long_about = None)]
pub struct Cli {
    /// Pause between analysis stages (e.g. 800ms, 2s, 0s)
    #[arg(long, global = true, default_value = "800ms", value_parser = humantime::parse_duration)]
    step_delay: Duration,
    /// Seed for the score generator, for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run one simulated analysis and print the result
    Analyze {
        url: Option<String>,
        /// Use one of the preset locators instead of a URL (see `presets`)
        #[arg(long, conflicts_with = "url")]
        preset: Option<usize>,
    },
    /// Print the sample analyses
    Samples {
        #[arg(long)]
        json: bool,
    },
    /// Print the operations dashboard
    Dashboard,
    /// List the preset locators
    Presets,
    /// Classify a single score
    Classify {
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        score: u8,
    },
    /// Serve the dashboard over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

impl Cli {
    fn simulator_config(&self) -> SimulatorConfig {
        SimulatorConfig {
            step_delay: self.step_delay,
            seed: self.seed,
        }
    }
}

async fn analyze(config: &SimulatorConfig, url: Option<String>, preset: Option<usize>) -> Result<()> {
    let session = create_session(config, Store::new());
    let store = session.store();

    match (url, preset) {
        (_, Some(index)) if index >= PRESET_LOCATORS.len() => {
            return Err(Error::InvalidInput(format!(
                "preset {} does not exist, pick 0..{}",
                index,
                PRESET_LOCATORS.len() - 1
            )));
        }
        (_, Some(index)) => store.dispatch(Action::ChoosePreset(index)),
        (Some(url), None) => store.dispatch(Action::SetInput(url)),
        (None, None) => {}
    }

    let mut rx = store.subscribe();
    let mut stderr = io::stderr();
    let run = session.submit();
    tokio::pin!(run);

    let outcome = loop {
        tokio::select! {
            outcome = &mut run => break outcome,
            changed = rx.changed() => {
                if changed.is_err() {
                    break (&mut run).await;
                }
                let state = rx.borrow_and_update().clone();
                if let Some(stage) = state.stage.filter(|_| state.is_analyzing()) {
                    render::draw_progress(
                        &mut stderr,
                        &ProgressView {
                            message: stage.message(),
                            percent: state.progress,
                        },
                    )?;
                }
            }
        }
    };
    render::clear_progress(&mut stderr)?;

    match outcome {
        SessionRun::Completed { run_id, .. } => {
            debug!("Run {} finished", run_id);
            write!(io::stdout(), "{}", render::AnalyzerText(&analyzer_view(&store.snapshot())))?;
        }
        SessionRun::Ignored(reason) => debug!("Nothing to analyze ({:?})", reason),
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = cli.simulator_config();
    if config.step_delay != DEFAULT_STEP_DELAY {
        debug!("Step delay set to {}", humantime::format_duration(config.step_delay));
    }

    let mut stdout = io::stdout();
    match cli.command {
        Commands::Analyze { url, preset } => analyze(&config, url, preset).await?,
        Commands::Samples { json } => {
            if json {
                writeln!(stdout, "{}", serde_json::to_string_pretty(sample_articles())?)?;
            } else {
                write!(stdout, "{}", render::SamplesText(sample_articles()))?;
            }
        }
        Commands::Dashboard => {
            write!(stdout, "{}", render::OperationsText(&operations_view(&DashboardState::default())))?;
        }
        Commands::Presets => write!(stdout, "{}", render::PresetsText)?,
        Commands::Classify { score } => {
            let insights: Vec<_> = INSIGHT_DIMENSIONS
                .iter()
                .filter_map(|&d| describe(d, score))
                .collect();
            write!(
                stdout,
                "{}",
                render::ClassificationText {
                    classification: &classify(score),
                    insights: &insights,
                }
            )?;
        }
        Commands::Serve { addr } => {
            let session = create_session(&config, Store::new());
            info!("🧠 Simulator ready (step delay {})", humantime::format_duration(config.step_delay));
            bl_web::serve(addr, AppState::new(session)).await?;
        }
    }

    Ok(())
}
