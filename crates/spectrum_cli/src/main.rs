use clap::Parser;
use spectrum_core::{MoodState, SpectrumConfig};
use spectrum_engine::PresentationOrchestrator;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod command;
mod terminal;

use command::{Command, HELP};
use terminal::{render_stats, render_timeline, TerminalSink};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "spectrum.toml", env = "SPECTRUM_CONFIG")]
    config: String,

    /// Mood to start in (overrides config)
    #[arg(long)]
    initial_state: Option<MoodState>,

    /// Delay between image steps in milliseconds (overrides config)
    #[arg(long)]
    step_delay_ms: Option<u64>,

    /// Seed for thought selection (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_json);

    let mut config = SpectrumConfig::load_or_default(&args.config);
    if let Some(state) = args.initial_state {
        config.initial_state = state;
    }
    if let Some(ms) = args.step_delay_ms {
        config.transition.step_delay_ms = ms;
    }
    if let Some(seed) = args.seed {
        config.thoughts.seed = Some(seed);
    }

    info!("Initializing Dual Spectrum...");
    let orchestrator = Arc::new(PresentationOrchestrator::new(config, Arc::new(TerminalSink)));
    orchestrator.start().await?;
    let ticker = orchestrator.spawn_stats_ticker();

    println!("Dual Spectrum online. Type 'help' for commands, 'quit' to exit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", HELP),
            Command::Input(event) => match orchestrator.handle_input(event).await {
                Ok(true) => {}
                Ok(false) if event.audio_action().is_some() => {}
                Ok(false) => println!("(no change, still {})", orchestrator.current().await),
                Err(e) => error!("Switch failed: {}", e),
            },
            Command::Stats => {
                orchestrator.tick().await;
                println!("{}", render_stats(&orchestrator.durations().await));
            }
            Command::Timeline => {
                println!("{}", render_timeline(&orchestrator.timeline_samples().await));
            }
            Command::Export => {
                let samples = orchestrator.timeline_samples().await;
                println!("{}", serde_json::to_string_pretty(&samples)?);
            }
            Command::Clear => {
                orchestrator.clear_timeline().await;
                println!("Timeline cleared.");
            }
            Command::Reset => {
                orchestrator.reset_durations().await;
                println!("Statistics reset.");
            }
            Command::Share => println!("{}", orchestrator.share_summary().await),
        }
    }

    ticker.abort();
    orchestrator.shutdown().await;
    Ok(())
}
