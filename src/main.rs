use color_eyre::eyre::{bail, eyre, WrapErr};
use color_eyre::Result;
use tokio::sync::broadcast::error::RecvError;

use snapshot::cli::{self, CliCommand};
use snapshot::config::GeneratorConfig;
use snapshot::logging::init_tracing;
use snapshot::{ContentGenerator, UiState};

fn main() -> Result<()> {
    let (topic, strategy, verbose) = match cli::parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("{}", cli::version_line());
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", cli::USAGE);
            return Ok(());
        }
        CliCommand::Invalid(message) => {
            eprintln!("Error: {}\n\n{}", message, cli::USAGE);
            std::process::exit(2);
        }
        CliCommand::Generate {
            topic,
            strategy,
            verbose,
        } => (topic, strategy, verbose),
    };

    color_eyre::install()?;
    init_tracing(verbose)?;

    let mut config = GeneratorConfig::from_env().wrap_err("invalid configuration")?;
    if let Some(strategy) = strategy {
        config.strategy = strategy;
    }
    if !config.has_api_key() {
        eprintln!("Warning: no API key set (SNAPSHOT_API_KEY or GEMINI_API_KEY)");
    }
    tracing::debug!(?config, "Loaded configuration");

    let runtime = tokio::runtime::Runtime::new()?;
    let final_state = runtime.block_on(run(config, topic))?;

    match final_state {
        UiState::Success(items) => {
            println!();
            for line in cli::render_items(&items) {
                println!("{}", line);
            }
            Ok(())
        }
        UiState::Error(_) => std::process::exit(1),
        other => bail!("generation ended in non-terminal state '{}'", other.label()),
    }
}

/// Run one generation, printing every transition until a terminal state.
async fn run(config: GeneratorConfig, topic: String) -> Result<UiState> {
    let generator = ContentGenerator::from_config(&config)?;
    let mut transitions = generator.observer().subscribe();

    println!(
        "Generating snapshots for \"{}\" ({} strategy)",
        topic,
        generator.strategy()
    );
    let handle = generator
        .generate_content(topic)
        .ok_or_else(|| eyre!("no async runtime to run the generation on"))?;
    // The spawned task now holds the only writer; the stream closes when it ends.
    drop(generator);

    loop {
        match transitions.recv().await {
            Ok(transition) => {
                println!("{}", cli::transition_line(&transition));
                if transition.state.is_terminal() {
                    handle.await.wrap_err("generation task failed")?;
                    return Ok(transition.state);
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Missed state transitions");
            }
            Err(RecvError::Closed) => {
                handle.await.wrap_err("generation task failed")?;
                bail!("generation ended without publishing a result");
            }
        }
    }
}
