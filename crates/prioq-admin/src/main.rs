use prioq_admin::{AdminConfig, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let args = Cli::parse_args();

    let mut config = AdminConfig::load_or_default(&args.config)?;

    // Override with CLI args
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }

    // Initialize tracing
    let json = config.logging.json;
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.logging.level.as_str().into()))
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| {
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
        }))
        .init();

    tracing::debug!(?config, "starting pq-admin");

    let output = args.command.execute(config.output.format)?;
    println!("{output}");
    Ok(())
}
