use anyhow::Context as _;
use envconfig::Envconfig;
use mp4v2_stage_headers::{Config, stage};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

fn main() -> anyhow::Result<()> {
    tracing_setup();

    let config = Config::init_from_env().context("failed to get the config")?;

    tracing::info!(
        "stage headers from {} into {}",
        config.src_dir.display(),
        config.dst_dir.display()
    );
    let report = stage(&config).context("failed to stage headers")?;
    tracing::info!("staged {} files", report.copied.len());

    Ok(())
}

fn tracing_setup() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .inspect_err(|err| {
            tracing::warn!(
                error = ?err,
                "failed to read env RUST_LOG, fallback to default value"
            );
        })
        .unwrap_or_else(|_| "info".into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
