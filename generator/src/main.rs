use std::{
    fs,
    io::{self, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::Parser;
use mp4v2_htmlcombine::{Combiner, Config, Sources};

/// Wrap the body of a generated documentation page in the site header and footer.
#[derive(Parser)]
#[command(name = "mp4v2-htmlcombine")]
struct Cli {
    /// Header template file
    #[arg(long)]
    header: PathBuf,

    /// Footer file
    #[arg(long)]
    footer: PathBuf,

    /// File to extract contents of body from
    #[arg(long)]
    body: PathBuf,

    /// YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the page here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Strip leading whitespace from body lines
    #[arg(long)]
    strip_indent: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(level_filter(cli.verbose))
        .parse_default_env()
        .init();

    let mut config = match &cli.config {
        Some(path) => {
            log::info!("read config from: {}", path.display());
            Config::from_file(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?
        }
        None => Config::default(),
    };
    config.strip_indent |= cli.strip_indent;

    let sources = Sources {
        header: cli.header,
        footer: cli.footer,
        body: cli.body,
    };

    // nothing touches the output until the whole page is assembled
    let mut page = Vec::new();
    Combiner::new(config).combine(&sources, &mut page)?;

    match &cli.output {
        Some(path) => fs::write(path, &page)
            .with_context(|| format!("failed to write file: {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(&page)
                .and_then(|()| stdout.flush())
                .context("failed to write page")?;
        }
    }

    Ok(())
}

fn level_filter(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_filter(0), log::LevelFilter::Warn);
        assert_eq!(level_filter(1), log::LevelFilter::Info);
        assert_eq!(level_filter(2), log::LevelFilter::Debug);
        assert_eq!(level_filter(3), log::LevelFilter::Trace);
        assert_eq!(level_filter(u8::MAX), log::LevelFilter::Trace);
    }
}
