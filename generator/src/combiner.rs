use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{config::Config, page, title::PageTitle};

/// Input files of one documentation page.
#[derive(Debug, Clone)]
pub struct Sources {
    /// Template with `__TITLE__`, `__SHORT_TITLE__` and `__MENU__` tokens.
    pub header: PathBuf,
    /// Copied as is.
    pub footer: PathBuf,
    /// Generated page the title and `<body>` content come from.
    pub body: PathBuf,
}

pub struct Combiner {
    config: Config,
}

impl Combiner {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn combine(&self, sources: &Sources, out: &mut impl Write) -> anyhow::Result<()> {
        let header = read_file(&sources.header)?;
        let footer = read_file(&sources.footer)?;
        let body = read_file(&sources.body)?;

        let title = PageTitle::from_body(&body, &self.config.default_title);
        log::info!("title: {}", title.title);
        log::debug!("short title: {}", title.short_title);

        let menu = page::menu(&title.short_title, &self.config);
        let header = page::render_header(&header, &title, &menu);
        let body = page::extract_body(&body, self.config.strip_indent);
        log::debug!("body: {} bytes", body.len());

        out.write_all(header.as_bytes())
            .and_then(|()| out.write_all(body.as_bytes()))
            .and_then(|()| out.write_all(footer.as_bytes()))
            .and_then(|()| out.flush())
            .context("failed to write page")?;

        Ok(())
    }
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    log::info!("read: {}", path.display());
    fs::read_to_string(path).with_context(|| format!("failed to read file: {}", path.display()))
}
