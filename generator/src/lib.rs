use std::io::Write;

mod combiner;
mod config;
mod page;
mod title;

pub use combiner::{Combiner, Sources};
pub use config::Config;
pub use page::{extract_body, menu, render_header};
pub use title::{PageTitle, extract_title, short_title};

pub fn combine(sources: &Sources, config: Config, out: &mut impl Write) -> anyhow::Result<()> {
    Combiner::new(config).combine(sources, out)
}
