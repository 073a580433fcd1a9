use std::sync::LazyLock;

use regex::Regex;

/// The last `>`-delimited text run on a `majorheading` line that is closed by a tag.
static MAJOR_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^.*class="majorheading".*>([^>]+)</.+>"#).expect("major heading regex is valid")
});

/// `<project> <version> <rest...>`
static PROJECT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+)\s+(\S+)\s+(.+)").expect("title prefix regex is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTitle {
    pub title: String,
    pub short_title: String,
}

impl PageTitle {
    pub fn from_body(body: &str, default_title: &str) -> Self {
        let title = extract_title(body).unwrap_or_else(|| {
            log::warn!("no major heading found, use title `{default_title}`");
            default_title.to_string()
        });
        let short_title = short_title(&title).to_string();

        Self { title, short_title }
    }
}

pub fn extract_title(body: &str) -> Option<String> {
    body.lines()
        .find_map(|line| MAJOR_HEADING.captures(line))
        .map(|caps| caps[1].to_string())
}

/// `MP4v2 2.0.0 Building` -> `Building`
pub fn short_title(title: &str) -> &str {
    PROJECT_PREFIX
        .captures(title)
        .and_then(|caps| caps.get(3))
        .map_or(title, |m| m.as_str())
}
