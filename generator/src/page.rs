use crate::{config::Config, title::PageTitle};

pub const TITLE_TOKEN: &str = "__TITLE__";
pub const SHORT_TITLE_TOKEN: &str = "__SHORT_TITLE__";
pub const MENU_TOKEN: &str = "__MENU__";

/// Navigation items for the header template.
///
/// The index page gets a single active entry; every other page links back to
/// the index and marks itself active.
pub fn menu(short_title: &str, config: &Config) -> String {
    if short_title == config.index_title {
        format!(r#"<li class="active">{}</li>"#, config.index_title)
    } else {
        format!(
            "<li><a href=\"{}\">{}</a></li>\n<li class=\"active\">{}</li>",
            config.index_href, config.index_title, short_title
        )
    }
}

/// Fill the header template. Values are inserted verbatim.
pub fn render_header(template: &str, title: &PageTitle, menu: &str) -> String {
    template
        .replace(TITLE_TOKEN, &title.title)
        .replace(SHORT_TITLE_TOKEN, &title.short_title)
        .replace(MENU_TOKEN, menu)
}

/// The lines strictly between the first `<body>` line and the first `</body>`
/// line after it. Markers are only recognized at the start of a line.
///
/// With `strip_indent`, leading whitespace is trimmed from every line, so a
/// whitespace-only line loses its line ending and disappears entirely.
pub fn extract_body(body: &str, strip_indent: bool) -> String {
    let mut lines = body.split_inclusive('\n');

    if !lines.by_ref().any(is_body_open) {
        log::warn!("no <body> line found, body is empty");
        return String::new();
    }

    let mut out = String::with_capacity(body.len());
    for line in lines.take_while(|line| !is_body_close(line)) {
        if strip_indent {
            out.push_str(line.trim_start());
        } else {
            out.push_str(line);
        }
    }

    out
}

fn is_body_open(line: &str) -> bool {
    line.strip_prefix("<body")
        .is_some_and(|rest| rest.starts_with('>') || rest.starts_with(' '))
}

fn is_body_close(line: &str) -> bool {
    line.starts_with("</body>")
}
