//! Markdown to HTML.

use pulldown_cmark::{Options, Parser, html};

/// Convert gateway markdown to HTML, trailing whitespace trimmed.
///
/// Tables, strikethrough and task lists are enabled.
///
/// # Examples
///
/// ```
/// use atelier_client::render::markdown_to_html;
///
/// assert_eq!(markdown_to_html("**hi**"), "<p><strong>hi</strong></p>");
/// ```
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out.truncate(out.trim_end().len());
    out
}
