use std::sync::LazyLock;

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};

const THEME: &str = "base16-ocean.dark";

static HIGHLIGHTER: LazyLock<CodeHighlighter> = LazyLock::new(CodeHighlighter::new);

/// Syntax and theme sets are expensive to load, so one instance is shared.
pub struct CodeHighlighter {
    syntaxes: SyntaxSet,
    themes: ThemeSet,
}

impl CodeHighlighter {
    pub fn new() -> CodeHighlighter {
        CodeHighlighter {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            themes: ThemeSet::load_defaults(),
        }
    }

    fn theme(&self) -> Option<&Theme> {
        self.themes.themes.get(THEME)
    }

    fn block_html(&self, code: &str, syntax: &SyntaxReference) -> String {
        self.theme()
            .and_then(|theme| highlighted_html_for_string(code, &self.syntaxes, syntax, theme).ok())
            .unwrap_or_else(|| format!("<pre><code>{}</code></pre>", escape_html(code)))
    }

    /// Replace fenced and indented code blocks with highlighted HTML.
    ///
    /// Based on <https://gitlab.com/eguiraud/highlight-pulldown>.
    pub fn highlight<'a, It>(&self, events: It) -> Vec<Event<'a>>
    where
        It: Iterator<Item = Event<'a>>,
    {
        let plain = self.syntaxes.find_syntax_plain_text();
        let mut syntax = plain;
        let mut code: Option<String> = None;
        let mut out = Vec::new();

        for event in events {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    syntax = match kind {
                        CodeBlockKind::Fenced(lang) => {
                            self.syntaxes.find_syntax_by_token(&lang).unwrap_or(plain)
                        }
                        CodeBlockKind::Indented => plain,
                    };
                    code = Some(String::new());
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some(block) = code.take() {
                        out.push(Event::Html(CowStr::from(self.block_html(&block, syntax))));
                    }
                }
                Event::Text(t) => match code.as_mut() {
                    Some(block) => block.push_str(&t),
                    None => out.push(Event::Text(t)),
                },
                e => out.push(e),
            }
        }

        out
    }
}

impl Default for CodeHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Render a markdown document to HTML with highlighted code blocks.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::all());
    let events = HIGHLIGHTER.highlight(parser);
    let mut output = String::new();
    html::push_html(&mut output, events.into_iter());
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_headings_and_lists() {
        let html = render_markdown("# Title\n\n- one\n- two\n");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn test_code_blocks_are_highlighted() {
        let html = render_markdown("```rust\nfn main() {}\n```\n");
        assert!(html.contains("<pre style="));
        assert!(!html.contains("<code class=\"language-rust\">"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain_text() {
        let html = render_markdown("```nosuchlang\n<b>x</b>\n```\n");
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }
}
