//! Adapters that turn upstream content into a single analyzable string.
//!
//! Search APIs return titles wrapped in highlight markup, comment feeds
//! return one body per comment, and documents arrive as markdown. Each
//! adapter here flattens one of those shapes into plain text for
//! [`crate::analyzer::analyze`].

use std::sync::LazyLock;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Regex for inline markup tags such as `<b>` and `</b>`.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

/// Which adapter to apply to raw input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SourceKind {
    /// Analyze the text as-is.
    #[default]
    Text,
    /// One search-result title per line, possibly carrying markup.
    Titles,
    /// One comment body per line.
    Comments,
    /// A markdown document.
    Markdown,
}

impl SourceKind {
    /// Apply this adapter to `input`.
    pub fn prepare(self, input: &str) -> String {
        match self {
            Self::Text => input.to_string(),
            Self::Titles => from_titles(input.lines()),
            Self::Comments => from_comments(input.lines()),
            Self::Markdown => strip_markdown(input),
        }
    }
}

/// Decode HTML entities in one title, then remove markup tags.
///
/// Decoding runs first, so escaped tags such as `&lt;b&gt;` are removed too.
pub fn clean_title(title: &str) -> String {
    let decoded = html_escape::decode_html_entities(title);
    TAG_PATTERN.replace_all(&decoded, "").into_owned()
}

/// Join search-result titles into one text, with markup removed.
#[tracing::instrument(skip_all)]
pub fn from_titles<I, S>(titles: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    titles
        .into_iter()
        .map(|t| clean_title(t.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join comment bodies into one text.
#[tracing::instrument(skip_all)]
pub fn from_comments<I, S>(comments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    comments
        .into_iter()
        .map(|c| c.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip markdown formatting, returning plain prose.
///
/// Drops code blocks, inline code, headings, and YAML front matter. Keeps
/// link text, list items, blockquotes, and emphasized text without markers.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_markdown(text: &str) -> String {
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut result = String::with_capacity(text.len() / 2);
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Heading { .. }) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_)) => {
                skip_depth = skip_depth.saturating_sub(1);
            }
            Event::Text(t) if skip_depth == 0 => {
                result.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => {
                result.push(' ');
            }
            // Table cells would otherwise run together
            Event::End(TagEnd::Paragraph | TagEnd::Item | TagEnd::TableCell)
                if skip_depth == 0 =>
            {
                result.push(' ');
            }
            _ => {}
        }
    }

    result
}

/// Slice off a leading `---` front matter block, if present.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };
    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder.strip_prefix('\n').unwrap_or(remainder)
}
