//! Markdown-to-prose conversion.
//!
//! Policies are often published as Markdown. Only running prose is scored:
//! code, headings, tables, raw HTML and YAML frontmatter are dropped, while
//! link text, emphasis and list items are kept as plain words.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip Markdown formatting, returning plain prose text.
///
/// List items become sentences of their own: an item that does not already
/// end in `.`, `!` or `?` gets a period, so a bulleted list of data
/// categories is not scored as one endless sentence.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut result = String::with_capacity(text.len() / 2);
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Heading { .. } | Tag::Table(_)) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_) | TagEnd::Table) => {
                skip_depth = skip_depth.saturating_sub(1);
            }
            Event::Text(t) if skip_depth == 0 => result.push_str(&t),
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => result.push(' '),
            Event::End(TagEnd::Item) if skip_depth == 0 => {
                close_sentence(&mut result);
                result.push(' ');
            }
            Event::End(TagEnd::Paragraph) if skip_depth == 0 => result.push(' '),
            _ => {}
        }
    }

    result
}

fn close_sentence(prose: &mut String) {
    let trimmed_len = prose.trim_end().len();
    prose.truncate(trimmed_len);
    if prose
        .chars()
        .last()
        .is_some_and(|c| c.is_alphanumeric() || c == ')' || c == '"')
    {
        prose.push('.');
    }
}

/// Drop YAML frontmatter delimited by `---` lines.
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
