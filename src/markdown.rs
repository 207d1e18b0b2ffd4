//! Markdown rendering for description text lifted out of the page.
//!
//! Text content is normalized the way a markdown reader expects it:
//! - lines are trimmed and joined with spaces within a paragraph
//! - runs of blank lines become a single paragraph break
//! - whitespace inside a paragraph is collapsed
//!
//! The URL-corrected variant additionally rewrites relative `[label](target)` links so
//! they still resolve once the markdown leaves the page it came from.

use crate::page::PageMeta;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use url::Url;

static MARKDOWN_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]*)\]\(([^)\s]+)\)").expect("link pattern is valid"));

/// Renders text content as markdown
pub fn as_markdown(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    split_into_paragraphs(text)
        .iter()
        .map(|paragraph| normalize_whitespace(&paragraph.join(" ")))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Renders text content as markdown with relative links resolved against the page URL
pub fn as_url_corrected_markdown(text: &str, page: &PageMeta) -> String {
    let markdown = as_markdown(text);
    if !markdown.contains("](") {
        return markdown;
    }

    let base = match Url::parse(&page.url) {
        Ok(base) => base,
        Err(e) => {
            ::log::warn!("Cannot correct links against page URL {:?}: {}", page.url, e);
            return markdown;
        }
    };

    MARKDOWN_LINK
        .replace_all(&markdown, |caps: &Captures| {
            let target = &caps[2];
            match correct_link(&base, target) {
                Some(url) => format!("[{}]({})", &caps[1], url),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Absolute targets are left alone; relative ones are joined onto the base
fn correct_link(base: &Url, target: &str) -> Option<String> {
    if Url::parse(target).is_ok() {
        return None;
    }
    match base.join(target) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            ::log::debug!("Leaving unresolvable link {:?} as is: {}", target, e);
            None
        }
    }
}

/// Splits text into paragraphs based on empty lines
fn split_into_paragraphs(text: &str) -> Vec<Vec<&str>> {
    let mut paragraphs: Vec<Vec<&str>> = Vec::new();
    let mut current_paragraph: Vec<&str> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            if !current_paragraph.is_empty() {
                paragraphs.push(std::mem::take(&mut current_paragraph));
            }
        } else {
            current_paragraph.push(trimmed);
        }
    }

    if !current_paragraph.is_empty() {
        paragraphs.push(current_paragraph);
    }

    paragraphs
}

fn normalize_whitespace(segment: &str) -> String {
    segment.split_whitespace().collect::<Vec<_>>().join(" ")
}
