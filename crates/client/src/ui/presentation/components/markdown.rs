//! Post body display.
//!
//! Rendering markdown to rich HTML is left to a dedicated renderer; this
//! component shows the source as escaped, whitespace-preserving text, with
//! ATX headings and blank-line paragraphs split out.

use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Block {
    Heading(usize, String),
    Paragraph(String),
}

fn blocks(source: &str) -> Vec<Block> {
    source
        .split("\n\n")
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            let level = chunk.chars().take_while(|c| *c == '#').count();
            match chunk[level..].strip_prefix(' ') {
                Some(text) if (1..=6).contains(&level) && !chunk.contains('\n') => {
                    Block::Heading(level, text.trim().to_string())
                }
                _ => Block::Paragraph(chunk.to_string()),
            }
        })
        .collect()
}

#[component]
pub fn MarkdownContent(content: String) -> Element {
    let blocks = blocks(&content);

    rsx! {
        div {
            class: "prose max-w-none",
            for block in blocks {
                {match block {
                    Block::Heading(1, text) => rsx! { h1 { class: "text-3xl font-bold mt-6 mb-3", "{text}" } },
                    Block::Heading(2, text) => rsx! { h2 { class: "text-2xl font-bold mt-5 mb-3", "{text}" } },
                    Block::Heading(_, text) => rsx! { h3 { class: "text-xl font-semibold mt-4 mb-2", "{text}" } },
                    Block::Paragraph(text) => rsx! { p { class: "mb-4 whitespace-pre-wrap", "{text}" } },
                }}
            }
        }
    }
}
