use std::fmt::Write;

use crate::render::document::{Block, Document};

/// Serializes a document to HTML. All text and attribute values are escaped.
pub fn to_html(doc: &Document) -> String {
    let mut out = String::new();
    let _ = write!(out, "<div class=\"{}\">", escape(doc.class));
    for block in &doc.blocks {
        write_block(&mut out, block);
    }
    out.push_str("</div>");
    out
}

fn write_block(out: &mut String, block: &Block) {
    // Writing into a String never fails.
    let _ = match block {
        Block::Heading { level, text } => {
            let level = (*level).clamp(1, 6);
            write!(out, "<h{level}>{}</h{level}>", escape(text))
        }
        Block::Paragraph { class: Some(class), text } => {
            write!(out, "<p class=\"{}\">{}</p>", escape(class), escape(text))
        }
        Block::Paragraph { class: None, text } => write!(out, "<p>{}</p>", escape(text)),
        Block::List { items } => {
            out.push_str("<ul>");
            for item in items {
                let _ = write!(out, "<li>{}</li>", escape(item));
            }
            out.push_str("</ul>");
            Ok(())
        }
        Block::Section { class, blocks } => {
            let _ = write!(out, "<div class=\"{}\">", escape(class));
            for inner in blocks {
                write_block(out, inner);
            }
            out.push_str("</div>");
            Ok(())
        }
        Block::Bar { class, percent } => write!(
            out,
            "<div class=\"{}\"><div style=\"width: {}%\"></div></div>",
            escape(class),
            (*percent).min(100)
        ),
        Block::Link { class, href, text } => write!(
            out,
            "<a href=\"{}\" target=\"_blank\" class=\"{}\">{}</a>",
            escape(href),
            escape(class),
            escape(text)
        ),
    };
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
