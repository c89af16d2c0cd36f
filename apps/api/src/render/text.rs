use crate::render::document::{Block, Document};

/// Flattens a document to plain text, one block per line. Bars are dropped.
pub fn to_text(doc: &Document) -> String {
    let mut lines = Vec::new();
    for block in &doc.blocks {
        collect_lines(block, &mut lines);
    }
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn collect_lines(block: &Block, lines: &mut Vec<String>) {
    match block {
        Block::Heading { level, text } => {
            // Top-level headings start a new paragraph.
            if *level <= 2 && !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(text.clone());
        }
        Block::Paragraph { text, .. } => {
            if !text.is_empty() {
                lines.push(text.clone());
            }
        }
        Block::List { items } => lines.extend(items.iter().map(|i| format!("- {i}"))),
        Block::Section { blocks, .. } => {
            for inner in blocks {
                collect_lines(inner, lines);
            }
        }
        Block::Bar { .. } => {}
        Block::Link { href, text, .. } => lines.push(format!("{text}: {href}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_layout() {
        let doc = Document {
            class: "resume-template",
            blocks: vec![
                Block::heading(1, "Ada Lovelace"),
                Block::paragraph("ada@example.com"),
                Block::heading(2, "Skills"),
                Block::List {
                    items: vec!["Math".to_string(), "Engines".to_string()],
                },
                Block::Bar {
                    class: "score-bar",
                    percent: 40,
                },
            ],
        };
        assert_eq!(
            to_text(&doc),
            "Ada Lovelace\nada@example.com\n\nSkills\n- Math\n- Engines\n"
        );
    }

    #[test]
    fn test_empty_paragraphs_are_skipped() {
        let doc = Document {
            class: "x",
            blocks: vec![Block::paragraph(""), Block::paragraph("kept")],
        };
        assert_eq!(to_text(&doc), "kept\n");
    }
}
