//! Typed display tree. Builders in this module produce a `Document`; the `html`
//! and `text` serializers turn it into markup or export content.

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub class: &'static str,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading {
        level: u8,
        text: String,
    },
    Paragraph {
        class: Option<&'static str>,
        text: String,
    },
    List {
        items: Vec<String>,
    },
    /// Grouping container, rendered as a `div` with the given class.
    Section {
        class: &'static str,
        blocks: Vec<Block>,
    },
    /// Horizontal progress bar filled to `percent`.
    Bar {
        class: &'static str,
        percent: u8,
    },
    Link {
        class: &'static str,
        href: String,
        text: String,
    },
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph {
            class: None,
            text: text.into(),
        }
    }

    pub fn classed(class: &'static str, text: impl Into<String>) -> Self {
        Block::Paragraph {
            class: Some(class),
            text: text.into(),
        }
    }

    pub fn section(class: &'static str, blocks: Vec<Block>) -> Self {
        Block::Section { class, blocks }
    }
}
