use std::fmt;

/// Numbering scheme of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered { start: u64 },
    Unordered,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListKind::Ordered { start } => write!(f, "ordered, start {start}"),
            ListKind::Unordered => f.write_str("unordered"),
        }
    }
}

/// Inline elements nested in the text flow of a block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text {
        text: String,
    },
    SoftBreak,
    LineBreak,
    Code {
        text: String,
    },
    Html {
        text: String,
    },
    Custom {
        literal: String,
    },
    Emphasis {
        children: Vec<Inline>,
    },
    Strong {
        children: Vec<Inline>,
    },
    Link {
        children: Vec<Inline>,
        title: Option<String>,
        url: Option<String>,
    },
    /// Images are never embedded; only their description is rendered.
    Image {
        children: Vec<Inline>,
        title: Option<String>,
        url: Option<String>,
    },
}

/// Block-level elements of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Document {
        children: Vec<Block>,
    },
    BlockQuote {
        items: Vec<Block>,
    },
    /// Every item is a [`Block::ListItem`].
    List {
        items: Vec<Block>,
        kind: ListKind,
    },
    ListItem {
        children: Vec<Block>,
        /// Marker text, computed once when the list is built.
        prefix: String,
    },
    CodeBlock {
        text: String,
    },
    HtmlBlock {
        text: String,
    },
    CustomBlock {
        literal: String,
    },
    Paragraph {
        children: Vec<Inline>,
    },
    Heading {
        children: Vec<Inline>,
        level: u8,
    },
    ThematicBreak,
}
