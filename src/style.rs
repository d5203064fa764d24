use crate::attributes::{Attributes, FontFamily, ListMarker, ParagraphStyle};
use crate::block::{Block, Inline};
use crate::config::Config;

/// Supplies the attributes the renderer lays over each element.
pub trait StyleResolver {
    fn block_attributes(&self, block: &Block) -> Attributes;

    fn inline_attributes(&self, inline: &Inline) -> Attributes;

    /// Attributes of list item markers.
    fn list_prefix_attributes(&self) -> Attributes;

    /// Plain body text.
    fn default_attributes(&self) -> Attributes;

    /// Bold and size of a heading; the heading's own block attributes are
    /// applied on top.
    fn heading_attributes(&self, level: u8) -> Attributes;

    /// Paragraph layout of a list whose widest prefix is `prefix_width`
    /// points wide.
    fn list_paragraph_style(&self, prefix_width: f32) -> ParagraphStyle;

    /// Indent of a list that is not nested in another one.
    fn base_list_indentation(&self) -> f32;
}

/// [`StyleResolver`] driven by a [`Config`].
#[derive(Debug)]
pub struct DefaultStyle {
    config: Config,
}

impl DefaultStyle {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn monospace(&self) -> Attributes {
        Attributes {
            font_family: Some(FontFamily::Monospace),
            font_size: Some(self.config.font.code_size),
            background: Some(self.config.colors.code_background),
            ..self.default_attributes()
        }
    }
}

impl Default for DefaultStyle {
    fn default() -> Self {
        Self::new(Config::compiled_default())
    }
}

impl StyleResolver for DefaultStyle {
    fn block_attributes(&self, block: &Block) -> Attributes {
        match block {
            Block::BlockQuote { .. } => Attributes {
                foreground: Some(self.config.colors.quote),
                ..Default::default()
            },
            Block::List { kind, .. } => Attributes {
                list: Some(ListMarker::from(*kind)),
                ..Default::default()
            },
            Block::CodeBlock { .. } | Block::HtmlBlock { .. } => self.monospace(),
            Block::CustomBlock { .. } => self.default_attributes(),
            Block::Heading { .. } => Attributes {
                foreground: Some(self.config.colors.heading),
                ..Default::default()
            },
            Block::Document { .. }
            | Block::ListItem { .. }
            | Block::Paragraph { .. }
            | Block::ThematicBreak => Attributes::default(),
        }
    }

    fn inline_attributes(&self, inline: &Inline) -> Attributes {
        match inline {
            Inline::Text { .. } | Inline::Custom { .. } => self.default_attributes(),
            Inline::Code { .. } | Inline::Html { .. } => self.monospace(),
            Inline::SoftBreak
            | Inline::LineBreak
            | Inline::Emphasis { .. }
            | Inline::Strong { .. }
            | Inline::Link { .. }
            | Inline::Image { .. } => Attributes::default(),
        }
    }

    fn list_prefix_attributes(&self) -> Attributes {
        Attributes {
            foreground: Some(self.config.colors.list_prefix),
            ..self.default_attributes()
        }
    }

    fn default_attributes(&self) -> Attributes {
        Attributes {
            font_family: Some(FontFamily::Body),
            font_size: Some(self.config.font.size),
            bold: Some(false),
            italic: Some(false),
            underline: Some(false),
            foreground: Some(self.config.colors.text),
            ..Default::default()
        }
    }

    fn heading_attributes(&self, level: u8) -> Attributes {
        Attributes {
            font_size: Some(self.config.headings.size_for_heading(level)),
            bold: Some(true),
            ..Default::default()
        }
    }

    fn list_paragraph_style(&self, prefix_width: f32) -> ParagraphStyle {
        let base = self.base_list_indentation();
        let content = base + prefix_width + self.config.lists.prefix_gap;
        ParagraphStyle {
            first_line_head_indent: base,
            head_indent: content,
            tab_stops: vec![content],
        }
    }

    fn base_list_indentation(&self) -> f32 {
        self.config.lists.indent
    }
}
