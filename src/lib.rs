mod attributes;
mod block;
mod builder;
mod config;
mod describe;
mod link;
mod list;
mod node;
mod parser;
mod render;
mod style;
mod text;

pub use attributes::{Attributes, Color, ColorError, FontFamily, ListMarker, ParagraphStyle};
pub use block::{Block, Inline, ListKind};
pub use config::{Config, ConfigError};
pub use describe::{describe_block, describe_inline};
pub use link::{SchemeValidator, UrlValidator};
pub use list::{kind_of, prefix_for};
pub use node::{ListType, Node, NodeType};
pub use parser::MarkdownNode;
pub use render::Renderer;
pub use style::{DefaultStyle, StyleResolver};
pub use text::{Run, StyledText, text_width};

/// Parse markdown text into the document model.
pub fn parse(markdown: &str) -> Block {
    Block::from_node(&parser::parse(markdown))
}

/// Convert markdown to styled text using the default config.
pub fn markdown_to_styled(markdown: &str) -> StyledText {
    markdown_to_styled_with_config(markdown, Config::compiled_default())
}

/// Convert markdown to styled text with a custom config.
pub fn markdown_to_styled_with_config(markdown: &str, config: Config) -> StyledText {
    let document = parse(markdown);
    let urls = SchemeValidator::new(&config.links.schemes);
    let style = DefaultStyle::new(config);
    Renderer::new(&style, &urls)
        .render_block(&document)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn markdown_to_styled_text() {
        let markdown = "# Notes\n\n- one\n- two\n\n---\n\nSee [docs](https://example.com).";
        let styled = markdown_to_styled(markdown);
        assert_eq!(styled.to_string(), "Notes\n•\tone\n•\ttwo\nSee docs.\n");
    }

    #[test]
    fn config_controls_link_schemes() {
        let config: Config = toml::from_str("[links]\nschemes = [\"ftp\"]\n").unwrap();
        let markdown = "[a](https://example.com) [b](ftp://example.com)";
        let styled = markdown_to_styled_with_config(markdown, config);
        assert_eq!(styled.to_string(), "[a](https://example.com) b\n");
    }

    #[test]
    fn empty_document_renders_empty_text() {
        assert!(markdown_to_styled("").is_empty());
    }
}
