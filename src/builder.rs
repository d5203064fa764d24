//! Conversion from parser nodes into the document model.
//!
//! The parser is trusted to only hand out well-formed trees. A node type that
//! cannot appear where it was found is a bug in the parser layer, so these
//! conversions panic instead of returning an error.

use crate::block::{Block, Inline};
use crate::list;
use crate::node::{Node, NodeType};

impl Block {
    pub fn from_node<N: Node>(node: &N) -> Self {
        match node.node_type() {
            NodeType::Document => Block::Document {
                children: blocks(node),
            },
            NodeType::BlockQuote => Block::BlockQuote {
                items: blocks(node),
            },
            NodeType::List => {
                // Prefixes depend on the item's position, so items are built here
                // rather than through `from_node`.
                let kind = list::kind_of(node);
                let items = node
                    .children()
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        if item.node_type() != NodeType::Item {
                            panic!("{:?} node found as a direct child of a list", item.node_type());
                        }
                        Block::ListItem {
                            children: blocks(item),
                            prefix: list::prefix_for(kind, index),
                        }
                    })
                    .collect();
                Block::List { items, kind }
            }
            NodeType::Item => panic!("list item node found outside of a list"),
            NodeType::CodeBlock => Block::CodeBlock {
                text: literal(node),
            },
            NodeType::HtmlBlock => Block::HtmlBlock {
                text: literal(node),
            },
            NodeType::CustomBlock => Block::CustomBlock {
                literal: literal(node),
            },
            NodeType::Paragraph => Block::Paragraph {
                children: inlines(node),
            },
            NodeType::Heading => Block::Heading {
                children: inlines(node),
                level: node.heading_level(),
            },
            NodeType::ThematicBreak => Block::ThematicBreak,
            other => panic!("{other:?} node is not valid at block level"),
        }
    }
}

impl Inline {
    pub fn from_node<N: Node>(node: &N) -> Self {
        match node.node_type() {
            NodeType::Text => Inline::Text {
                text: literal(node),
            },
            NodeType::SoftBreak => Inline::SoftBreak,
            NodeType::LineBreak => Inline::LineBreak,
            NodeType::Code => Inline::Code {
                text: literal(node),
            },
            NodeType::HtmlInline => Inline::Html {
                text: literal(node),
            },
            NodeType::CustomInline => Inline::Custom {
                literal: literal(node),
            },
            NodeType::Emph => Inline::Emphasis {
                children: inlines(node),
            },
            NodeType::Strong => Inline::Strong {
                children: inlines(node),
            },
            NodeType::Link => Inline::Link {
                children: inlines(node),
                title: node.title().map(str::to_string),
                url: node.url().map(str::to_string),
            },
            NodeType::Image => Inline::Image {
                children: inlines(node),
                title: node.title().map(str::to_string),
                url: node.url().map(str::to_string),
            },
            other => panic!("{other:?} node is not valid at inline level"),
        }
    }
}

fn blocks<N: Node>(node: &N) -> Vec<Block> {
    node.children().iter().map(Block::from_node).collect()
}

fn inlines<N: Node>(node: &N) -> Vec<Inline> {
    node.children().iter().map(Inline::from_node).collect()
}

fn literal<N: Node>(node: &N) -> String {
    node.literal().unwrap_or_default().to_string()
}
