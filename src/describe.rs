//! Indented dump of the document model, one line per node.

use std::fmt;

use crate::block::{Block, Inline};

/// Describe `block` and its descendants, starting `indent` tabs deep.
pub fn describe_block(block: &Block, indent: usize) -> String {
    let mut out = String::new();
    write_block(block, indent, &mut out);
    out
}

pub fn describe_inline(inline: &Inline, indent: usize) -> String {
    let mut out = String::new();
    write_inline(inline, indent, &mut out);
    out
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe_block(self, 0))
    }
}

impl fmt::Display for Inline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe_inline(self, 0))
    }
}

const NO_BLOCKS: &[Block] = &[];
const NO_INLINES: &[Inline] = &[];

fn line(out: &mut String, indent: usize, summary: &str, has_children: bool) {
    out.push_str(&"\t".repeat(indent));
    out.push_str(summary);
    if has_children {
        out.push_str(" ->");
    }
    out.push('\n');
}

fn write_block(block: &Block, indent: usize, out: &mut String) {
    // Strings are printed with Debug so embedded newlines stay on one line
    let (summary, blocks, inlines): (String, &[Block], &[Inline]) = match block {
        Block::Document { children } => ("Document".to_string(), children.as_slice(), NO_INLINES),
        Block::BlockQuote { items } => ("BlockQuote".to_string(), items.as_slice(), NO_INLINES),
        Block::List { items, kind } => (format!("List {kind}"), items.as_slice(), NO_INLINES),
        Block::ListItem { children, prefix } => (
            format!("ListItem {prefix:?}"),
            children.as_slice(),
            NO_INLINES,
        ),
        Block::CodeBlock { text } => (format!("CodeBlock {text:?}"), NO_BLOCKS, NO_INLINES),
        Block::HtmlBlock { text } => (format!("HtmlBlock {text:?}"), NO_BLOCKS, NO_INLINES),
        Block::CustomBlock { literal } => {
            (format!("CustomBlock {literal:?}"), NO_BLOCKS, NO_INLINES)
        }
        Block::Paragraph { children } => ("Paragraph".to_string(), NO_BLOCKS, children.as_slice()),
        Block::Heading { children, level } => (
            format!("Heading level {level}"),
            NO_BLOCKS,
            children.as_slice(),
        ),
        Block::ThematicBreak => ("ThematicBreak".to_string(), NO_BLOCKS, NO_INLINES),
    };

    line(out, indent, &summary, !blocks.is_empty() || !inlines.is_empty());
    for child in blocks {
        write_block(child, indent + 1, out);
    }
    for child in inlines {
        write_inline(child, indent + 1, out);
    }
}

fn write_inline(inline: &Inline, indent: usize, out: &mut String) {
    let (summary, children): (String, &[Inline]) = match inline {
        Inline::Text { text } => (format!("Text {text:?}"), NO_INLINES),
        Inline::SoftBreak => ("SoftBreak".to_string(), NO_INLINES),
        Inline::LineBreak => ("LineBreak".to_string(), NO_INLINES),
        Inline::Code { text } => (format!("Code {text:?}"), NO_INLINES),
        Inline::Html { text } => (format!("Html {text:?}"), NO_INLINES),
        Inline::Custom { literal } => (format!("Custom {literal:?}"), NO_INLINES),
        Inline::Emphasis { children } => ("Emphasis".to_string(), children.as_slice()),
        Inline::Strong { children } => ("Strong".to_string(), children.as_slice()),
        Inline::Link {
            children,
            title,
            url,
        } => (destination("Link", title, url), children.as_slice()),
        Inline::Image {
            children,
            title,
            url,
        } => (destination("Image", title, url), children.as_slice()),
    };

    line(out, indent, &summary, !children.is_empty());
    for child in children {
        write_inline(child, indent + 1, out);
    }
}

fn destination(tag: &str, title: &Option<String>, url: &Option<String>) -> String {
    format!(
        "{tag} url {:?} title {:?}",
        url.as_deref().unwrap_or_default(),
        title.as_deref().unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parser;

    fn build(markdown: &str) -> Block {
        Block::from_node(&parser::parse(markdown))
    }

    fn block_count(block: &Block) -> usize {
        let (blocks, inlines): (&[Block], &[Inline]) = match block {
            Block::Document { children }
            | Block::BlockQuote { items: children }
            | Block::List { items: children, .. }
            | Block::ListItem { children, .. } => (children.as_slice(), NO_INLINES),
            Block::Paragraph { children } | Block::Heading { children, .. } => {
                (NO_BLOCKS, children.as_slice())
            }
            _ => (NO_BLOCKS, NO_INLINES),
        };
        1 + blocks.iter().map(block_count).sum::<usize>()
            + inlines.iter().map(inline_count).sum::<usize>()
    }

    fn inline_count(inline: &Inline) -> usize {
        match inline {
            Inline::Emphasis { children }
            | Inline::Strong { children }
            | Inline::Link { children, .. }
            | Inline::Image { children, .. } => {
                1 + children.iter().map(inline_count).sum::<usize>()
            }
            _ => 1,
        }
    }

    #[test]
    fn describes_document() {
        let doc = build("# Title\n\n2. *one*\n3. [two](https://example.com \"T\")\n\n---");
        let expected = "\
Document ->
\tHeading level 1 ->
\t\tText \"Title\"
\tList ordered, start 2 ->
\t\tListItem \"2.\\t\" ->
\t\t\tParagraph ->
\t\t\t\tEmphasis ->
\t\t\t\t\tText \"one\"
\t\tListItem \"3.\\t\" ->
\t\t\tParagraph ->
\t\t\t\tLink url \"https://example.com\" title \"T\" ->
\t\t\t\t\tText \"two\"
\tThematicBreak
";
        assert_eq!(describe_block(&doc, 0), expected);
    }

    #[test]
    fn one_line_per_node() {
        let doc = build(concat!(
            "# A\n\n> quote\n> more\n\n- a\n  - b\n\n",
            "```\nline 1\nline 2\n```\n\nx  \ny `z` ![i](p.png) <b>\n",
        ));
        let description = doc.to_string();
        assert_eq!(description.lines().count(), block_count(&doc));
    }

    #[test]
    fn indent_applies_to_every_line() {
        let inline = Inline::Strong {
            children: vec![Inline::Text {
                text: "x".to_string(),
            }],
        };
        assert_eq!(describe_inline(&inline, 2), "\t\tStrong ->\n\t\t\tText \"x\"\n");
    }

    #[test]
    fn empty_containers_have_no_arrow() {
        let doc = Block::Document {
            children: Vec::new(),
        };
        assert_eq!(doc.to_string(), "Document\n");
    }
}
