use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag};

use crate::node::{ListType, Node, NodeType};

/// A node of the parse tree assembled from pulldown-cmark's event stream.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarkdownNode {
    node_type: NodeType,
    literal: Option<String>,
    children: Vec<MarkdownNode>,
    list_type: ListType,
    list_start: Option<u64>,
    heading_level: u8,
    title: Option<String>,
    url: Option<String>,
}

impl MarkdownNode {
    pub fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            ..Default::default()
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(NodeType::Text).with_literal(text)
    }

    pub fn heading(level: u8) -> Self {
        Self {
            heading_level: level,
            ..Self::new(NodeType::Heading)
        }
    }

    pub fn bullet_list() -> Self {
        Self {
            list_type: ListType::Bullet,
            ..Self::new(NodeType::List)
        }
    }

    pub fn ordered_list(start: Option<u64>) -> Self {
        Self {
            list_type: ListType::Ordered,
            list_start: start,
            ..Self::new(NodeType::List)
        }
    }

    pub fn link(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(NodeType::Link).with_destination(url.into(), title.into())
    }

    pub fn image(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(NodeType::Image).with_destination(url.into(), title.into())
    }

    pub fn with_literal(mut self, literal: impl Into<String>) -> Self {
        self.literal = Some(literal.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = MarkdownNode>) -> Self {
        for child in children {
            attach(&mut self, child);
        }
        self
    }

    fn with_destination(mut self, url: String, title: String) -> Self {
        self.url = Some(url);
        self.title = (!title.is_empty()).then_some(title);
        self
    }
}

impl Node for MarkdownNode {
    fn node_type(&self) -> NodeType {
        self.node_type
    }

    fn literal(&self) -> Option<&str> {
        self.literal.as_deref()
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn list_type(&self) -> ListType {
        self.list_type
    }

    fn list_start(&self) -> Option<u64> {
        self.list_start
    }

    fn heading_level(&self) -> u8 {
        self.heading_level
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// Strip YAML frontmatter from the beginning of markdown content.
///
/// The opening and closing fences must be lines of exactly `---`, and the
/// line after the opening fence must not be blank. A rule followed by a blank
/// line is an ordinary thematic break.
fn strip_frontmatter(markdown: &str) -> &str {
    let mut lines = markdown.split_inclusive('\n');
    let Some(opening) = lines.next() else {
        return markdown;
    };
    if !is_fence(opening) {
        return markdown;
    }

    let mut offset = opening.len();
    for (index, line) in lines.enumerate() {
        offset += line.len();
        if index == 0 && line.trim().is_empty() {
            return markdown;
        }
        if is_fence(line) {
            return markdown[offset..].trim_start_matches(['\r', '\n']);
        }
    }
    // Never closed
    markdown
}

fn is_fence(line: &str) -> bool {
    line.trim_end_matches(['\r', '\n']) == "---"
}

/// Parse markdown text into a document node tree.
pub fn parse(markdown: &str) -> MarkdownNode {
    let markdown = strip_frontmatter(markdown);
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut state = ParseState::default();

    for event in parser {
        process_event(event, &mut state);
    }

    state.finish()
}

struct ParseState {
    // Open nodes; the document is always at the bottom
    stack: Vec<MarkdownNode>,
}

impl Default for ParseState {
    fn default() -> Self {
        Self {
            stack: vec![MarkdownNode::new(NodeType::Document)],
        }
    }
}

impl ParseState {
    fn open(&mut self, node: MarkdownNode) {
        self.stack.push(node);
    }

    fn close(&mut self) {
        if self.stack.len() < 2 {
            return;
        }
        if let Some(node) = self.stack.pop() {
            if node.node_type == NodeType::None {
                return;
            }
            self.attach(node);
        }
    }

    fn attach(&mut self, node: MarkdownNode) {
        if let Some(parent) = self.stack.last_mut() {
            attach(parent, node);
        }
    }

    /// Append raw text to an open code or HTML block. Returns false when the
    /// innermost open node does not collect literal text.
    fn push_literal(&mut self, text: &str) -> bool {
        match self.stack.last_mut() {
            Some(node) if matches!(node.node_type, NodeType::CodeBlock | NodeType::HtmlBlock) => {
                node.literal.get_or_insert_with(String::new).push_str(text);
                true
            }
            _ => false,
        }
    }

    fn finish(mut self) -> MarkdownNode {
        while self.stack.len() > 1 {
            self.close();
        }
        self.stack
            .pop()
            .unwrap_or_else(|| MarkdownNode::new(NodeType::Document))
    }
}

/// Add `child` to `parent` the way cmark shapes its tree: inline content of
/// a list item always lives in a paragraph, and adjacent text is one node.
fn attach(parent: &mut MarkdownNode, child: MarkdownNode) {
    if parent.node_type == NodeType::Item && child.node_type.is_inline() {
        let needs_paragraph = parent
            .children
            .last()
            .is_none_or(|last| last.node_type != NodeType::Paragraph);
        if needs_paragraph {
            parent.children.push(MarkdownNode::new(NodeType::Paragraph));
        }
        if let Some(paragraph) = parent.children.last_mut() {
            attach(paragraph, child);
        }
        return;
    }

    if child.node_type == NodeType::Text {
        if let Some(last) = parent.children.last_mut() {
            if last.node_type == NodeType::Text {
                let text = child.literal.unwrap_or_default();
                last.literal.get_or_insert_with(String::new).push_str(&text);
                return;
            }
        }
    }

    parent.children.push(child);
}

fn process_event(event: Event, state: &mut ParseState) {
    match event {
        Event::Start(tag) => state.open(node_for_tag(tag)),
        Event::End(_) => state.close(),

        Event::Text(text) => {
            if !state.push_literal(&text) {
                state.attach(MarkdownNode::text(text.into_string()));
            }
        }
        Event::Code(code) => {
            state.attach(MarkdownNode::new(NodeType::Code).with_literal(code.into_string()));
        }
        Event::Html(html) => {
            if !state.push_literal(&html) {
                state.attach(
                    MarkdownNode::new(NodeType::HtmlBlock).with_literal(html.into_string()),
                );
            }
        }
        Event::InlineHtml(html) => {
            state.attach(MarkdownNode::new(NodeType::HtmlInline).with_literal(html.into_string()));
        }

        Event::SoftBreak => state.attach(MarkdownNode::new(NodeType::SoftBreak)),
        Event::HardBreak => state.attach(MarkdownNode::new(NodeType::LineBreak)),
        Event::Rule => state.attach(MarkdownNode::new(NodeType::ThematicBreak)),

        other => log::debug!("ignoring unsupported markdown event {other:?}"),
    }
}

fn node_for_tag(tag: Tag) -> MarkdownNode {
    match tag {
        Tag::Paragraph => MarkdownNode::new(NodeType::Paragraph),
        Tag::Heading { level, .. } => MarkdownNode::heading(heading_level_to_u8(level)),
        Tag::BlockQuote(_) => MarkdownNode::new(NodeType::BlockQuote),
        Tag::CodeBlock(_) => MarkdownNode::new(NodeType::CodeBlock).with_literal(""),
        Tag::HtmlBlock => MarkdownNode::new(NodeType::HtmlBlock).with_literal(""),
        Tag::List(Some(start)) => MarkdownNode::ordered_list(Some(start)),
        Tag::List(None) => MarkdownNode::bullet_list(),
        Tag::Item => MarkdownNode::new(NodeType::Item),
        Tag::Emphasis => MarkdownNode::new(NodeType::Emph),
        Tag::Strong => MarkdownNode::new(NodeType::Strong),
        Tag::Link {
            dest_url, title, ..
        } => MarkdownNode::link(dest_url.into_string(), title.into_string()),
        Tag::Image {
            dest_url, title, ..
        } => MarkdownNode::image(dest_url.into_string(), title.into_string()),
        other => {
            // Content below an unsupported construct is dropped with it
            log::debug!("ignoring unsupported markdown construct {other:?}");
            MarkdownNode::new(NodeType::None)
        }
    }
}

fn heading_level_to_u8(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
