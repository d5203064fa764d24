/// Type tag of a parser node, mirroring the CommonMark node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeType {
    /// Unknown or uninitialised node. Never valid in a document.
    #[default]
    None,
    Document,
    BlockQuote,
    List,
    Item,
    CodeBlock,
    HtmlBlock,
    CustomBlock,
    Paragraph,
    Heading,
    ThematicBreak,
    Text,
    SoftBreak,
    LineBreak,
    Code,
    HtmlInline,
    CustomInline,
    Emph,
    Strong,
    Link,
    Image,
}

impl NodeType {
    pub fn is_inline(self) -> bool {
        matches!(
            self,
            NodeType::Text
                | NodeType::SoftBreak
                | NodeType::LineBreak
                | NodeType::Code
                | NodeType::HtmlInline
                | NodeType::CustomInline
                | NodeType::Emph
                | NodeType::Strong
                | NodeType::Link
                | NodeType::Image
        )
    }
}

/// Ordering metadata of a list node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListType {
    /// The node is not a list.
    #[default]
    None,
    Bullet,
    Ordered,
}

/// Read access to a node of the external parse tree.
///
/// The document model only ever talks to the parser through this trait, so
/// any CommonMark parser can be plugged in by implementing it for its own
/// node representation.
pub trait Node: Sized {
    fn node_type(&self) -> NodeType;

    /// Literal content of leaf nodes (text, code, html, custom).
    fn literal(&self) -> Option<&str>;

    fn children(&self) -> &[Self];

    fn list_type(&self) -> ListType;

    /// Start number of an ordered list, `None` when the node is not a list.
    fn list_start(&self) -> Option<u64>;

    /// Heading level, `0` when the node is not a heading.
    fn heading_level(&self) -> u8;

    fn title(&self) -> Option<&str>;

    fn url(&self) -> Option<&str>;
}
