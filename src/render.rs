use crate::attributes::Attributes;
use crate::block::{Block, Inline};
use crate::link::UrlValidator;
use crate::style::StyleResolver;
use crate::text::StyledText;

/// Widest ordered prefix a short list is laid out for, so lists of up to 99
/// items share one alignment.
const BASELINE_PREFIX: &str = "99.";

/// Renders the document model into [`StyledText`].
pub struct Renderer<'a, S: ?Sized, V: ?Sized> {
    style: &'a S,
    urls: &'a V,
}

impl<'a, S, V> Renderer<'a, S, V>
where
    S: StyleResolver + ?Sized,
    V: UrlValidator + ?Sized,
{
    pub fn new(style: &'a S, urls: &'a V) -> Self {
        Self { style, urls }
    }

    /// Render a block. Thematic breaks produce no text and yield `None`.
    pub fn render_block(&self, block: &Block) -> Option<StyledText> {
        let attributes = self.style.block_attributes(block);
        let text = match block {
            Block::Document { children } | Block::BlockQuote { items: children } => {
                let mut text = self.blocks(children);
                text.apply_all(&attributes);
                text
            }
            Block::List { items, .. } => self.render_list(items, &attributes),
            Block::ListItem { children, prefix } => {
                let mut text = self.blocks(children);
                text.apply_all(&attributes);
                text.prepend(StyledText::styled(
                    prefix.as_str(),
                    self.style.list_prefix_attributes(),
                ));
                text
            }
            Block::CodeBlock { text } | Block::HtmlBlock { text } => {
                StyledText::styled(text.as_str(), attributes)
            }
            Block::CustomBlock { literal } => StyledText::styled(literal.as_str(), attributes),
            Block::Paragraph { children } => {
                let mut text = self.inlines(children);
                text.append(StyledText::plain("\n"));
                text.apply_all(&attributes);
                text
            }
            Block::Heading { children, level } => {
                let mut text = self.inlines(children);
                text.append(StyledText::plain("\n"));
                text.apply_all(&self.style.heading_attributes(*level).merged(&Attributes::bold()));
                text.apply_all(&attributes);
                text
            }
            Block::ThematicBreak => return None,
        };
        Some(text)
    }

    pub fn render_inline(&self, inline: &Inline) -> StyledText {
        match inline {
            Inline::Text { text } | Inline::Code { text } | Inline::Html { text } => {
                StyledText::styled(text.as_str(), self.style.inline_attributes(inline))
            }
            Inline::Custom { literal } => {
                StyledText::styled(literal.as_str(), self.style.inline_attributes(inline))
            }
            Inline::SoftBreak | Inline::LineBreak => StyledText::plain("\n"),
            Inline::Emphasis { children } => {
                let mut text = self.inlines(children);
                text.apply_all(&Attributes::italic());
                text.apply_all(&self.style.inline_attributes(inline));
                text
            }
            Inline::Strong { children } => {
                let mut text = self.inlines(children);
                text.apply_all(&Attributes::bold());
                text.apply_all(&self.style.inline_attributes(inline));
                text
            }
            Inline::Link { children, url, .. } => self.render_link(children, url.as_deref()),
            Inline::Image { children, .. } => self.inlines(children),
        }
    }

    fn blocks(&self, blocks: &[Block]) -> StyledText {
        blocks
            .iter()
            .filter_map(|block| self.render_block(block))
            .collect()
    }

    fn inlines(&self, inlines: &[Inline]) -> StyledText {
        inlines
            .iter()
            .map(|inline| self.render_inline(inline))
            .collect()
    }

    fn render_list(&self, items: &[Block], attributes: &Attributes) -> StyledText {
        let mut text = self.blocks(items);

        // Any list marker present before this list styles itself belongs to a
        // nested list, together with the indentation computed for it alone.
        let nested = text.ranges_of(|run| run.list.zip(run.paragraph.clone()));

        let paragraph = self.style.list_paragraph_style(self.prefix_width(items));
        let delta = paragraph.head_indent - self.style.base_list_indentation();

        text.apply_all(attributes);
        text.apply_all(&Attributes::paragraph(paragraph));

        if !nested.is_empty() {
            log::trace!("re-indenting {} nested list range(s) by {delta}", nested.len());
        }
        // Nested ranges keep their own marker and shift by this list's unit
        for (range, (marker, original)) in nested {
            let restored = Attributes {
                list: Some(marker),
                ..Attributes::paragraph(original.indented_by(delta))
            };
            text.apply(range, &restored);
        }
        text
    }

    /// Width reserved for item prefixes. Prefixes only grow down a list, so
    /// the last one is the widest.
    fn prefix_width(&self, items: &[Block]) -> f32 {
        let measure = |prefix: &str| {
            StyledText::styled(prefix, self.style.list_prefix_attributes()).width()
        };
        let baseline = measure(BASELINE_PREFIX);
        let last = items
            .iter()
            .rev()
            .find_map(|item| match item {
                Block::ListItem { prefix, .. } => Some(prefix.trim_end_matches('\t')),
                _ => None,
            })
            .map_or(0.0, measure);
        baseline.max(last)
    }

    fn render_link(&self, children: &[Inline], url: Option<&str>) -> StyledText {
        let mut text = self.inlines(children);
        let display = text.to_string();

        // Text that is itself a URL is left for the reader's own link
        // detection rather than being linked twice.
        let target = url
            .and_then(|url| self.urls.openable_url(url))
            .filter(|_| self.urls.openable_url(&display).is_none());

        match target {
            Some(target) => {
                let range = text.full_range();
                text.replace(range, &self.style.default_attributes());
                text.apply_all(&Attributes {
                    link_id: url.map(str::to_string),
                    link: Some(target.to_string()),
                    ..Default::default()
                });
                text
            }
            None => {
                log::debug!("link to {url:?} rendered as literal text");
                StyledText::plain(format!("[{display}]({})", url.unwrap_or_default()))
            }
        }
    }
}
