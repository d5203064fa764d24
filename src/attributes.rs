use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::block::ListKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid color {0:?}: expected #rrggbb")]
    Invalid(String),
}

/// An sRGB color, written as `#rrggbb` in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::Invalid(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    Body,
    Monospace,
}

/// Structural marker left on the text of a rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMarker {
    Ordered,
    Unordered,
}

impl From<ListKind> for ListMarker {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::Ordered { .. } => ListMarker::Ordered,
            ListKind::Unordered => ListMarker::Unordered,
        }
    }
}

/// Horizontal layout of a paragraph, in points.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParagraphStyle {
    /// Indent of the first line.
    pub first_line_head_indent: f32,
    /// Indent of wrapped lines.
    pub head_indent: f32,
    pub tab_stops: Vec<f32>,
}

impl ParagraphStyle {
    /// The same style moved right by `delta` points.
    pub fn indented_by(&self, delta: f32) -> Self {
        Self {
            first_line_head_indent: self.first_line_head_indent + delta,
            head_indent: self.head_indent + delta,
            tab_stops: self.tab_stops.iter().map(|stop| stop + delta).collect(),
        }
    }
}

/// Attributes of a text run. `None` means "not set", so an attribute set can
/// be laid over another one with [`Attributes::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Attributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<FontFamily>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<ParagraphStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<ListMarker>,
    /// Link destination as written in the source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_id: Option<String>,
    /// Resolved URL the link opens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Attributes {
    pub fn bold() -> Self {
        Self {
            bold: Some(true),
            ..Default::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            italic: Some(true),
            ..Default::default()
        }
    }

    pub fn paragraph(style: ParagraphStyle) -> Self {
        Self {
            paragraph: Some(style),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrite every attribute that is set in `overlay`.
    pub fn merge(&mut self, overlay: &Attributes) {
        fn set<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
            if value.is_some() {
                target.clone_from(value);
            }
        }

        set(&mut self.font_family, &overlay.font_family);
        set(&mut self.font_size, &overlay.font_size);
        set(&mut self.bold, &overlay.bold);
        set(&mut self.italic, &overlay.italic);
        set(&mut self.underline, &overlay.underline);
        set(&mut self.foreground, &overlay.foreground);
        set(&mut self.background, &overlay.background);
        set(&mut self.paragraph, &overlay.paragraph);
        set(&mut self.list, &overlay.list);
        set(&mut self.link_id, &overlay.link_id);
        set(&mut self.link, &overlay.link);
    }

    pub fn merged(mut self, overlay: &Attributes) -> Self {
        self.merge(overlay);
        self
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(family) = self.font_family {
            parts.push(format!("{family:?}").to_lowercase());
        }
        if let Some(size) = self.font_size {
            parts.push(format!("size={size}"));
        }
        if self.bold == Some(true) {
            parts.push("bold".to_string());
        }
        if self.italic == Some(true) {
            parts.push("italic".to_string());
        }
        if self.underline == Some(true) {
            parts.push("underline".to_string());
        }
        if let Some(color) = self.foreground {
            parts.push(format!("fg={color}"));
        }
        if let Some(color) = self.background {
            parts.push(format!("bg={color}"));
        }
        if let Some(paragraph) = &self.paragraph {
            parts.push(format!(
                "indent={}/{}",
                paragraph.first_line_head_indent, paragraph.head_indent
            ));
        }
        if let Some(list) = self.list {
            parts.push(format!("list={list:?}").to_lowercase());
        }
        if let Some(link) = &self.link {
            parts.push(format!("link={link}"));
        }
        f.write_str(&parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("#000000", Color::BLACK)]
    #[case("#1a4f8b", Color::rgb(0x1a, 0x4f, 0x8b))]
    #[case("#FFFFFF", Color::rgb(255, 255, 255))]
    fn parses_hex_colors(#[case] input: &str, #[case] expected: Color) {
        assert_eq!(input.parse::<Color>(), Ok(expected));
    }

    #[rstest]
    #[case("1a4f8b")]
    #[case("#1a4f8")]
    #[case("#1a4f8bb")]
    #[case("#zzzzzz")]
    #[case("#ééé")]
    fn rejects_malformed_colors(#[case] input: &str) {
        assert_eq!(
            input.parse::<Color>(),
            Err(ColorError::Invalid(input.to_string()))
        );
    }

    #[test]
    fn merge_overwrites_only_set_attributes() {
        let mut attributes = Attributes {
            font_size: Some(14.0),
            bold: Some(false),
            foreground: Some(Color::BLACK),
            ..Default::default()
        };
        attributes.merge(&Attributes {
            bold: Some(true),
            italic: Some(true),
            ..Default::default()
        });
        assert_eq!(
            attributes,
            Attributes {
                font_size: Some(14.0),
                bold: Some(true),
                italic: Some(true),
                foreground: Some(Color::BLACK),
                ..Default::default()
            }
        );
    }

    #[test]
    fn indented_paragraph_style_moves_every_stop() {
        let style = ParagraphStyle {
            first_line_head_indent: 12.0,
            head_indent: 30.0,
            tab_stops: vec![30.0],
        };
        assert_eq!(
            style.indented_by(18.0),
            ParagraphStyle {
                first_line_head_indent: 30.0,
                head_indent: 48.0,
                tab_stops: vec![48.0],
            }
        );
    }
}
