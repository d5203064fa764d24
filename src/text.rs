use std::fmt;
use std::ops::Range;

use serde::Serialize;

use crate::attributes::{Attributes, FontFamily};

/// Font size assumed when a run carries none.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// A stretch of text sharing one set of attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Run {
    pub text: String,
    pub attributes: Attributes,
}

/// Text made of attributed runs.
///
/// Adjacent runs never share identical attributes and no run is empty, so two
/// buffers with the same text and styling compare equal. Ranges are byte
/// offsets into the concatenated text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyledText {
    runs: Vec<Run>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text without any attributes.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Attributes::default())
    }

    pub fn styled(text: impl Into<String>, attributes: Attributes) -> Self {
        let mut styled = Self::new();
        styled.push_run(Run {
            text: text.into(),
            attributes,
        });
        styled
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn len(&self) -> usize {
        self.runs.iter().map(|run| run.text.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn full_range(&self) -> Range<usize> {
        0..self.len()
    }

    pub fn append(&mut self, other: StyledText) {
        for run in other.runs {
            self.push_run(run);
        }
    }

    pub fn prepend(&mut self, mut other: StyledText) {
        other.append(std::mem::take(self));
        *self = other;
    }

    /// Attributes of the run containing byte `offset`.
    pub fn attributes_at(&self, offset: usize) -> Option<&Attributes> {
        let mut end = 0;
        self.runs.iter().find_map(|run| {
            end += run.text.len();
            (offset < end).then_some(&run.attributes)
        })
    }

    /// Lay `overlay` over the attributes of every run in `range`.
    pub fn apply(&mut self, range: Range<usize>, overlay: &Attributes) {
        if overlay.is_empty() {
            return;
        }
        self.edit(range, |attributes| attributes.merge(overlay));
    }

    pub fn apply_all(&mut self, overlay: &Attributes) {
        self.apply(self.full_range(), overlay);
    }

    /// Replace the attributes of every run in `range` with `attributes`.
    pub fn replace(&mut self, range: Range<usize>, attributes: &Attributes) {
        self.edit(range, |current| current.clone_from(attributes));
    }

    /// Maximal ranges where `key` yields the same value. Runs for which it
    /// yields `None` are skipped.
    pub fn ranges_of<T, F>(&self, key: F) -> Vec<(Range<usize>, T)>
    where
        T: PartialEq,
        F: Fn(&Attributes) -> Option<T>,
    {
        let mut ranges: Vec<(Range<usize>, T)> = Vec::new();
        let mut offset = 0;
        for run in &self.runs {
            let end = offset + run.text.len();
            if let Some(value) = key(&run.attributes) {
                let extends = matches!(
                    ranges.last(),
                    Some((range, last)) if range.end == offset && *last == value
                );
                if extends {
                    if let Some((range, _)) = ranges.last_mut() {
                        range.end = end;
                    }
                } else {
                    ranges.push((offset..end, value));
                }
            }
            offset = end;
        }
        ranges
    }

    /// Rendered width of the whole text, in points.
    pub fn width(&self) -> f32 {
        self.runs
            .iter()
            .map(|run| text_width(&run.text, &run.attributes))
            .sum()
    }

    fn push_run(&mut self, run: Run) {
        if run.text.is_empty() {
            return;
        }
        if let Some(last) = self.runs.last_mut() {
            if last.attributes == run.attributes {
                last.text.push_str(&run.text);
                return;
            }
        }
        self.runs.push(run);
    }

    // Splits runs at the range bounds and edits the attributes of the runs
    // inside. Range bounds must fall on char boundaries.
    fn edit(&mut self, range: Range<usize>, edit: impl Fn(&mut Attributes)) {
        let runs = std::mem::take(&mut self.runs);
        let mut offset = 0;
        for Run { text, attributes } in runs {
            let start = offset;
            let end = offset + text.len();
            offset = end;

            let lo = range.start.clamp(start, end) - start;
            let hi = range.end.clamp(start, end) - start;
            if lo >= hi {
                self.push_run(Run { text, attributes });
                continue;
            }

            let mut edited = attributes.clone();
            edit(&mut edited);
            self.push_run(Run {
                text: text[..lo].to_string(),
                attributes: attributes.clone(),
            });
            self.push_run(Run {
                text: text[lo..hi].to_string(),
                attributes: edited,
            });
            self.push_run(Run {
                text: text[hi..].to_string(),
                attributes,
            });
        }
    }
}

impl FromIterator<StyledText> for StyledText {
    fn from_iter<I: IntoIterator<Item = StyledText>>(iter: I) -> Self {
        let mut joined = StyledText::new();
        joined.extend(iter);
        joined
    }
}

impl Extend<StyledText> for StyledText {
    fn extend<I: IntoIterator<Item = StyledText>>(&mut self, iter: I) {
        for text in iter {
            self.append(text);
        }
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in &self.runs {
            f.write_str(&run.text)?;
        }
        Ok(())
    }
}

/// Approximate rendered width of `text` under `attributes`, in points.
pub fn text_width(text: &str, attributes: &Attributes) -> f32 {
    let size = attributes.font_size.unwrap_or(DEFAULT_FONT_SIZE);
    let ems: f32 = match attributes.font_family {
        Some(FontFamily::Monospace) => text.chars().filter(|ch| *ch != '\t').count() as f32 * 0.6,
        _ => text.chars().map(advance).sum(),
    };
    let weight = if attributes.bold == Some(true) { 1.06 } else { 1.0 };
    ems * size * weight
}

// Advance of a proportional glyph, in ems.
fn advance(ch: char) -> f32 {
    match ch {
        // Depends on tab stops, not on the glyph
        '\t' => 0.0,
        ' ' | '.' | ',' | ':' | ';' | '\'' | '!' | '|' | 'i' | 'j' | 'l' => 0.28,
        '•' => 0.35,
        '0'..='9' => 0.56,
        'm' | 'w' | 'M' | 'W' => 0.83,
        ch if ch.is_uppercase() => 0.67,
        _ => 0.5,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::attributes::ListMarker;

    fn runs(text: &StyledText) -> Vec<(&str, &Attributes)> {
        text.runs()
            .iter()
            .map(|run| (run.text.as_str(), &run.attributes))
            .collect()
    }

    #[test]
    fn empty_text_has_no_runs() {
        assert!(StyledText::plain("").is_empty());
        assert_eq!(StyledText::plain("").len(), 0);
    }

    #[test]
    fn append_coalesces_equal_runs() {
        let mut text = StyledText::plain("ab");
        text.append(StyledText::plain("cd"));
        text.append(StyledText::styled("ef", Attributes::bold()));
        let plain = Attributes::default();
        let bold = Attributes::bold();
        assert_eq!(runs(&text), vec![("abcd", &plain), ("ef", &bold)]);
        assert_eq!(text.to_string(), "abcdef");
    }

    #[test]
    fn join_preserves_order() {
        let joined: StyledText = ["one ", "two ", "three"]
            .into_iter()
            .map(StyledText::plain)
            .collect();
        assert_eq!(joined.to_string(), "one two three");
        assert_eq!(joined.runs().len(), 1);
    }

    #[test]
    fn prepend_puts_text_first() {
        let mut text = StyledText::plain("body");
        text.prepend(StyledText::styled("•\t", Attributes::bold()));
        assert_eq!(text.to_string(), "•\tbody");
        assert_eq!(text.attributes_at(0), Some(&Attributes::bold()));
    }

    #[test]
    fn apply_splits_runs_at_range_bounds() {
        let mut text = StyledText::plain("hello world");
        text.apply(6..11, &Attributes::italic());
        let plain = Attributes::default();
        let italic = Attributes::italic();
        assert_eq!(runs(&text), vec![("hello ", &plain), ("world", &italic)]);

        text.apply(2..8, &Attributes::bold());
        let bold = Attributes::bold();
        let bold_italic = Attributes::bold().merged(&Attributes::italic());
        assert_eq!(
            runs(&text),
            vec![
                ("he", &plain),
                ("llo ", &bold),
                ("wo", &bold_italic),
                ("rld", &italic),
            ]
        );
    }

    #[test]
    fn replace_discards_previous_attributes() {
        let mut text = StyledText::styled("abc", Attributes::bold());
        text.replace(0..3, &Attributes::italic());
        assert_eq!(text.attributes_at(1), Some(&Attributes::italic()));
    }

    #[test]
    fn ranges_of_groups_equal_neighbours() {
        let marked = Attributes {
            list: Some(ListMarker::Unordered),
            ..Default::default()
        };
        let mut text = StyledText::plain("aa");
        text.append(StyledText::styled("bb", marked.clone()));
        text.append(StyledText::styled("cc", marked.clone().merged(&Attributes::bold())));
        text.append(StyledText::plain("dd"));
        text.append(StyledText::styled("ee", marked));

        let ranges = text.ranges_of(|attributes| attributes.list);
        assert_eq!(
            ranges,
            vec![
                (2..6, ListMarker::Unordered),
                (8..10, ListMarker::Unordered),
            ]
        );
    }

    #[test]
    fn width_grows_with_text_and_size() {
        let small = Attributes {
            font_size: Some(10.0),
            ..Default::default()
        };
        let large = Attributes {
            font_size: Some(20.0),
            ..Default::default()
        };
        assert!(text_width("100.", &small) > text_width("99.", &small));
        assert!(text_width("99.", &small) > text_width("•", &small));
        assert_eq!(text_width("99.", &large), 2.0 * text_width("99.", &small));
        assert_eq!(text_width("\t", &small), 0.0);
    }

    #[test]
    fn width_sums_runs_in_their_own_attributes() {
        let small = Attributes {
            font_size: Some(10.0),
            ..Default::default()
        };
        let large = Attributes {
            font_size: Some(20.0),
            ..Default::default()
        };
        let mut text = StyledText::styled("ab", small.clone());
        text.append(StyledText::styled("cd", large.clone()));
        let expected = text_width("ab", &small) + text_width("cd", &large);
        assert!((text.width() - expected).abs() < 1e-4);
        assert_eq!(StyledText::new().width(), 0.0);
    }
}
