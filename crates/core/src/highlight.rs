//! Reading-passage highlighting over an immutable span document.
//!
//! Highlights are matched as literal substrings of plain text, so two
//! identical phrases in different paragraphs are both wrapped. Offsets of the
//! original selection are not tracked.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::model::HighlightId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HighlightColor {
    Yellow,
    Green,
    Pink,
    Blue,
}

impl HighlightColor {
    pub const ALL: [HighlightColor; 4] = [Self::Yellow, Self::Green, Self::Pink, Self::Blue];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Yellow => "Yellow",
            Self::Green => "Green",
            Self::Pink => "Pink",
            Self::Blue => "Blue",
        }
    }

    /// CSS background value.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Yellow => "rgba(255, 255, 0, 0.4)",
            Self::Green => "rgba(0, 255, 0, 0.4)",
            Self::Pink => "rgba(255, 105, 180, 0.4)",
            Self::Blue => "rgba(173, 216, 230, 0.4)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub id: HighlightId,
    pub text: String,
    pub color: HighlightColor,
}

/// Highlights in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSet {
    items: Vec<Highlight>,
    next_id: u64,
}

impl HighlightSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a highlight; blank text is ignored.
    pub fn add(&mut self, text: &str, color: HighlightColor) -> Option<HighlightId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.next_id += 1;
        let id = HighlightId::new(self.next_id);
        self.items.push(Highlight {
            id,
            text: text.to_owned(),
            color,
        });
        Some(id)
    }

    pub fn remove(&mut self, id: HighlightId) -> Option<Highlight> {
        let pos = self.items.iter().position(|h| h.id == id)?;
        Some(self.items.remove(pos))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Highlight> {
        self.items.iter()
    }

    /// Longest text first; ties keep creation order.
    fn by_length_desc(&self) -> Vec<&Highlight> {
        let mut sorted: Vec<&Highlight> = self.items.iter().collect();
        sorted.sort_by_key(|h| std::cmp::Reverse(h.text.chars().count()));
        sorted
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Span {
    /// Structural markup emitted verbatim. Never searched.
    Markup(String),
    /// Plain passage text, escaped on render.
    Text(String),
    Highlight {
        id: HighlightId,
        text: String,
        color: HighlightColor,
    },
}

/// The unhighlighted passage as an ordered list of spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageDocument {
    spans: Vec<Span>,
}

impl PassageDocument {
    /// Splits `passage` on blank lines into `<p id="para-N">` paragraphs.
    #[must_use]
    pub fn from_passage(passage: &str) -> Self {
        let mut spans = Vec::new();
        for (index, paragraph) in passage.split("\n\n").enumerate() {
            spans.push(Span::Markup(format!(r#"<p id="para-{index}" class="mb-4">"#)));
            let text = paragraph.trim();
            if !text.is_empty() {
                spans.push(Span::Text(text.to_owned()));
            }
            spans.push(Span::Markup("</p>".to_owned()));
        }
        Self { spans }
    }

    #[must_use]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    #[must_use]
    pub fn paragraph_count(&self) -> usize {
        self.spans
            .iter()
            .filter(|s| matches!(s, Span::Markup(m) if m == "</p>"))
            .count()
    }

    /// Produces a new span list with every highlight applied.
    ///
    /// Always starts from the unhighlighted document, so the result depends
    /// only on `highlights`.
    #[must_use]
    pub fn apply(&self, highlights: &HighlightSet) -> Vec<Span> {
        let mut spans = self.spans.clone();
        for highlight in highlights.by_length_desc() {
            spans = wrap_occurrences(spans, highlight);
        }
        spans
    }
}

fn wrap_occurrences(spans: Vec<Span>, highlight: &Highlight) -> Vec<Span> {
    let needle = highlight.text.as_str();
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let Span::Text(text) = span else {
            out.push(span);
            continue;
        };
        let mut cursor = 0;
        for (start, matched) in text.match_indices(needle) {
            if start > cursor {
                out.push(Span::Text(text[cursor..start].to_owned()));
            }
            out.push(Span::Highlight {
                id: highlight.id,
                text: matched.to_owned(),
                color: highlight.color,
            });
            cursor = start + matched.len();
        }
        if cursor == 0 {
            out.push(Span::Text(text));
        } else if cursor < text.len() {
            out.push(Span::Text(text[cursor..].to_owned()));
        }
    }
    out
}

/// Renders spans to HTML. Text is escaped; markup is emitted as-is.
#[must_use]
pub fn render_html(spans: &[Span]) -> String {
    let mut html = String::new();
    for span in spans {
        match span {
            Span::Markup(markup) => html.push_str(markup),
            Span::Text(text) => push_escaped(&mut html, text),
            Span::Highlight { text, color, .. } => {
                let _ = write!(
                    html,
                    r#"<span class="highlight-text" style="background-color: {};">"#,
                    color.css()
                );
                push_escaped(&mut html, text);
                html.push_str("</span>");
            }
        }
    }
    html
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

/// User-facing highlight state: the armed colour plus the highlight set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlighter {
    armed: Option<HighlightColor>,
    highlights: HighlightSet,
}

impl Highlighter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn armed(&self) -> Option<HighlightColor> {
        self.armed
    }

    #[must_use]
    pub fn highlights(&self) -> &HighlightSet {
        &self.highlights
    }

    /// Arms `color`, or disarms it if it is already armed.
    pub fn toggle_color(&mut self, color: HighlightColor) -> Option<HighlightColor> {
        self.armed = if self.armed == Some(color) {
            None
        } else {
            Some(color)
        };
        self.armed
    }

    /// Fires the armed colour at `selection`. No-op when disarmed or blank.
    pub fn select_text(&mut self, selection: &str) -> Option<HighlightId> {
        let color = self.armed?;
        self.highlights.add(selection, color)
    }

    pub fn remove(&mut self, id: HighlightId) -> Option<Highlight> {
        self.highlights.remove(id)
    }

    /// Empties the set and disarms.
    pub fn clear(&mut self) {
        self.highlights.clear();
        self.armed = None;
    }
}
