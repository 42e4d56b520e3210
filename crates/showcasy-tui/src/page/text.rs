//! Greedy word wrapping over styled segments

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap plain text into lines no wider than `width` columns
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    wrap_words(text.split_whitespace().map(|w| (w, ())), width)
        .into_iter()
        .map(|line| line.into_iter().map(|(w, _)| w).collect::<Vec<_>>().join(" "))
        .collect()
}

/// Wrap text in one style into owned lines
pub fn wrap_styled(text: &str, style: Style, width: u16) -> Vec<Line<'static>> {
    wrap_spans(&[(text, style)], width)
}

/// Wrap several differently styled segments as one paragraph
///
/// Words are joined by single spaces; a space takes the style of the word
/// before it.
pub fn wrap_spans(segments: &[(&str, Style)], width: u16) -> Vec<Line<'static>> {
    let words = segments
        .iter()
        .flat_map(|(text, style)| text.split_whitespace().map(move |w| (w, *style)));

    wrap_words(words, width)
        .into_iter()
        .map(|line| {
            let mut spans = Vec::with_capacity(line.len() * 2);
            let count = line.len();
            for (i, (word, style)) in line.into_iter().enumerate() {
                spans.push(Span::styled(word, style));
                if i + 1 < count {
                    spans.push(Span::styled(" ", style));
                }
            }
            Line::from(spans)
        })
        .collect()
}

/// Pack words greedily; words longer than a line are split by column
fn wrap_words<'a, T: Copy>(
    words: impl Iterator<Item = (&'a str, T)>,
    width: u16,
) -> Vec<Vec<(String, T)>> {
    let width = width.max(1) as usize;
    let mut lines: Vec<Vec<(String, T)>> = Vec::new();
    let mut current: Vec<(String, T)> = Vec::new();
    let mut used = 0usize;

    for (word, tag) in words {
        for piece in split_long(word, width) {
            let piece_width = piece.width();
            let needed = if current.is_empty() {
                piece_width
            } else {
                used + 1 + piece_width
            };
            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                used = 0;
            }
            used = if current.is_empty() {
                piece_width
            } else {
                used + 1 + piece_width
            };
            current.push((piece, tag));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn split_long(word: &str, width: usize) -> Vec<String> {
    if word.width() <= width {
        return vec![word.to_string()];
    }
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut used = 0;
    for ch in word.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            used = 0;
        }
        piece.push(ch);
        used += w;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// Display width of a line
pub fn line_width(line: &Line<'_>) -> usize {
    line.spans.iter().map(|s| s.content.width()).sum()
}

/// Truncate `text` to `width` columns, ending in `…` when cut
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
