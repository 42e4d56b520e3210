//! Presentational blocks that make up a page body
//!
//! A block renders to owned lines for a given column width. The number of
//! lines is the block's height on the page; it may depend on the width and on
//! form contents, never on focus.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use showcasy_core::content::{ApproachStep, Testimonial};
use showcasy_core::contact::{ContactForm, Field};
use showcasy_core::ResolvedAsset;
use unicode_width::UnicodeWidthStr;

use super::text::{line_width, truncate, wrap, wrap_spans, wrap_styled};
use crate::motion::CountUp;
use crate::theme::Theme;

/// Everything a block needs to draw itself this frame
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub theme: &'a Theme,
    /// Focused target index on the page
    pub focus: Option<usize>,
    pub form: Option<&'a ContactForm>,
    /// Field receiving keystrokes
    pub editing: Option<Field>,
    pub submitting: bool,
}

impl RenderContext<'_> {
    fn is_focused(&self, target: usize) -> bool {
        self.focus == Some(target)
    }

    fn text(&self) -> Style {
        Style::default().fg(self.theme.foreground)
    }

    fn muted(&self) -> Style {
        Style::default().fg(self.theme.muted)
    }

    fn strong(&self) -> Style {
        self.text().add_modifier(Modifier::BOLD)
    }

    fn accent(&self) -> Style {
        Style::default()
            .fg(self.theme.primary)
            .add_modifier(Modifier::ITALIC)
    }

    fn rule(&self) -> Style {
        Style::default().fg(self.theme.border)
    }

    /// Highlight for a focused control
    fn focused(&self) -> Style {
        Style::default()
            .fg(self.theme.background)
            .bg(self.theme.primary)
            .add_modifier(Modifier::BOLD)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Filled call-to-action
    Button,
    /// Inline text link with an arrow
    Arrow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipKind {
    /// Multi-select
    Service,
    /// Single choice
    Budget,
}

#[derive(Debug)]
pub enum Block {
    Spacer(u16),
    /// Availability pill with a status dot
    Badge(&'static str),
    /// Large heading; `true` segments are drawn as the italic accent
    Title(Vec<(&'static str, bool)>),
    Heading(String),
    /// Small uppercase label above a heading
    Eyebrow(String),
    /// Secondary paragraph
    Text(String),
    Link {
        label: String,
        target: usize,
        kind: LinkKind,
    },
    /// Several uppercase navigation links on one row
    NavLinks(Vec<(&'static str, usize)>),
    Image {
        asset: ResolvedAsset,
        alt: String,
        rows: u16,
    },
    Card {
        title: String,
        category: String,
        asset: ResolvedAsset,
        target: usize,
        wide: bool,
    },
    /// A list row: title, optional detail line, right-aligned aside
    Row {
        title: String,
        detail: Option<String>,
        aside: String,
    },
    Quote(Testimonial),
    Metric {
        count_up: CountUp,
        label: String,
    },
    Pills(Vec<String>),
    Step(ApproachStep),
    /// Labelled facts, e.g. the case study sidebar
    Facts(Vec<(&'static str, Vec<String>)>),
    Field {
        field: Field,
        target: usize,
    },
    Chips {
        label: &'static str,
        kind: ChipKind,
        options: Vec<(&'static str, usize)>,
    },
    Submit {
        target: usize,
    },
    Rule,
    /// Footer wordmark with tagline
    Logo(&'static str),
}

impl Block {
    /// Every target index this block owns
    pub fn targets(&self) -> Vec<usize> {
        match self {
            Block::Link { target, .. }
            | Block::Card { target, .. }
            | Block::Field { target, .. }
            | Block::Submit { target } => vec![*target],
            Block::NavLinks(links) => links.iter().map(|(_, t)| *t).collect(),
            Block::Chips { options, .. } => options.iter().map(|(_, t)| *t).collect(),
            _ => Vec::new(),
        }
    }

    /// Count-up owned by this block, if any
    pub fn count_up(&self) -> Option<&CountUp> {
        match self {
            Block::Metric { count_up, .. } => Some(count_up),
            _ => None,
        }
    }

    pub fn render(&self, ctx: &RenderContext<'_>, width: u16) -> Vec<Line<'static>> {
        match self {
            Block::Spacer(rows) => vec![Line::default(); *rows as usize],
            Block::Badge(label) => vec![Line::from(vec![
                Span::styled("● ", Style::default().fg(ctx.theme.success)),
                Span::styled(label.to_string(), ctx.text().add_modifier(Modifier::BOLD)),
            ])],
            Block::Title(segments) => {
                let styled: Vec<(&str, Style)> = segments
                    .iter()
                    .map(|(text, accent)| {
                        let style = if *accent {
                            ctx.accent()
                        } else {
                            ctx.strong()
                        };
                        (*text, style)
                    })
                    .collect();
                wrap_spans(&styled, width)
            }
            Block::Heading(text) => wrap_styled(text, ctx.strong(), width),
            Block::Eyebrow(text) => wrap_styled(&text.to_uppercase(), ctx.muted(), width),
            Block::Text(text) => wrap_styled(text, ctx.muted(), width),
            Block::Link {
                label,
                target,
                kind,
            } => vec![render_link(ctx, label, *target, *kind)],
            Block::NavLinks(links) => {
                let mut spans = Vec::new();
                for (i, (label, target)) in links.iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::styled("   ", ctx.muted()));
                    }
                    let style = if ctx.is_focused(*target) {
                        ctx.focused()
                    } else {
                        ctx.muted().add_modifier(Modifier::BOLD)
                    };
                    spans.push(Span::styled(label.to_string(), style));
                }
                vec![Line::from(spans)]
            }
            Block::Image { asset, alt, rows } => image_box(ctx, asset, alt, *rows, width),
            Block::Card {
                title,
                category,
                asset,
                target,
                wide,
            } => {
                let rows = if *wide { 9 } else { 7 };
                let mut lines = image_box(ctx, asset, title, rows, width);
                let focused = ctx.is_focused(*target);
                let (title_style, arrow_style) = if focused {
                    (ctx.focused(), Style::default().fg(ctx.theme.primary))
                } else {
                    (ctx.strong(), ctx.muted())
                };
                lines.push(spread(
                    vec![Span::styled(title.clone(), title_style)],
                    vec![Span::styled("→", arrow_style)],
                    width,
                ));
                lines.push(Line::from(Span::styled(category.clone(), ctx.muted())));
                lines
            }
            Block::Row {
                title,
                detail,
                aside,
            } => {
                let aside_style = ctx.muted().add_modifier(Modifier::ITALIC);
                let mut lines = if title.width() + aside.width() < width as usize {
                    vec![spread(
                        vec![Span::styled(title.clone(), ctx.strong())],
                        vec![Span::styled(aside.clone(), aside_style)],
                        width,
                    )]
                } else {
                    let mut lines = wrap_styled(title, ctx.strong(), width);
                    lines.push(Line::from(Span::styled(aside.clone(), aside_style)));
                    lines
                };
                if let Some(detail) = detail {
                    lines.extend(wrap_styled(detail, ctx.muted(), width));
                }
                lines.push(rule(ctx, width));
                lines
            }
            Block::Quote(testimonial) => {
                let mut lines =
                    wrap_styled(&format!("\"{}\"", testimonial.quote), ctx.muted(), width);
                lines.push(Line::default());
                lines.push(spread(
                    vec![
                        Span::styled(
                            format!(" {} ", testimonial.initial()),
                            Style::default()
                                .fg(ctx.theme.foreground)
                                .bg(ctx.theme.surface)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(" ", ctx.text()),
                        Span::styled(testimonial.author.to_string(), ctx.strong()),
                        Span::styled(format!("  {}", testimonial.role), ctx.muted()),
                    ],
                    vec![Span::styled(
                        testimonial.company.to_string(),
                        ctx.strong().add_modifier(Modifier::ITALIC),
                    )],
                    width,
                ));
                lines.push(rule(ctx, width));
                lines
            }
            Block::Metric { count_up, label } => {
                let mut lines = vec![Line::from(Span::styled(
                    count_up.displayed(),
                    Style::default()
                        .fg(ctx.theme.primary)
                        .add_modifier(Modifier::BOLD),
                ))];
                lines.extend(wrap_styled(label, ctx.muted(), width));
                lines
            }
            Block::Pills(names) => {
                let tokens = names
                    .iter()
                    .map(|name| {
                        vec![Span::styled(
                            format!(" {} ", name),
                            Style::default()
                                .fg(ctx.theme.foreground)
                                .bg(ctx.theme.surface),
                        )]
                    })
                    .collect();
                pack(tokens, width)
            }
            Block::Step(step) => {
                let mut lines = vec![Line::from(Span::styled(
                    format!("Step {}", step.number),
                    Style::default().fg(ctx.theme.primary),
                ))];
                lines.extend(wrap_styled(step.title, ctx.strong(), width));
                lines.extend(wrap_styled(step.description, ctx.muted(), width));
                for detail in step.details {
                    for (i, line) in wrap(detail, width.saturating_sub(2)).into_iter().enumerate() {
                        let bullet = if i == 0 { "• " } else { "  " };
                        lines.push(Line::from(vec![
                            Span::styled(bullet, Style::default().fg(ctx.theme.primary)),
                            Span::styled(line, ctx.muted()),
                        ]));
                    }
                }
                lines
            }
            Block::Facts(facts) => {
                let mut lines = Vec::new();
                for (i, (label, values)) in facts.iter().enumerate() {
                    if i > 0 {
                        lines.push(Line::default());
                    }
                    lines.push(Line::from(Span::styled(label.to_string(), ctx.muted())));
                    for value in values {
                        lines.extend(wrap_styled(value, ctx.text(), width));
                    }
                }
                lines
            }
            Block::Field { field, target } => render_field(ctx, *field, *target, width),
            Block::Chips {
                label,
                kind,
                options,
            } => {
                let mut lines = vec![Line::from(Span::styled(label.to_string(), ctx.strong()))];
                let tokens = options
                    .iter()
                    .map(|(option, target)| {
                        let selected = ctx.form.is_some_and(|form| match kind {
                            ChipKind::Service => form.is_service_selected(option),
                            ChipKind::Budget => form.budget.as_deref() == Some(*option),
                        });
                        vec![chip(ctx, option, selected, ctx.is_focused(*target))]
                    })
                    .collect();
                lines.extend(pack(tokens, width));
                lines
            }
            Block::Submit { target } => {
                let label = if ctx.submitting { " Sending… " } else { " Submit " };
                let style = if ctx.is_focused(*target) {
                    ctx.focused()
                } else {
                    Style::default()
                        .fg(ctx.theme.background)
                        .bg(ctx.theme.foreground)
                        .add_modifier(Modifier::BOLD)
                };
                vec![Line::from(Span::styled(label, style))]
            }
            Block::Rule => vec![rule(ctx, width)],
            Block::Logo(tagline) => {
                let mut lines = vec![Line::from(vec![
                    Span::styled("show", ctx.muted().add_modifier(Modifier::ITALIC)),
                    Span::styled("casy.", ctx.strong()),
                ])];
                lines.extend(wrap_styled(tagline, ctx.muted(), width));
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    "© 2026. All rights reserved.",
                    ctx.muted(),
                )));
                lines
            }
        }
    }
}

fn render_link(ctx: &RenderContext<'_>, label: &str, target: usize, kind: LinkKind) -> Line<'static> {
    let focused = ctx.is_focused(target);
    match kind {
        LinkKind::Button => {
            let style = if focused {
                Style::default()
                    .fg(ctx.theme.background)
                    .bg(ctx.theme.foreground)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(ctx.theme.background)
                    .bg(ctx.theme.primary)
                    .add_modifier(Modifier::BOLD)
            };
            Line::from(Span::styled(format!(" {} → ", label), style))
        }
        LinkKind::Arrow => {
            let style = if focused {
                ctx.focused()
            } else {
                ctx.text().add_modifier(Modifier::UNDERLINED)
            };
            Line::from(vec![
                Span::styled(label.to_string(), style),
                Span::styled(" →", Style::default().fg(ctx.theme.primary)),
            ])
        }
    }
}

fn render_field(ctx: &RenderContext<'_>, field: Field, target: usize, width: u16) -> Vec<Line<'static>> {
    let editing = ctx.editing == Some(field);
    let focused = ctx.is_focused(target);
    let value = ctx.form.map(|form| form.value(field)).unwrap_or_default();
    let error = ctx.form.and_then(|form| form.error(field));

    let label_style = if editing || focused {
        Style::default()
            .fg(ctx.theme.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        ctx.strong()
    };
    let mut lines = vec![Line::from(Span::styled(field.label(), label_style))];

    let min_rows = if field == Field::Message { 3 } else { 1 };
    let mut input: Vec<Line<'static>> = if value.is_empty() {
        let mut placeholder = vec![Span::styled(field.placeholder(), ctx.muted())];
        if editing {
            placeholder.insert(0, cursor(ctx));
        }
        vec![Line::from(placeholder)]
    } else {
        let text_width = width.saturating_sub(1);
        let mut rows: Vec<Line<'static>> = if field == Field::Message {
            wrap_styled(value, ctx.text(), text_width)
        } else {
            vec![Line::from(Span::styled(
                truncate_start(value, text_width as usize),
                ctx.text(),
            ))]
        };
        if editing {
            if let Some(last) = rows.last_mut() {
                last.spans.push(cursor(ctx));
            }
        }
        rows
    };
    while input.len() < min_rows {
        input.push(Line::default());
    }
    lines.extend(input);

    let underline = if editing || focused {
        Style::default().fg(ctx.theme.primary)
    } else {
        ctx.rule()
    };
    lines.push(Line::from(Span::styled("─".repeat(width as usize), underline)));

    // The error row is always reserved so validation does not move the page
    lines.push(match error {
        Some(message) => Line::from(Span::styled(message, Style::default().fg(ctx.theme.error))),
        None => Line::default(),
    });
    lines
}

fn cursor(ctx: &RenderContext<'_>) -> Span<'static> {
    Span::styled("▏", Style::default().fg(ctx.theme.primary))
}

/// Keep the end of a single-line value visible while typing
fn truncate_start(value: &str, width: usize) -> String {
    if value.width() <= width {
        return value.to_string();
    }
    let chars: Vec<char> = value.chars().collect();
    let mut used = 1;
    let mut start = chars.len();
    while start > 0 {
        let w = chars[start - 1].to_string().width();
        if used + w > width {
            break;
        }
        used += w;
        start -= 1;
    }
    let mut out = String::from("…");
    out.extend(&chars[start..]);
    out
}

fn chip(ctx: &RenderContext<'_>, label: &str, selected: bool, focused: bool) -> Span<'static> {
    let mut style = if selected {
        Style::default()
            .fg(ctx.theme.background)
            .bg(ctx.theme.primary)
    } else {
        Style::default()
            .fg(ctx.theme.foreground)
            .bg(ctx.theme.surface)
    };
    if focused {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED | Modifier::REVERSED);
    }
    Span::styled(format!(" {} ", label), style)
}

fn rule(ctx: &RenderContext<'_>, width: u16) -> Line<'static> {
    Line::from(Span::styled("─".repeat(width as usize), ctx.rule()))
}

/// Left spans, padding, right spans; the right side is dropped if it cannot fit
fn spread(left: Vec<Span<'static>>, right: Vec<Span<'static>>, width: u16) -> Line<'static> {
    let left_line = Line::from(left);
    let right_line = Line::from(right);
    let used = line_width(&left_line) + line_width(&right_line);
    let width = width as usize;

    let mut spans = left_line.spans;
    if used < width {
        spans.push(Span::raw(" ".repeat(width - used)));
        spans.extend(right_line.spans);
    }
    Line::from(spans)
}

/// Lay tokens out left to right, one column apart, wrapping at `width`
fn pack(tokens: Vec<Vec<Span<'static>>>, width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for token in tokens {
        let token_width: usize = token.iter().map(|s| s.content.width()).sum();
        if !current.is_empty() && used + 1 + token_width > width {
            lines.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }
        if !current.is_empty() {
            current.push(Span::raw(" "));
            used += 1;
        }
        current.extend(token);
        used += token_width;
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

/// Framed stand-in for an image: alt text and what the file resolved to
fn image_box(
    ctx: &RenderContext<'_>,
    asset: &ResolvedAsset,
    alt: &str,
    rows: u16,
    width: u16,
) -> Vec<Line<'static>> {
    let rows = rows.max(3) as usize;
    let inner = (width as usize).saturating_sub(2);
    let frame = ctx.rule();
    let fill = Style::default().bg(ctx.theme.surface);

    let caption = match asset {
        ResolvedAsset::Image { path, width, height } => format!(
            "{} · {}×{}",
            file_name(path),
            width,
            height
        ),
        ResolvedAsset::Placeholder { requested, .. } => format!("placeholder for {}", requested),
        ResolvedAsset::Missing { requested } => format!("image unavailable: {}", requested),
    };

    let centered = |text: String, style: Style| -> Line<'static> {
        let text = truncate(&text, inner.saturating_sub(2));
        let pad = inner.saturating_sub(text.width());
        let left = pad / 2;
        Line::from(vec![
            Span::styled("│", frame),
            Span::styled(" ".repeat(left), fill),
            Span::styled(text, style.bg(ctx.theme.surface)),
            Span::styled(" ".repeat(pad - left), fill),
            Span::styled("│", frame),
        ])
    };
    let empty = || {
        Line::from(vec![
            Span::styled("│", frame),
            Span::styled(" ".repeat(inner), fill),
            Span::styled("│", frame),
        ])
    };

    let mut lines = vec![Line::from(Span::styled(
        format!("╭{}╮", "─".repeat(inner)),
        frame,
    ))];
    let body_rows = rows - 2;
    let middle = body_rows.saturating_sub(2) / 2;
    for row in 0..body_rows {
        if row == middle {
            lines.push(centered(format!("▣ {}", alt), ctx.text()));
        } else if row == middle + 1 {
            let style = if asset.is_fallback() {
                Style::default().fg(ctx.theme.error)
            } else {
                ctx.muted()
            };
            lines.push(centered(caption.clone(), style));
        } else {
            lines.push(empty());
        }
    }
    lines.push(Line::from(Span::styled(
        format!("╰{}╯", "─".repeat(inner)),
        frame,
    )));
    lines
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::themes;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn ctx<'a>(theme: &'a Theme, form: Option<&'a ContactForm>) -> RenderContext<'a> {
        RenderContext {
            theme,
            focus: None,
            form,
            editing: None,
            submitting: false,
        }
    }

    #[test]
    fn test_image_box_has_requested_height() {
        let theme = themes::light();
        let asset = ResolvedAsset::Image {
            path: PathBuf::from("public/images/about.jpg"),
            width: 1600,
            height: 900,
        };
        let block = Block::Image {
            asset,
            alt: "Portrait".to_string(),
            rows: 8,
        };
        let lines = block.render(&ctx(&theme, None), 40);
        assert_eq!(lines.len(), 8);
        let text = plain(&lines);
        assert!(text.iter().any(|l| l.contains("about.jpg · 1600×900")));
        assert!(text.iter().all(|l| l.width() == 40));
    }

    #[test]
    fn test_missing_image_still_renders() {
        let theme = themes::dark();
        let block = Block::Image {
            asset: ResolvedAsset::Missing {
                requested: "/images/gone.png".to_string(),
            },
            alt: "Gone".to_string(),
            rows: 5,
        };
        let text = plain(&block.render(&ctx(&theme, None), 50));
        assert!(text.iter().any(|l| l.contains("image unavailable: /images/gone.png")));
    }

    #[test]
    fn test_field_height_ignores_errors() {
        let theme = themes::light();
        let mut form = ContactForm::new();
        let block = Block::Field {
            field: Field::Email,
            target: 0,
        };
        let before = block.render(&ctx(&theme, Some(&form)), 30).len();

        form.set(Field::Email, "not-an-email");
        form.validate();
        let lines = block.render(&ctx(&theme, Some(&form)), 30);
        assert_eq!(lines.len(), before);
        assert_eq!(plain(&lines).last().map(String::as_str), Some("Please enter a valid email"));
    }

    #[test]
    fn test_field_shows_placeholder_when_empty() {
        let theme = themes::light();
        let form = ContactForm::new();
        let block = Block::Field {
            field: Field::Name,
            target: 0,
        };
        let text = plain(&block.render(&ctx(&theme, Some(&form)), 30));
        assert_eq!(text[0], "Name");
        assert_eq!(text[1], "Hello...");
    }

    #[test]
    fn test_chips_wrap_and_mark_selection() {
        let theme = themes::light();
        let mut form = ContactForm::new();
        form.select_budget("$5k - $10k");
        let block = Block::Chips {
            label: "How much your budget range?",
            kind: ChipKind::Budget,
            options: vec![("$1k - $5k", 0), ("$5k - $10k", 1), ("$10k - $20k", 2)],
        };
        let lines = block.render(&ctx(&theme, Some(&form)), 26);
        // Label plus two rows of chips
        assert_eq!(lines.len(), 3);
        let selected = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .find(|s| s.content.contains("$5k - $10k"))
            .unwrap();
        assert_eq!(selected.style.bg, Some(theme.primary));
    }

    #[test]
    fn test_spread_aligns_right() {
        let line = spread(vec![Span::raw("Safe Space")], vec![Span::raw("→")], 20);
        assert_eq!(line_width(&line), 20);
        assert_eq!(line.spans.last().map(|s| s.content.as_ref()), Some("→"));
    }

    #[test]
    fn test_truncate_start_keeps_tail() {
        assert_eq!(truncate_start("hello@example.com", 8), "…ple.com");
        assert_eq!(truncate_start("short", 8), "short");
    }

    #[test]
    fn test_title_accent_style() {
        let theme = themes::dark();
        let block = Block::Title(vec![
            ("Frontend developer with a passion for ", false),
            ("great design", true),
        ]);
        let lines = block.render(&ctx(&theme, None), 80);
        let accent = lines[0].spans.iter().find(|s| s.content == "great").unwrap();
        assert!(accent.style.add_modifier.contains(Modifier::ITALIC));
    }
}
