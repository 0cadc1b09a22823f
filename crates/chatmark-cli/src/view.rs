//! Maps a parsed document onto styled terminal lines.

use chatmark_engine::{Block, Document, InlineSeq, InlineSpan};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const RULE_WIDTH: usize = 40;

pub fn document_lines(doc: &Document) -> Vec<Line<'static>> {
    let mut lines = vec![];
    let mut prev: Option<&Block> = None;

    for block in doc {
        let consecutive_paragraphs = matches!(
            (prev, block),
            (Some(Block::Paragraph { .. }), Block::Paragraph { .. })
        );
        if prev.is_some() && !consecutive_paragraphs {
            lines.push(Line::default());
        }
        push_block(&mut lines, block);
        prev = Some(block);
    }

    lines
}

fn push_block(lines: &mut Vec<Line<'static>>, block: &Block) {
    match block {
        Block::Heading { level, content } => {
            let mut style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
            if *level == 2 {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            lines.push(Line::from(inline_spans(content, style)));
        }
        Block::Paragraph { content } => {
            lines.push(Line::from(inline_spans(content, Style::default())));
        }
        Block::CodeBlock { language, text } => {
            let frame = Style::default().fg(Color::DarkGray);
            let label = language.as_deref().unwrap_or("code");
            lines.push(Line::from(Span::styled(format!("┌─ {label}"), frame)));
            for code_line in text.split('\n') {
                lines.push(Line::from(vec![
                    Span::styled("│ ", frame),
                    Span::styled(code_line.to_string(), Style::default().fg(Color::Yellow)),
                ]));
            }
            lines.push(Line::from(Span::styled("└─", frame)));
        }
        Block::List { ordered, items } => {
            for (i, item) in items.iter().enumerate() {
                let marker = if *ordered {
                    format!("{}. ", i + 1)
                } else {
                    "• ".to_string()
                };
                let mut spans = vec![Span::styled(marker, Style::default().fg(Color::Magenta))];
                spans.extend(inline_spans(item, Style::default()));
                lines.push(Line::from(spans));
            }
        }
        Block::Blockquote { content } => {
            let style = Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC);
            let mut spans = vec![Span::styled("▎ ", Style::default().fg(Color::DarkGray))];
            spans.extend(inline_spans(content, style));
            lines.push(Line::from(spans));
        }
        Block::HorizontalRule => {
            lines.push(Line::from(Span::styled(
                "─".repeat(RULE_WIDTH),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
}

fn inline_spans(seq: &InlineSeq, base: Style) -> Vec<Span<'static>> {
    let mut spans = vec![];
    for span in seq {
        match span {
            InlineSpan::Text(s) => spans.push(Span::styled(s.clone(), base)),
            InlineSpan::Bold(s) => {
                spans.push(Span::styled(s.clone(), base.add_modifier(Modifier::BOLD)))
            }
            InlineSpan::Italic(s) => {
                spans.push(Span::styled(s.clone(), base.add_modifier(Modifier::ITALIC)))
            }
            InlineSpan::Code(s) => spans.push(Span::styled(s.clone(), base.fg(Color::Yellow))),
            InlineSpan::Link { text, url } => {
                spans.push(Span::styled(
                    text.clone(),
                    base.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
                ));
                if text != url {
                    spans.push(Span::styled(
                        format!(" <{url}>"),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
            }
        }
    }
    spans
}
