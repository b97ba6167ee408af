//! Rendering glue for the tag editor.
//!
//! Draws the chip row with the edit point at the cursor and the suggestion
//! overlay below it, and hands back a [`HitMap`] so hosts can translate mouse
//! clicks into editor calls. All interaction state lives in
//! [`TagEditor`]; this module only reads it.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::editor::TagEditor;
use crate::tag::{Tag, TagKind};

/// One rendered line of the suggestion overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionRow {
    /// A non-interactive partition heading.
    Title(&'static str),
    /// The option at this index in the filtered list.
    Entry(usize),
}

/// Geometry captured during rendering, for mouse hit-testing.
#[derive(Debug, Default, Clone)]
pub struct HitMap {
    container: Rect,
    rows: Vec<(Rect, usize)>,
}

impl HitMap {
    /// Whether a click at (column, row) landed inside the editor container.
    pub fn container_contains(&self, column: u16, row: u16) -> bool {
        self.container.contains(ratatui::layout::Position::new(column, row))
    }

    /// The suggestion index under (column, row), if any.
    pub fn suggestion_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = ratatui::layout::Position::new(column, row);
        self.rows
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|&(_, index)| index)
    }
}

/// Render the editor and return the geometry for hit-testing.
pub fn render(frame: &mut Frame, area: Rect, editor: &TagEditor, tags: &[Tag]) -> HitMap {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_chips(frame, chunks[0], editor, tags);

    let mut hits = HitMap {
        container: chunks[0],
        rows: Vec::new(),
    };

    // Hidden unless focused with a long-enough query, and never when empty.
    if editor.expandable() && !editor.options().is_empty() {
        render_suggestions(frame, chunks[1], editor, &mut hits);
    }

    hits
}

/// Render the chip row with the edit point at the cursor.
fn render_chips(frame: &mut Frame, area: Rect, editor: &TagEditor, tags: &[Tag]) {
    let border_style = if editor.is_focused() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" Tags ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cursor = editor.cursor();
    let mut spans: Vec<Span> = Vec::new();

    for (i, tag) in tags.iter().enumerate() {
        if i == cursor {
            push_edit_point(&mut spans, editor);
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {} ", tag.name),
            Style::default().fg(Color::White).bg(Color::Blue),
        ));
        spans.push(Span::raw(" "));
    }
    if cursor >= tags.len() {
        push_edit_point(&mut spans, editor);
    }

    let paragraph = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// Append the edit-point spans: the query being composed, or the placeholder.
fn push_edit_point(spans: &mut Vec<Span<'_>>, editor: &TagEditor) {
    if editor.query().is_empty() {
        if editor.is_focused() {
            spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        }
        spans.push(Span::styled(
            editor.config().placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            editor.query().to_string(),
            Style::default().fg(Color::Yellow),
        ));
        if editor.is_focused() {
            spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        }
    }
}

/// Render the suggestion overlay and record row geometry in `hits`.
fn render_suggestions(frame: &mut Frame, area: Rect, editor: &TagEditor, hits: &mut HitMap) {
    let options = editor.options();
    let rows = suggestion_rows(options);

    let height = (rows.len() as u16 + 2).min(area.height);
    let list_area = Rect::new(area.x, area.y, area.width, height);

    frame.render_widget(Clear, list_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(list_area);
    frame.render_widget(block, list_area);

    let mut lines: Vec<Line> = Vec::with_capacity(rows.len());
    for (row_index, row) in rows.iter().enumerate() {
        match row {
            SuggestionRow::Title(title) => {
                lines.push(Line::from(Span::styled(
                    *title,
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            SuggestionRow::Entry(index) => {
                let tag = &options[*index];
                let active = editor.selected_index() == Some(*index) && !tag.disabled;

                let mut line = if tag.disabled {
                    Line::from(Span::styled(
                        format!("  {}", tag.name),
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::ITALIC),
                    ))
                } else {
                    let mut marked = highlight_match(&tag.name, editor.query());
                    marked.spans.insert(
                        0,
                        Span::raw(if active { "> " } else { "  " }.to_string()),
                    );
                    marked
                };
                if active {
                    line = line.style(
                        Style::default()
                            .bg(Color::DarkGray)
                            .add_modifier(Modifier::BOLD),
                    );
                }
                lines.push(line);

                let row_y = inner.y + row_index as u16;
                if row_y < inner.y + inner.height {
                    hits.rows
                        .push((Rect::new(inner.x, row_y, inner.width, 1), *index));
                }
            }
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Lay out the filtered options as overlay rows with partition headings.
///
/// Options arrive groups-first from the matcher; a "Groups" heading precedes
/// them and a "Labels" heading precedes label-typed entries.
pub fn suggestion_rows(options: &[Tag]) -> Vec<SuggestionRow> {
    let mut rows = Vec::new();

    let has_groups = options.iter().any(|tag| tag.kind == TagKind::Group);
    let has_labels = options.iter().any(|tag| tag.kind == TagKind::Label);

    if has_groups {
        rows.push(SuggestionRow::Title("Groups"));
    }
    for (index, tag) in options.iter().enumerate() {
        if tag.kind == TagKind::Group {
            rows.push(SuggestionRow::Entry(index));
        }
    }

    if has_labels {
        rows.push(SuggestionRow::Title("Labels"));
    }
    for (index, tag) in options.iter().enumerate() {
        if tag.kind != TagKind::Group {
            rows.push(SuggestionRow::Entry(index));
        }
    }

    rows
}

/// Style the matched query substring within a candidate name.
pub fn highlight_match(text: &str, query: &str) -> Line<'static> {
    if query.is_empty() {
        return Line::from(text.to_string());
    }

    let text_lower = text.to_lowercase();
    let query_lower = query.to_lowercase();
    // Lowercasing can change byte lengths for some scripts; skip marking then.
    if text.len() != text_lower.len() {
        return Line::from(text.to_string());
    }

    let mut spans = Vec::new();
    let mut last_end = 0;

    for (start, _) in text_lower.match_indices(&query_lower) {
        if start < last_end {
            continue;
        }
        if start > last_end {
            spans.push(Span::raw(text[last_end..start].to_string()));
        }
        spans.push(Span::styled(
            text[start..start + query_lower.len()].to_string(),
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
        last_end = start + query_lower.len();
    }

    if last_end < text.len() {
        spans.push(Span::raw(text[last_end..].to_string()));
    }

    if spans.is_empty() {
        Line::from(text.to_string())
    } else {
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_rows_plain_items() {
        let options = vec![Tag::new("aa"), Tag::new("ab")];
        let rows = suggestion_rows(&options);
        assert_eq!(
            rows,
            vec![SuggestionRow::Entry(0), SuggestionRow::Entry(1)]
        );
    }

    #[test]
    fn test_suggestion_rows_with_partitions() {
        let options = vec![
            Tag::new("backend").kind(TagKind::Group),
            Tag::new("bug").kind(TagKind::Label),
            Tag::new("blocked").kind(TagKind::Label),
        ];
        let rows = suggestion_rows(&options);
        assert_eq!(
            rows,
            vec![
                SuggestionRow::Title("Groups"),
                SuggestionRow::Entry(0),
                SuggestionRow::Title("Labels"),
                SuggestionRow::Entry(1),
                SuggestionRow::Entry(2),
            ]
        );
    }

    #[test]
    fn test_highlight_match_marks_substring() {
        let line = highlight_match("France", "fr");
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].content, "Fr");
        assert_eq!(line.spans[1].content, "ance");
    }

    #[test]
    fn test_highlight_match_empty_query() {
        let line = highlight_match("France", "");
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].content, "France");
    }

    #[test]
    fn test_highlight_match_no_occurrence() {
        let line = highlight_match("France", "zz");
        assert_eq!(line.spans.len(), 1);
    }

    #[test]
    fn test_hitmap_lookup() {
        let hits = HitMap {
            container: Rect::new(0, 0, 40, 3),
            rows: vec![
                (Rect::new(1, 4, 38, 1), 0),
                (Rect::new(1, 5, 38, 1), 1),
            ],
        };

        assert!(hits.container_contains(5, 1));
        assert!(!hits.container_contains(5, 10));
        assert_eq!(hits.suggestion_at(10, 4), Some(0));
        assert_eq!(hits.suggestion_at(10, 5), Some(1));
        assert_eq!(hits.suggestion_at(10, 6), None);
    }
}
