//! Results list view
//!
//! Renders the dataset cards from the presented page, the selected
//! card highlighted. An empty page shows the not-found placeholder in
//! place of the list.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use impanel_core::render::VIEW_LINK_TEXT;
use impanel_core::ResultsPage;

use crate::mode::Mode;

/// Placeholder shown when a completed search returned nothing
pub const NOT_FOUND_TEXT: &str = "No datasets found with those filters";

/// Renders the results block
pub struct ResultsView;

impl ResultsView {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        page: Option<&ResultsPage>,
        selected_card: usize,
        selected_tag: usize,
        mode: Mode,
    ) {
        let block = Block::default().title("Results").borders(Borders::ALL);

        let page = match page {
            Some(page) => page,
            None => {
                let paragraph = Paragraph::new("Searching...").block(block);
                frame.render_widget(paragraph, area);
                return;
            }
        };

        if page.is_empty() {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    NOT_FOUND_TEXT,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Press C to clear all filters",
                    Style::default().fg(Color::Gray),
                )),
            ];
            let paragraph = Paragraph::new(lines).block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let items: Vec<ListItem> = page
            .cards
            .iter()
            .enumerate()
            .map(|(i, card)| {
                let is_selected = i == selected_card;
                let mut lines = vec![
                    Line::from(vec![
                        Span::styled(
                            card.title.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw("  "),
                        Span::styled(
                            format!("[{}]", card.type_badge),
                            Style::default().fg(Color::Cyan),
                        ),
                    ]),
                    Line::from(Span::styled(
                        card.created.clone(),
                        Style::default().fg(Color::Gray),
                    )),
                ];

                if !card.author_lines.is_empty() {
                    lines.push(Line::from(card.author_lines.join("; ")));
                }
                if !card.description.is_empty() {
                    lines.push(Line::from(card.description.clone()));
                }
                if !card.tag_badges.is_empty() {
                    lines.push(Self::tags_line(
                        &card.tag_badges,
                        is_selected && mode == Mode::Select,
                        selected_tag,
                    ));
                }
                lines.push(Line::from(Span::styled(
                    format!(
                        "{}: {}  |  {} at {}",
                        VIEW_LINK_TEXT, card.view_url, card.download_label, card.download_url
                    ),
                    Style::default().fg(Color::Gray),
                )));
                lines.push(Line::from(""));

                let style = if is_selected {
                    Style::default().bg(Color::DarkGray)
                } else {
                    Style::default()
                };
                ListItem::new(lines).style(style)
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_widget(list, area);
    }

    fn tags_line(tags: &[String], picking: bool, selected_tag: usize) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, tag) in tags.iter().enumerate() {
            let style = if picking && i == selected_tag {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Yellow)
            };
            spans.push(Span::styled(format!("#{}", tag), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}
