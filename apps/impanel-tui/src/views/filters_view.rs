//! Filter panel view
//!
//! Renders the primary filter row (query, type, sorting) and, while
//! shown, the extra-filters rows. Focus moves across the visible
//! fields only.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use impanel_core::FilterPanel;

use crate::mode::Mode;

/// A focusable filter field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Query,
    Type,
    Sort,
    Description,
    Authors,
    Affiliation,
    Orcid,
    CsvFilename,
    CsvTitle,
    PublicationDoi,
    Tags,
}

const PRIMARY_FIELDS: &[FilterField] = &[FilterField::Query, FilterField::Type, FilterField::Sort];

const ALL_FIELDS: &[FilterField] = &[
    FilterField::Query,
    FilterField::Type,
    FilterField::Sort,
    FilterField::Description,
    FilterField::Authors,
    FilterField::Affiliation,
    FilterField::Orcid,
    FilterField::CsvFilename,
    FilterField::CsvTitle,
    FilterField::PublicationDoi,
    FilterField::Tags,
];

impl FilterField {
    /// Display label for the field
    pub fn label(&self) -> &'static str {
        match self {
            FilterField::Query => "Query",
            FilterField::Type => "Type",
            FilterField::Sort => "Sort",
            FilterField::Description => "Description",
            FilterField::Authors => "Authors",
            FilterField::Affiliation => "Affiliation",
            FilterField::Orcid => "ORCID",
            FilterField::CsvFilename => "CSV filename",
            FilterField::CsvTitle => "CSV title",
            FilterField::PublicationDoi => "DOI",
            FilterField::Tags => "Tags",
        }
    }

    /// True for the always-visible fields
    pub fn is_primary(&self) -> bool {
        PRIMARY_FIELDS.contains(self)
    }

    /// The fields focus can reach given the extra panel's visibility
    pub fn visible_fields(extra_visible: bool) -> &'static [FilterField] {
        if extra_visible {
            ALL_FIELDS
        } else {
            PRIMARY_FIELDS
        }
    }

    /// Next field in focus order, wrapping
    pub fn next(self, extra_visible: bool) -> FilterField {
        let fields = Self::visible_fields(extra_visible);
        let pos = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(pos + 1) % fields.len()]
    }

    /// Previous field in focus order, wrapping
    pub fn prev(self, extra_visible: bool) -> FilterField {
        let fields = Self::visible_fields(extra_visible);
        let pos = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(pos + fields.len() - 1) % fields.len()]
    }

    /// The field's text value, `None` for the type and sort selectors
    pub fn text_value<'a>(&self, panel: &'a FilterPanel) -> Option<&'a str> {
        match self {
            FilterField::Query => Some(&panel.query),
            FilterField::Type | FilterField::Sort => None,
            FilterField::Description => Some(&panel.extra.description),
            FilterField::Authors => Some(&panel.extra.authors),
            FilterField::Affiliation => Some(&panel.extra.affiliation),
            FilterField::Orcid => Some(&panel.extra.orcid),
            FilterField::CsvFilename => Some(&panel.extra.csv_filename),
            FilterField::CsvTitle => Some(&panel.extra.csv_title),
            FilterField::PublicationDoi => Some(&panel.extra.publication_doi),
            FilterField::Tags => Some(&panel.extra.tags),
        }
    }

    /// Mutable access to the field's text value, `None` for selectors
    pub fn text_mut<'a>(&self, panel: &'a mut FilterPanel) -> Option<&'a mut String> {
        match self {
            FilterField::Query => Some(&mut panel.query),
            FilterField::Type | FilterField::Sort => None,
            FilterField::Description => Some(&mut panel.extra.description),
            FilterField::Authors => Some(&mut panel.extra.authors),
            FilterField::Affiliation => Some(&mut panel.extra.affiliation),
            FilterField::Orcid => Some(&mut panel.extra.orcid),
            FilterField::CsvFilename => Some(&mut panel.extra.csv_filename),
            FilterField::CsvTitle => Some(&mut panel.extra.csv_title),
            FilterField::PublicationDoi => Some(&mut panel.extra.publication_doi),
            FilterField::Tags => Some(&mut panel.extra.tags),
        }
    }
}

/// Renders the filter panel block
pub struct FiltersView;

impl FiltersView {
    /// Rows of content inside the block, border excluded
    pub fn content_height(extra_visible: bool) -> u16 {
        if extra_visible {
            3
        } else {
            1
        }
    }

    pub fn render(
        frame: &mut Frame,
        area: Rect,
        panel: &FilterPanel,
        focus: FilterField,
        mode: Mode,
    ) {
        let mut lines = vec![Self::field_line(
            &[FilterField::Query, FilterField::Type, FilterField::Sort],
            panel,
            focus,
            mode,
        )];

        if panel.extra_visible() {
            lines.push(Self::field_line(
                &[
                    FilterField::Description,
                    FilterField::Authors,
                    FilterField::Affiliation,
                    FilterField::Orcid,
                ],
                panel,
                focus,
                mode,
            ));
            lines.push(Self::field_line(
                &[
                    FilterField::CsvFilename,
                    FilterField::CsvTitle,
                    FilterField::PublicationDoi,
                    FilterField::Tags,
                ],
                panel,
                focus,
                mode,
            ));
        }

        let title = if panel.extra_visible() {
            "Filters (e hides extra)"
        } else {
            "Filters (e shows extra)"
        };
        let paragraph =
            Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }

    fn field_line(
        fields: &[FilterField],
        panel: &FilterPanel,
        focus: FilterField,
        mode: Mode,
    ) -> Line<'static> {
        let mut spans = Vec::new();
        for field in fields {
            let value = Self::field_value(*field, panel);
            let style = if *field == focus {
                let bg = if mode == Mode::Insert {
                    Color::Green
                } else {
                    Color::Blue
                };
                Style::default()
                    .fg(Color::White)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::styled(
                format!(" {}: {} ", field.label(), value),
                style,
            ));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn field_value(field: FilterField, panel: &FilterPanel) -> String {
        match field {
            FilterField::Type => panel
                .publication_type
                .map(|t| t.label().to_string())
                .unwrap_or_else(|| "Any".to_string()),
            FilterField::Sort => panel.sorting.as_str().to_string(),
            _ => field
                .text_value(panel)
                .unwrap_or_default()
                .to_string(),
        }
    }
}
