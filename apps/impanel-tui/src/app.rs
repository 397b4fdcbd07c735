//! Application state and main render loop

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use impanel_core::render::DatasetCard;
use impanel_core::{PanelError, PublicationType, SearchBackend, SearchPanelController, Sorting};

use crate::keybindings::{normal_mode_action, Action};
use crate::mode::Mode;
use crate::views::{FilterField, FiltersView, ResultsView};
use crate::widgets::StatusBar;

/// Main application state
pub struct App<B: SearchBackend> {
    /// Current mode (NORMAL, INSERT, COMMAND, SELECT)
    pub mode: Mode,
    /// Panel controller: filter state, dispatch, presented page
    pub controller: SearchPanelController<B>,
    /// Focused filter field
    pub focus: FilterField,
    /// Selected card in the results list
    pub selected_card: usize,
    /// Selected tag badge while in select mode
    pub selected_tag: usize,
    /// Command input buffer
    pub command_buffer: String,
    /// Status message
    pub status_message: Option<String>,
    /// Whether to show the help overlay
    pub show_help: bool,
}

impl<B: SearchBackend> App<B> {
    /// Create a new application instance around a wired controller
    pub fn new(controller: SearchPanelController<B>) -> Self {
        Self {
            mode: Mode::Normal,
            controller,
            focus: FilterField::Query,
            selected_card: 0,
            selected_tag: 0,
            command_buffer: String::new(),
            status_message: None,
            show_help: false,
        }
    }

    /// Run the page-load search, optionally pre-seeding the query
    pub async fn initial_search(&mut self, query_param: Option<&str>) {
        Self::log_search_failure(self.controller.initial_search(query_param).await);
        self.clamp_selection();
    }

    /// Failed searches are logged and the previous page stands
    fn log_search_failure(result: Result<(), PanelError>) {
        if let Err(e) = result {
            tracing::warn!(error = %e, "search failed, keeping previous results");
        }
    }

    async fn run_search(&mut self) {
        Self::log_search_failure(self.controller.refresh().await);
        self.clamp_selection();
    }

    /// Keep card and tag selection inside the presented page
    fn clamp_selection(&mut self) {
        let card_count = self
            .controller
            .page()
            .map(|p| p.cards.len())
            .unwrap_or(0);
        if card_count == 0 {
            self.selected_card = 0;
        } else if self.selected_card >= card_count {
            self.selected_card = card_count - 1;
        }

        let tag_count = self
            .selected_card()
            .map(|c| c.tag_badges.len())
            .unwrap_or(0);
        if tag_count == 0 {
            self.selected_tag = 0;
        } else if self.selected_tag >= tag_count {
            self.selected_tag = tag_count - 1;
        }
    }

    fn selected_card(&self) -> Option<&DatasetCard> {
        self.controller
            .page()
            .and_then(|p| p.cards.get(self.selected_card))
    }

    /// Render the application
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();
        let extra_visible = self.controller.panel().extra_visible();
        let filter_height = FiltersView::content_height(extra_visible) + 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),             // Status bar
                Constraint::Length(filter_height), // Filter panel
                Constraint::Length(1),             // Count label
                Constraint::Min(0),                // Results
                Constraint::Length(1),             // Command line
            ])
            .split(size);

        let status_bar = Paragraph::new(StatusBar::new(self.mode).as_line())
            .style(Style::default().bg(Color::DarkGray));
        frame.render_widget(status_bar, chunks[0]);

        FiltersView::render(frame, chunks[1], self.controller.panel(), self.focus, self.mode);

        let count = self
            .controller
            .page()
            .map(|p| format!(" {}", p.count_label))
            .unwrap_or_default();
        frame.render_widget(Paragraph::new(count), chunks[2]);

        ResultsView::render(
            frame,
            chunks[3],
            self.controller.page(),
            self.selected_card,
            self.selected_tag,
            self.mode,
        );

        self.render_command_line(frame, chunks[4]);

        if self.show_help {
            self.render_help_overlay(frame, size);
        }
    }

    fn render_command_line(&self, frame: &mut Frame, area: Rect) {
        let content = match self.mode {
            Mode::Command => format!(":{}", self.command_buffer),
            _ => self
                .status_message
                .clone()
                .unwrap_or_else(|| "Press : for commands | i to edit filters".to_string()),
        };

        let paragraph = Paragraph::new(content);
        frame.render_widget(paragraph, area);
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_text = r#"
impanel - Help

Filters:
  Tab/S-Tab - Move focus across visible filter fields
  i         - Edit the focused field (every edit re-searches)
  Left/Right- Cycle type / toggle sorting on those fields (insert mode)
  e         - Show/hide the extra filters
  x         - Clear the extra filters
  C         - Clear all filters

Results:
  j/k     - Select card
  t       - Pick a tag on the selected card (Enter applies it)
  p       - Filter by the selected card's publication type
  r       - Re-run the search

Commands (: to enter command mode):
  :sort newest|oldest - Change result ordering
  :type <label>       - Set the type filter ("any" resets it)
  :clear              - Clear all filters
  :extra              - Show/hide the extra filters
  :refresh            - Re-run the search
  :q                  - Quit

Other:
  ?       - Toggle this help
  Esc     - Back / cancel
"#;

        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));

        let help_area = centered_rect(70, 80, area);
        frame.render_widget(ratatui::widgets::Clear, help_area);
        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, help_area);
    }

    /// Handle a key press, returns true if app should quit
    pub async fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match self.mode {
            Mode::Normal => self.handle_normal_key(code, modifiers).await,
            Mode::Insert => self.handle_insert_key(code).await,
            Mode::Command => self.handle_command_key(code).await,
            Mode::Select => self.handle_select_key(code).await,
        }
    }

    async fn handle_normal_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> bool {
        let Some(action) = normal_mode_action(code) else {
            return false;
        };

        match action {
            Action::Quit => return true,
            Action::EnterCommandMode => {
                self.mode = Mode::Command;
                self.command_buffer.clear();
            }
            Action::EnterInsertMode => {
                self.mode = Mode::Insert;
                self.status_message = Some(format!("Editing {}", self.focus.label()));
            }
            Action::EnterSelectMode => {
                let tag_count = self
                    .selected_card()
                    .map(|c| c.tag_badges.len())
                    .unwrap_or(0);
                if tag_count > 0 {
                    self.mode = Mode::Select;
                    self.selected_tag = 0;
                    self.status_message = Some("Pick a tag (Enter applies)".to_string());
                } else {
                    self.status_message = Some("Selected dataset has no tags".to_string());
                }
            }
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
            }
            Action::MoveDown => self.move_selection_down(),
            Action::MoveUp => self.move_selection_up(),
            Action::FocusNext => {
                let extra = self.controller.panel().extra_visible();
                self.focus = self.focus.next(extra);
            }
            Action::FocusPrev => {
                let extra = self.controller.panel().extra_visible();
                self.focus = self.focus.prev(extra);
            }
            Action::ApplyTypeBadge => {
                let label = self.selected_card().map(|c| c.type_badge.clone());
                if let Some(label) = label {
                    Self::log_search_failure(
                        self.controller.apply_publication_type(&label).await,
                    );
                    self.clamp_selection();
                    self.status_message = Some(format!("Type filter: {}", label));
                }
            }
            Action::ToggleExtra => self.toggle_extra_filters(),
            Action::ClearExtra => {
                Self::log_search_failure(self.controller.clear_extra_filters().await);
                self.clamp_selection();
                self.status_message = Some("Extra filters cleared".to_string());
            }
            Action::ClearAll => {
                Self::log_search_failure(self.controller.clear_filters().await);
                self.clamp_selection();
                self.focus = FilterField::Query;
                self.status_message = Some("All filters cleared".to_string());
            }
            Action::Refresh => self.run_search().await,
        }
        false
    }

    fn toggle_extra_filters(&mut self) {
        if self.controller.panel().extra_visible() {
            self.controller.hide_extra_filters();
            if !self.focus.is_primary() {
                self.focus = FilterField::Query;
            }
            self.status_message = Some("Extra filters hidden".to_string());
        } else {
            self.controller.show_extra_filters();
            self.status_message = Some("Extra filters shown".to_string());
        }
    }

    fn move_selection_down(&mut self) {
        let count = self
            .controller
            .page()
            .map(|p| p.cards.len())
            .unwrap_or(0);
        if count > 0 {
            self.selected_card = (self.selected_card + 1) % count;
            self.selected_tag = 0;
        }
    }

    fn move_selection_up(&mut self) {
        if self.selected_card > 0 {
            self.selected_card -= 1;
            self.selected_tag = 0;
        }
    }

    async fn handle_insert_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.status_message = Some("Normal mode".to_string());
            }
            KeyCode::Tab => {
                let extra = self.controller.panel().extra_visible();
                self.focus = self.focus.next(extra);
            }
            KeyCode::BackTab => {
                let extra = self.controller.panel().extra_visible();
                self.focus = self.focus.prev(extra);
            }
            KeyCode::Left | KeyCode::Right => match self.focus {
                FilterField::Type => {
                    self.cycle_publication_type(code == KeyCode::Right);
                    self.run_search().await;
                }
                FilterField::Sort => {
                    self.toggle_sorting();
                    self.run_search().await;
                }
                _ => {}
            },
            KeyCode::Backspace => {
                let edited = self
                    .focus
                    .text_mut(self.controller.panel_mut())
                    .map(|text| text.pop().is_some())
                    .unwrap_or(false);
                if edited {
                    self.run_search().await;
                }
            }
            KeyCode::Char(c) => {
                let edited = self
                    .focus
                    .text_mut(self.controller.panel_mut())
                    .map(|text| {
                        text.push(c);
                        true
                    })
                    .unwrap_or(false);
                if edited {
                    self.run_search().await;
                }
            }
            _ => {}
        }
        false
    }

    fn cycle_publication_type(&mut self, forward: bool) {
        let mut options: Vec<Option<PublicationType>> = vec![None];
        options.extend(PublicationType::all().iter().copied().map(Some));

        let current = self.controller.panel().publication_type;
        let pos = options.iter().position(|o| *o == current).unwrap_or(0);
        let next = if forward {
            (pos + 1) % options.len()
        } else {
            (pos + options.len() - 1) % options.len()
        };
        self.controller.panel_mut().publication_type = options[next];
    }

    fn toggle_sorting(&mut self) {
        let panel = self.controller.panel_mut();
        panel.sorting = match panel.sorting {
            Sorting::Newest => Sorting::Oldest,
            Sorting::Oldest => Sorting::Newest,
        };
    }

    async fn handle_command_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.command_buffer.clear();
            }
            KeyCode::Enter => {
                let should_quit = self.execute_command().await;
                self.mode = Mode::Normal;
                self.command_buffer.clear();
                if should_quit {
                    return true;
                }
            }
            KeyCode::Backspace => {
                self.command_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.command_buffer.push(c);
            }
            _ => {}
        }
        false
    }

    async fn handle_select_key(&mut self, code: KeyCode) -> bool {
        let tag_count = self
            .selected_card()
            .map(|c| c.tag_badges.len())
            .unwrap_or(0);

        match code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
            }
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('j') | KeyCode::Down => {
                if tag_count > 0 {
                    self.selected_tag = (self.selected_tag + 1) % tag_count;
                }
            }
            KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('k') | KeyCode::Up => {
                if self.selected_tag > 0 {
                    self.selected_tag -= 1;
                }
            }
            KeyCode::Enter => {
                let tag = self
                    .selected_card()
                    .and_then(|c| c.tag_badges.get(self.selected_tag))
                    .cloned();
                if let Some(tag) = tag {
                    Self::log_search_failure(self.controller.apply_tag(&tag).await);
                    self.clamp_selection();
                    self.status_message = Some(format!("Filtering by tag '{}'", tag));
                }
                self.mode = Mode::Normal;
            }
            _ => {}
        }
        false
    }

    async fn execute_command(&mut self) -> bool {
        let buffer = self.command_buffer.clone();
        let parts: Vec<&str> = buffer.split_whitespace().collect();
        if parts.is_empty() {
            return false;
        }

        match parts[0] {
            "q" | "quit" => {
                return true;
            }
            "clear" => {
                Self::log_search_failure(self.controller.clear_filters().await);
                self.clamp_selection();
                self.focus = FilterField::Query;
                self.status_message = Some("All filters cleared".to_string());
            }
            "extra" => {
                self.toggle_extra_filters();
            }
            "refresh" => {
                self.run_search().await;
            }
            "sort" => match parts.get(1).and_then(|s| Sorting::from_str_opt(s)) {
                Some(sorting) => {
                    self.controller.panel_mut().sorting = sorting;
                    self.run_search().await;
                    self.status_message = Some(format!("Sorting: {}", sorting));
                }
                None => {
                    self.status_message = Some("Usage: :sort newest|oldest".to_string());
                }
            },
            "type" => {
                let label = parts[1..].join(" ");
                if label.is_empty() {
                    self.status_message = Some("Usage: :type <label>".to_string());
                } else if label.eq_ignore_ascii_case("any") {
                    self.controller.panel_mut().publication_type = None;
                    self.run_search().await;
                    self.status_message = Some("Type filter: Any".to_string());
                } else {
                    let matched = PublicationType::from_label(&label).is_some();
                    Self::log_search_failure(
                        self.controller.apply_publication_type(&label).await,
                    );
                    self.clamp_selection();
                    self.status_message = Some(if matched {
                        format!("Type filter: {}", label.trim())
                    } else {
                        format!("Unknown type '{}', filter unchanged", label.trim())
                    });
                }
            }
            _ => {
                self.status_message = Some(format!("Unknown command: {}", parts[0]));
            }
        }
        false
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use impanel_core::{Dataset, DatasetAuthor, SearchCriteria, SearchError};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct StubBackend {
        calls: Rc<RefCell<Vec<SearchCriteria>>>,
        datasets: Vec<Dataset>,
    }

    impl SearchBackend for StubBackend {
        async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Dataset>, SearchError> {
            self.calls.borrow_mut().push(criteria.clone());
            Ok(self.datasets.clone())
        }
    }

    fn sample_dataset() -> Dataset {
        Dataset {
            id: 12,
            url: "http://localhost:5000/doi/10.1234/dataset12".to_string(),
            title: "Automotive feature model collection".to_string(),
            publication_type: "Data Management Plan".to_string(),
            created_at: "2024-03-05 15:07:00".to_string(),
            description: None,
            authors: vec![DatasetAuthor::new("Alice Example".to_string())],
            tags: vec!["automotive".to_string(), "configuration".to_string()],
            total_size_in_human_format: "120 KB".to_string(),
        }
    }

    fn app_with(datasets: Vec<Dataset>) -> (App<StubBackend>, Rc<RefCell<Vec<SearchCriteria>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let backend = StubBackend {
            calls: Rc::clone(&calls),
            datasets,
        };
        let controller = SearchPanelController::new(backend, "token");
        (App::new(controller), calls)
    }

    async fn press(app: &mut App<StubBackend>, code: KeyCode) -> bool {
        app.handle_key(code, KeyModifiers::NONE).await
    }

    async fn type_command(app: &mut App<StubBackend>, command: &str) {
        press(app, KeyCode::Char(':')).await;
        for c in command.chars() {
            press(app, KeyCode::Char(c)).await;
        }
        press(app, KeyCode::Enter).await;
    }

    #[tokio::test]
    async fn test_q_quits_in_normal_mode() {
        let (mut app, _) = app_with(vec![]);
        assert!(press(&mut app, KeyCode::Char('q')).await);
    }

    #[tokio::test]
    async fn test_quit_command() {
        let (mut app, _) = app_with(vec![]);
        press(&mut app, KeyCode::Char(':')).await;
        press(&mut app, KeyCode::Char('q')).await;
        assert!(press(&mut app, KeyCode::Enter).await);
    }

    #[tokio::test]
    async fn test_insert_edit_searches_per_keystroke() {
        let (mut app, calls) = app_with(vec![sample_dataset()]);

        press(&mut app, KeyCode::Char('i')).await;
        assert_eq!(app.mode, Mode::Insert);
        press(&mut app, KeyCode::Char('a')).await;
        press(&mut app, KeyCode::Char('b')).await;

        assert_eq!(calls.borrow().len(), 2);
        assert_eq!(calls.borrow()[0].query, "a");
        assert_eq!(calls.borrow()[1].query, "ab");
    }

    #[tokio::test]
    async fn test_backspace_on_empty_field_does_not_search() {
        let (mut app, calls) = app_with(vec![]);

        press(&mut app, KeyCode::Char('i')).await;
        press(&mut app, KeyCode::Backspace).await;
        assert!(calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_type_field_cycles_with_arrows() {
        let (mut app, calls) = app_with(vec![]);

        press(&mut app, KeyCode::Tab).await;
        assert_eq!(app.focus, FilterField::Type);
        press(&mut app, KeyCode::Char('i')).await;
        press(&mut app, KeyCode::Right).await;

        assert_eq!(
            app.controller.panel().publication_type,
            Some(PublicationType::None)
        );
        assert_eq!(calls.borrow().len(), 1);
        assert_eq!(calls.borrow()[0].publication_type, "none");

        // cycling back wraps to Any
        press(&mut app, KeyCode::Left).await;
        assert_eq!(app.controller.panel().publication_type, None);
        assert_eq!(calls.borrow()[1].publication_type, "any");
    }

    #[tokio::test]
    async fn test_sort_field_toggles_with_arrows() {
        let (mut app, calls) = app_with(vec![]);

        press(&mut app, KeyCode::Tab).await;
        press(&mut app, KeyCode::Tab).await;
        assert_eq!(app.focus, FilterField::Sort);
        press(&mut app, KeyCode::Char('i')).await;
        press(&mut app, KeyCode::Right).await;

        assert_eq!(app.controller.panel().sorting, Sorting::Oldest);
        assert_eq!(calls.borrow()[0].sorting, "oldest");
    }

    #[tokio::test]
    async fn test_toggle_extra_does_not_search_and_resets_focus() {
        let (mut app, calls) = app_with(vec![]);

        press(&mut app, KeyCode::Char('e')).await;
        assert!(app.controller.panel().extra_visible());

        // move focus into the extra fields, then hide the panel
        for _ in 0..3 {
            press(&mut app, KeyCode::Tab).await;
        }
        assert_eq!(app.focus, FilterField::Description);
        press(&mut app, KeyCode::Char('e')).await;

        assert!(!app.controller.panel().extra_visible());
        assert_eq!(app.focus, FilterField::Query);
        assert!(calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_clear_all_key_searches_once_with_defaults() {
        let (mut app, calls) = app_with(vec![]);

        app.controller.panel_mut().query = "ocean".to_string();
        app.controller.panel_mut().extra.tags = "reef".to_string();
        press(&mut app, KeyCode::Char('C')).await;

        assert_eq!(calls.borrow().len(), 1);
        let expected = SearchCriteria {
            csrf_token: "token".to_string(),
            ..Default::default()
        };
        assert_eq!(calls.borrow()[0], expected);
    }

    #[tokio::test]
    async fn test_clear_extra_key_keeps_query() {
        let (mut app, calls) = app_with(vec![]);

        app.controller.panel_mut().query = "ocean".to_string();
        app.controller.panel_mut().extra.authors = "Doe".to_string();
        press(&mut app, KeyCode::Char('x')).await;

        assert_eq!(calls.borrow().len(), 1);
        assert_eq!(calls.borrow()[0].query, "ocean");
        assert_eq!(calls.borrow()[0].authors, "");
    }

    #[tokio::test]
    async fn test_select_mode_applies_tag() {
        let (mut app, calls) = app_with(vec![sample_dataset()]);
        app.initial_search(None).await;

        press(&mut app, KeyCode::Char('t')).await;
        assert_eq!(app.mode, Mode::Select);
        press(&mut app, KeyCode::Char('l')).await;
        press(&mut app, KeyCode::Enter).await;

        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(calls.borrow().len(), 2);
        assert_eq!(calls.borrow()[1].query, "configuration");
    }

    #[tokio::test]
    async fn test_select_mode_needs_tags() {
        let (mut app, _) = app_with(vec![]);
        app.initial_search(None).await;

        press(&mut app, KeyCode::Char('t')).await;
        assert_eq!(app.mode, Mode::Normal);
    }

    #[tokio::test]
    async fn test_p_applies_type_badge() {
        let (mut app, calls) = app_with(vec![sample_dataset()]);
        app.initial_search(None).await;

        press(&mut app, KeyCode::Char('p')).await;
        assert_eq!(calls.borrow().len(), 2);
        assert_eq!(calls.borrow()[1].publication_type, "datamanagementplan");
    }

    #[tokio::test]
    async fn test_sort_command() {
        let (mut app, calls) = app_with(vec![]);

        type_command(&mut app, "sort oldest").await;
        assert_eq!(app.controller.panel().sorting, Sorting::Oldest);
        assert_eq!(calls.borrow().len(), 1);
        assert_eq!(calls.borrow()[0].sorting, "oldest");
    }

    #[tokio::test]
    async fn test_type_command_with_label() {
        let (mut app, calls) = app_with(vec![]);

        type_command(&mut app, "type Journal Article").await;
        assert_eq!(
            app.controller.panel().publication_type,
            Some(PublicationType::JournalArticle)
        );
        assert_eq!(calls.borrow()[0].publication_type, "article");
    }

    #[tokio::test]
    async fn test_type_command_any_resets() {
        let (mut app, calls) = app_with(vec![]);

        app.controller.panel_mut().publication_type = Some(PublicationType::Book);
        type_command(&mut app, "type any").await;
        assert_eq!(app.controller.panel().publication_type, None);
        assert_eq!(calls.borrow()[0].publication_type, "any");
    }

    #[tokio::test]
    async fn test_unknown_command_sets_status() {
        let (mut app, calls) = app_with(vec![]);

        type_command(&mut app, "frobnicate").await;
        assert!(calls.borrow().is_empty());
        assert_eq!(
            app.status_message.as_deref(),
            Some("Unknown command: frobnicate")
        );
    }

    #[tokio::test]
    async fn test_card_selection_wraps_down() {
        let mut second = sample_dataset();
        second.id = 15;
        let (mut app, _) = app_with(vec![sample_dataset(), second]);
        app.initial_search(None).await;

        press(&mut app, KeyCode::Char('j')).await;
        assert_eq!(app.selected_card, 1);
        press(&mut app, KeyCode::Char('j')).await;
        assert_eq!(app.selected_card, 0);
        press(&mut app, KeyCode::Char('k')).await;
        assert_eq!(app.selected_card, 0);
    }
}
