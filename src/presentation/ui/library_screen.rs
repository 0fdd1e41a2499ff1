//! Library screen listing all presentations.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};
use tracing::{debug, info, warn};

use crate::domain::entities::{Library, Presentation, PresentationId};
use crate::domain::sort::SortPolicy;
use crate::presentation::widgets::{StatusBar, TextInput};

/// What the library screen asks the app to do after a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryAction {
    /// Nothing to do.
    None,
    /// Open the deck screen for a presentation.
    Open(PresentationId),
    /// Exit the application.
    Quit,
}

enum LibraryMode {
    Browsing,
    Creating { input: TextInput },
}

/// Top-level screen: the sorted presentation list.
pub struct LibraryScreen {
    sort_policy: SortPolicy,
    selected: usize,
    mode: LibraryMode,
    status: StatusBar,
    list_state: ListState,
}

impl LibraryScreen {
    /// Creates the screen with an initial sort policy.
    #[must_use]
    pub fn new(sort_policy: SortPolicy) -> Self {
        Self {
            sort_policy,
            selected: 0,
            mode: LibraryMode::Browsing,
            status: Self::browsing_status(sort_policy),
            list_state: ListState::default(),
        }
    }

    /// Returns the active sort policy.
    #[must_use]
    pub const fn sort_policy(&self) -> SortPolicy {
        self.sort_policy
    }

    /// Returns the selected row in sorted order.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    fn browsing_status(sort_policy: SortPolicy) -> StatusBar {
        StatusBar::info(format!("Sort: {sort_policy}"))
            .hints("n New | d Delete | r Reset | s Sort | Enter Open | q Quit")
    }

    fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Handles a key event, mutating the library as requested.
    pub fn handle_key(&mut self, key: KeyEvent, library: &mut Library) -> LibraryAction {
        if matches!(self.mode, LibraryMode::Creating { .. }) {
            self.handle_creating_key(key, library);
            return LibraryAction::None;
        }
        self.handle_browsing_key(key, library)
    }

    fn handle_creating_key(&mut self, key: KeyEvent, library: &mut Library) {
        let LibraryMode::Creating { input } = &mut self.mode else {
            return;
        };
        match key.code {
            KeyCode::Enter => {
                let title = input.value().to_string();
                let presentation = library.create_presentation(title);
                info!(id = %presentation.id(), title = %presentation.title(), "Created presentation");

                // land the selection on the new entry wherever the
                // current sort puts it
                let id = presentation.id();
                let view = library.sorted_view(self.sort_policy);
                self.selected = view
                    .iter()
                    .position(|p| p.id() == id)
                    .unwrap_or(view.len().saturating_sub(1));

                self.mode = LibraryMode::Browsing;
                self.status = StatusBar::success("Presentation created")
                    .hints("n New | d Delete | r Reset | s Sort | Enter Open | q Quit");
            }
            KeyCode::Esc => {
                self.mode = LibraryMode::Browsing;
                self.status = Self::browsing_status(self.sort_policy);
            }
            _ => {
                input.handle_key(key);
            }
        }
    }

    fn handle_browsing_key(&mut self, key: KeyEvent, library: &mut Library) -> LibraryAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected += 1;
                self.clamp_selection(library.len());
            }
            KeyCode::Enter => {
                let view = library.sorted_view(self.sort_policy);
                if let Some(presentation) = view.get(self.selected) {
                    return LibraryAction::Open(presentation.id());
                }
            }
            KeyCode::Char('n') => {
                let mut input = TextInput::new("Title").placeholder("New presentation title");
                input.set_focused(true);
                self.mode = LibraryMode::Creating { input };
                self.status = StatusBar::info("New presentation").hints("Enter Create | Esc Cancel");
            }
            KeyCode::Char('d') => {
                let target = library
                    .sorted_view(self.sort_policy)
                    .get(self.selected)
                    .map(Presentation::id);
                if let Some(id) = target {
                    match library.remove_presentation_by_id(id) {
                        Ok(removed) => {
                            debug!(id = %id, title = %removed.title(), "Removed presentation");
                            self.clamp_selection(library.len());
                            self.status = StatusBar::success("Presentation deleted").hints(
                                "n New | d Delete | r Reset | s Sort | Enter Open | q Quit",
                            );
                        }
                        Err(e) => {
                            warn!(error = %e, "Remove failed");
                            self.status = StatusBar::error(e.to_string());
                        }
                    }
                }
            }
            KeyCode::Char('r') => {
                library.reset();
                self.selected = 0;
                info!("Library reset to starter content");
                self.status = StatusBar::success("Library reset")
                    .hints("n New | d Delete | r Reset | s Sort | Enter Open | q Quit");
            }
            KeyCode::Char('s') => {
                self.sort_policy = self.sort_policy.cycled();
                debug!(policy = %self.sort_policy, "Sort policy changed");
                self.status = Self::browsing_status(self.sort_policy);
            }
            KeyCode::Char('q') => return LibraryAction::Quit,
            _ => {}
        }
        LibraryAction::None
    }

    /// Renders the screen.
    pub fn render(&mut self, library: &Library, area: Rect, buf: &mut Buffer) {
        let layout = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]);
        let [list_area, status_area] = layout.areas(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Presentations ");
        let inner = block.inner(list_area);
        block.render(list_area, buf);

        let view = library.sorted_view(self.sort_policy);
        if view.is_empty() {
            Paragraph::new("No presentations. Press 'n' to create one.")
                .style(Style::default().fg(Color::DarkGray))
                .render(inner, buf);
        } else {
            let items: Vec<ListItem> = view
                .iter()
                .map(|presentation| {
                    let slides = presentation.slide_count();
                    let label = if presentation.title().is_empty() {
                        Span::styled("(untitled)", Style::default().fg(Color::DarkGray))
                    } else {
                        Span::raw(presentation.title().to_string())
                    };
                    ListItem::new(Line::from(vec![
                        label,
                        Span::styled(
                            format!("  {slides} slides"),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]))
                })
                .collect();

            self.list_state.select(Some(self.selected));
            let list = List::new(items)
                .highlight_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");
            StatefulWidget::render(list, inner, buf, &mut self.list_state);
        }

        if let LibraryMode::Creating { input } = &self.mode {
            let vertical = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(3),
                Constraint::Fill(1),
            ]);
            let [_, center, _] = vertical.areas(inner);
            let horizontal = Layout::horizontal([
                Constraint::Fill(1),
                Constraint::Min(40),
                Constraint::Fill(1),
            ]);
            let [_, input_area, _] = horizontal.areas(center);

            Clear.render(input_area, buf);
            input.render(input_area, buf);
        }

        (&self.status).render(status_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(screen: &mut LibraryScreen, library: &mut Library, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)), library);
        }
    }

    #[test]
    fn test_create_flow_appends_presentation() {
        let mut library = Library::empty();
        let mut screen = LibraryScreen::new(SortPolicy::CreationOrder);

        screen.handle_key(key(KeyCode::Char('n')), &mut library);
        type_str(&mut screen, &mut library, "My Deck");
        screen.handle_key(key(KeyCode::Enter), &mut library);

        assert_eq!(library.len(), 1);
        assert_eq!(library.get(0).unwrap().title(), "My Deck");
        assert_eq!(library.get(0).unwrap().creation_order(), 1);
    }

    #[test]
    fn test_create_flow_cancelled_leaves_library_untouched() {
        let mut library = Library::empty();
        let mut screen = LibraryScreen::new(SortPolicy::CreationOrder);

        screen.handle_key(key(KeyCode::Char('n')), &mut library);
        type_str(&mut screen, &mut library, "Discarded");
        screen.handle_key(key(KeyCode::Esc), &mut library);

        assert!(library.is_empty());
    }

    #[test]
    fn test_typed_title_is_not_treated_as_shortcut() {
        let mut library = Library::empty();
        let mut screen = LibraryScreen::new(SortPolicy::CreationOrder);

        // 'q' and 'd' are plain characters while the prompt is open
        screen.handle_key(key(KeyCode::Char('n')), &mut library);
        type_str(&mut screen, &mut library, "qd");
        let action = screen.handle_key(key(KeyCode::Enter), &mut library);

        assert_eq!(action, LibraryAction::None);
        assert_eq!(library.get(0).unwrap().title(), "qd");
    }

    #[test]
    fn test_delete_removes_selected_row_in_sorted_order() {
        let mut library = Library::empty();
        library.create_presentation("b");
        library.create_presentation("a");
        let mut screen = LibraryScreen::new(SortPolicy::TitleDescending);

        // sorted: a, b; row 0 is "a", which is storage index 1
        screen.handle_key(key(KeyCode::Char('d')), &mut library);

        assert_eq!(library.len(), 1);
        assert_eq!(library.get(0).unwrap().title(), "b");
    }

    #[test]
    fn test_open_reports_selected_presentation() {
        let mut library = Library::empty();
        library.create_presentation("first");
        library.create_presentation("second");
        let mut screen = LibraryScreen::new(SortPolicy::CreationOrder);

        screen.handle_key(key(KeyCode::Down), &mut library);
        let action = screen.handle_key(key(KeyCode::Enter), &mut library);

        let second = library.get(1).map(Presentation::id).unwrap();
        assert_eq!(action, LibraryAction::Open(second));
    }

    #[test]
    fn test_reset_reseeds_and_resets_selection() {
        let mut library = Library::empty();
        library.create_presentation("lonely");
        let mut screen = LibraryScreen::new(SortPolicy::CreationOrder);

        screen.handle_key(key(KeyCode::Char('r')), &mut library);

        assert_eq!(library.len(), 5);
        assert_eq!(screen.selected(), 0);
        assert_eq!(library.get(0).unwrap().creation_order(), 1);
    }

    #[test]
    fn test_sort_cycles_through_menu() {
        let mut library = Library::empty();
        let mut screen = LibraryScreen::new(SortPolicy::CreationOrder);

        screen.handle_key(key(KeyCode::Char('s')), &mut library);
        assert_eq!(screen.sort_policy(), SortPolicy::TitleDescending);
        screen.handle_key(key(KeyCode::Char('s')), &mut library);
        assert_eq!(screen.sort_policy(), SortPolicy::TitleAscending);
        screen.handle_key(key(KeyCode::Char('s')), &mut library);
        assert_eq!(screen.sort_policy(), SortPolicy::CreationOrder);
    }

    #[test]
    fn test_quit() {
        let mut library = Library::empty();
        let mut screen = LibraryScreen::new(SortPolicy::CreationOrder);
        let action = screen.handle_key(key(KeyCode::Char('q')), &mut library);
        assert_eq!(action, LibraryAction::Quit);
    }

    #[test]
    fn test_selection_clamps_to_list() {
        let mut library = Library::empty();
        library.create_presentation("only");
        let mut screen = LibraryScreen::new(SortPolicy::CreationOrder);

        screen.handle_key(key(KeyCode::Down), &mut library);
        screen.handle_key(key(KeyCode::Down), &mut library);
        assert_eq!(screen.selected(), 0);

        screen.handle_key(key(KeyCode::Up), &mut library);
        assert_eq!(screen.selected(), 0);
    }
}
