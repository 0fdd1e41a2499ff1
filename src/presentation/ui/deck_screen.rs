//! Deck screen: the slide list of one presentation.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};
use tracing::{debug, warn};

use crate::domain::entities::{Library, PresentationId, Slide};
use crate::presentation::widgets::{StatusBar, TextInput};

const PREVIEW_WIDTH: usize = 60;

/// What the deck screen asks the app to do after a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckAction {
    /// Nothing to do.
    None,
    /// Return to the library screen.
    Back,
    /// Open the slide editor at an index.
    Edit {
        /// Index of the slide to edit.
        slide_index: usize,
    },
    /// Start presenting this deck.
    Present,
}

enum DeckMode {
    Browsing,
    Renaming { input: TextInput },
}

/// Screen showing one presentation's slides.
pub struct DeckScreen {
    presentation_id: PresentationId,
    selected: usize,
    mode: DeckMode,
    status: StatusBar,
    list_state: ListState,
}

impl DeckScreen {
    const BROWSE_HINTS: &'static str =
        "n New | d Delete | K/J Move | R Rename | p Present | Enter Edit | Esc Back";

    /// Creates the screen for a presentation.
    #[must_use]
    pub fn new(presentation_id: PresentationId) -> Self {
        Self {
            presentation_id,
            selected: 0,
            mode: DeckMode::Browsing,
            status: StatusBar::new().hints(Self::BROWSE_HINTS),
            list_state: ListState::default(),
        }
    }

    /// Returns the id of the presentation being shown.
    #[must_use]
    pub const fn presentation_id(&self) -> PresentationId {
        self.presentation_id
    }

    /// Returns the selected slide index.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Handles a key event, mutating the presentation as requested.
    pub fn handle_key(&mut self, key: KeyEvent, library: &mut Library) -> DeckAction {
        if library.by_id(self.presentation_id).is_none() {
            // deck vanished under us; fall back to the library
            return DeckAction::Back;
        }

        if matches!(self.mode, DeckMode::Renaming { .. }) {
            self.handle_renaming_key(key, library);
            return DeckAction::None;
        }
        self.handle_browsing_key(key, library)
    }

    fn handle_renaming_key(&mut self, key: KeyEvent, library: &mut Library) {
        let DeckMode::Renaming { input } = &mut self.mode else {
            return;
        };
        match key.code {
            KeyCode::Enter => {
                let title = input.value().to_string();
                if let Some(presentation) = library.by_id_mut(self.presentation_id) {
                    presentation.rename(title);
                    debug!(id = %self.presentation_id, "Renamed presentation");
                }
                self.mode = DeckMode::Browsing;
                self.status = StatusBar::success("Presentation renamed").hints(Self::BROWSE_HINTS);
            }
            KeyCode::Esc => {
                self.mode = DeckMode::Browsing;
                self.status = StatusBar::new().hints(Self::BROWSE_HINTS);
            }
            _ => {
                input.handle_key(key);
            }
        }
    }

    fn handle_browsing_key(&mut self, key: KeyEvent, library: &mut Library) -> DeckAction {
        let Some(presentation) = library.by_id_mut(self.presentation_id) else {
            return DeckAction::Back;
        };

        let count = presentation.slide_count();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < count {
                    self.selected += 1;
                }
            }
            KeyCode::Enter => {
                if self.selected < count {
                    return DeckAction::Edit {
                        slide_index: self.selected,
                    };
                }
            }
            KeyCode::Char('n') => {
                // the editor opens immediately on the fresh slide, so
                // it starts out blank rather than "Untitled"
                presentation.add_slide("", "");
                debug!(id = %presentation.id(), "Added slide");
                self.selected = presentation.slide_count() - 1;
                return DeckAction::Edit {
                    slide_index: self.selected,
                };
            }
            KeyCode::Char('d') => match presentation.remove_slide(self.selected) {
                Ok(_) => {
                    debug!(id = %presentation.id(), index = self.selected, "Removed slide");
                    self.clamp_selection(presentation.slide_count());
                    self.status = StatusBar::success("Slide deleted").hints(Self::BROWSE_HINTS);
                }
                Err(e) => {
                    warn!(error = %e, "Remove slide failed");
                    self.status = StatusBar::error(e.to_string());
                }
            },
            KeyCode::Char('K') => {
                if self.selected > 0 {
                    match presentation.move_slide(self.selected, self.selected - 1) {
                        Ok(()) => self.selected -= 1,
                        Err(e) => warn!(error = %e, "Move slide failed"),
                    }
                }
            }
            KeyCode::Char('J') => {
                if self.selected + 1 < count {
                    match presentation.move_slide(self.selected, self.selected + 1) {
                        Ok(()) => self.selected += 1,
                        Err(e) => warn!(error = %e, "Move slide failed"),
                    }
                }
            }
            KeyCode::Char('R') => {
                let mut input = TextInput::new("Title");
                input.set_value(presentation.title());
                input.set_focused(true);
                self.mode = DeckMode::Renaming { input };
                self.status =
                    StatusBar::info("Rename presentation").hints("Enter Rename | Esc Cancel");
            }
            KeyCode::Char('p') => {
                if count == 0 {
                    self.status = StatusBar::warning("No slides to present");
                } else {
                    return DeckAction::Present;
                }
            }
            KeyCode::Esc => return DeckAction::Back,
            _ => {}
        }
        DeckAction::None
    }

    fn slide_item(slide: &Slide) -> ListItem<'_> {
        let headline = if slide.title().is_empty() {
            Span::styled(
                "New Slide",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                slide.title().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )
        };

        let preview = if slide.content().is_empty() {
            "No content".to_string()
        } else {
            let first_line = slide.content().lines().next().unwrap_or("");
            let mut preview: String = first_line.chars().take(PREVIEW_WIDTH).collect();
            if first_line.chars().count() > PREVIEW_WIDTH || slide.content().lines().count() > 1 {
                preview.push('\u{2026}');
            }
            preview
        };

        ListItem::new(Text::from(vec![
            Line::from(headline),
            Line::from(Span::styled(
                preview,
                Style::default().fg(Color::DarkGray),
            )),
        ]))
    }

    /// Renders the screen.
    pub fn render(&mut self, library: &Library, area: Rect, buf: &mut Buffer) {
        let Some(presentation) = library.by_id(self.presentation_id) else {
            return;
        };

        let layout = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]);
        let [list_area, status_area] = layout.areas(area);

        let title = if presentation.title().is_empty() {
            " (untitled) ".to_string()
        } else {
            format!(" {} ", presentation.title())
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title);
        let inner = block.inner(list_area);
        block.render(list_area, buf);

        if presentation.slide_count() == 0 {
            Paragraph::new("No slides. Press 'n' to create one.")
                .style(Style::default().fg(Color::DarkGray))
                .render(inner, buf);
        } else {
            let items: Vec<ListItem> = presentation.slides().iter().map(Self::slide_item).collect();

            self.list_state.select(Some(self.selected));
            let list = List::new(items)
                .highlight_style(Style::default().fg(Color::Cyan))
                .highlight_symbol("> ");
            StatefulWidget::render(list, inner, buf, &mut self.list_state);
        }

        if let DeckMode::Renaming { input } = &self.mode {
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

    fn library_with_deck(slide_titles: &[&str]) -> (Library, PresentationId) {
        let mut library = Library::empty();
        let id = library.create_presentation("Deck").id();
        let presentation = library.by_id_mut(id).unwrap();
        for title in slide_titles {
            presentation.add_slide(*title, "body");
        }
        (library, id)
    }

    fn slide_titles(library: &Library, id: PresentationId) -> Vec<String> {
        library
            .by_id(id)
            .unwrap()
            .slides()
            .iter()
            .map(|s| s.title().to_string())
            .collect()
    }

    #[test]
    fn test_new_slide_jumps_to_editor() {
        let (mut library, id) = library_with_deck(&["a"]);
        let mut screen = DeckScreen::new(id);

        let action = screen.handle_key(key(KeyCode::Char('n')), &mut library);

        assert_eq!(action, DeckAction::Edit { slide_index: 1 });
        let deck = library.by_id(id).unwrap();
        assert_eq!(deck.slide_count(), 2);
        assert_eq!(deck.slide(1).unwrap().title(), "");
        assert_eq!(deck.slide(1).unwrap().content(), "");
    }

    #[test]
    fn test_delete_selected_slide() {
        let (mut library, id) = library_with_deck(&["a", "b"]);
        let mut screen = DeckScreen::new(id);

        screen.handle_key(key(KeyCode::Down), &mut library);
        screen.handle_key(key(KeyCode::Char('d')), &mut library);

        assert_eq!(slide_titles(&library, id), vec!["a"]);
        assert_eq!(screen.selected(), 0);
    }

    #[test]
    fn test_move_selected_slide_down() {
        let (mut library, id) = library_with_deck(&["a", "b", "c"]);
        let mut screen = DeckScreen::new(id);

        screen.handle_key(key(KeyCode::Char('J')), &mut library);

        assert_eq!(slide_titles(&library, id), vec!["b", "a", "c"]);
        assert_eq!(screen.selected(), 1);
    }

    #[test]
    fn test_move_selected_slide_up_at_top_is_noop() {
        let (mut library, id) = library_with_deck(&["a", "b"]);
        let mut screen = DeckScreen::new(id);

        screen.handle_key(key(KeyCode::Char('K')), &mut library);

        assert_eq!(slide_titles(&library, id), vec!["a", "b"]);
        assert_eq!(screen.selected(), 0);
    }

    #[test]
    fn test_rename_flow() {
        let (mut library, id) = library_with_deck(&[]);
        let mut screen = DeckScreen::new(id);

        screen.handle_key(key(KeyCode::Char('R')), &mut library);
        // prompt starts pre-filled with the current title
        for _ in 0.."Deck".len() {
            screen.handle_key(key(KeyCode::Backspace), &mut library);
        }
        for c in "Renamed".chars() {
            screen.handle_key(key(KeyCode::Char(c)), &mut library);
        }
        screen.handle_key(key(KeyCode::Enter), &mut library);

        assert_eq!(library.by_id(id).unwrap().title(), "Renamed");
    }

    #[test]
    fn test_rename_to_empty_string_is_allowed() {
        let (mut library, id) = library_with_deck(&[]);
        let mut screen = DeckScreen::new(id);

        screen.handle_key(key(KeyCode::Char('R')), &mut library);
        for _ in 0.."Deck".len() {
            screen.handle_key(key(KeyCode::Backspace), &mut library);
        }
        screen.handle_key(key(KeyCode::Enter), &mut library);

        assert_eq!(library.by_id(id).unwrap().title(), "");
    }

    #[test]
    fn test_present_requires_slides() {
        let (mut library, id) = library_with_deck(&[]);
        let mut screen = DeckScreen::new(id);

        let action = screen.handle_key(key(KeyCode::Char('p')), &mut library);
        assert_eq!(action, DeckAction::None);

        let (mut library, id) = library_with_deck(&["a"]);
        let mut screen = DeckScreen::new(id);
        let action = screen.handle_key(key(KeyCode::Char('p')), &mut library);
        assert_eq!(action, DeckAction::Present);
    }

    #[test]
    fn test_back_when_deck_is_gone() {
        let (mut library, id) = library_with_deck(&["a"]);
        library.remove_presentation_by_id(id).unwrap();
        let mut screen = DeckScreen::new(id);

        let action = screen.handle_key(key(KeyCode::Char('j')), &mut library);
        assert_eq!(action, DeckAction::Back);
    }

    #[test]
    fn test_escape_goes_back() {
        let (mut library, id) = library_with_deck(&["a"]);
        let mut screen = DeckScreen::new(id);
        let action = screen.handle_key(key(KeyCode::Esc), &mut library);
        assert_eq!(action, DeckAction::Back);
    }
}
