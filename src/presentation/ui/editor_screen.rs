//! Slide editor: title field plus multiline content area.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tui_textarea::{CursorMove, TextArea};
use unicode_width::UnicodeWidthStr;

use crate::domain::entities::{Library, PresentationId, Slide};
use crate::presentation::widgets::TextInput;

/// What the editor screen asks the app to do after a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Nothing to do.
    None,
    /// Return to the deck screen.
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditorFocus {
    Title,
    Content,
}

/// Screen editing one slide's title and content.
///
/// Edits write through to the model on every keystroke, so leaving the
/// editor never loses anything.
pub struct EditorScreen {
    presentation_id: PresentationId,
    slide_index: usize,
    title: TextInput,
    content: TextArea<'static>,
    focus: EditorFocus,
}

impl EditorScreen {
    /// Creates the editor pre-filled from a slide. Focus starts on the
    /// title field.
    #[must_use]
    pub fn new(presentation_id: PresentationId, slide_index: usize, slide: &Slide) -> Self {
        let mut title = TextInput::new("Title");
        title.set_value(slide.title());
        title.set_focused(true);

        let lines: Vec<String> = if slide.content().is_empty() {
            Vec::new()
        } else {
            slide.content().split('\n').map(str::to_string).collect()
        };
        let content = TextArea::new(lines);

        Self {
            presentation_id,
            slide_index,
            title,
            content,
            focus: EditorFocus::Title,
        }
    }

    /// Returns the id of the presentation owning the edited slide.
    #[must_use]
    pub const fn presentation_id(&self) -> PresentationId {
        self.presentation_id
    }

    /// Returns the index of the edited slide.
    #[must_use]
    pub const fn slide_index(&self) -> usize {
        self.slide_index
    }

    fn set_focus(&mut self, focus: EditorFocus) {
        self.focus = focus;
        self.title.set_focused(focus == EditorFocus::Title);
    }

    /// Handles a key event, writing edits through to the slide.
    pub fn handle_key(&mut self, key: KeyEvent, library: &mut Library) -> EditorAction {
        if key.code == KeyCode::Esc {
            return EditorAction::Back;
        }
        if key.code == KeyCode::Tab {
            let next = match self.focus {
                EditorFocus::Title => EditorFocus::Content,
                EditorFocus::Content => EditorFocus::Title,
            };
            self.set_focus(next);
            return EditorAction::None;
        }

        match self.focus {
            EditorFocus::Title => {
                if key.code == KeyCode::Enter {
                    // submitting the title moves on to the content
                    self.set_focus(EditorFocus::Content);
                } else {
                    self.title.handle_key(key);
                }
            }
            EditorFocus::Content => self.edit_content(key),
        }

        self.apply(library);
        EditorAction::None
    }

    fn edit_content(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.content.insert_char(c),
            KeyCode::Enter => self.content.insert_newline(),
            KeyCode::Backspace => {
                self.content.delete_char();
            }
            KeyCode::Delete => {
                self.content.delete_next_char();
            }
            KeyCode::Left => self.content.move_cursor(CursorMove::Back),
            KeyCode::Right => self.content.move_cursor(CursorMove::Forward),
            KeyCode::Up => self.content.move_cursor(CursorMove::Up),
            KeyCode::Down => self.content.move_cursor(CursorMove::Down),
            KeyCode::Home => self.content.move_cursor(CursorMove::Head),
            KeyCode::End => self.content.move_cursor(CursorMove::End),
            _ => {}
        }
    }

    fn apply(&self, library: &mut Library) {
        let Some(slide) = library
            .by_id_mut(self.presentation_id)
            .and_then(|p| p.slide_mut(self.slide_index))
        else {
            return;
        };
        slide.set_title(self.title.value());
        slide.set_content(self.content.lines().join("\n"));
    }

    /// Renders the screen.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [title_area, content_area, hint_area] = layout.areas(area);

        (&self.title).render(title_area, buf);

        let border_style = if self.focus == EditorFocus::Content {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Content");
        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let (cursor_row, cursor_col) = self.content.cursor();
        let visible = inner.height as usize;
        let row_offset = if visible == 0 {
            0
        } else {
            cursor_row.saturating_sub(visible - 1)
        };

        let text: Vec<Line> = self
            .content
            .lines()
            .iter()
            .skip(row_offset)
            .map(|line| Line::from(Span::raw(line.clone())))
            .collect();
        Paragraph::new(text).render(inner, buf);

        if self.focus == EditorFocus::Content && inner.width > 0 && inner.height > 0 {
            let line = self
                .content
                .lines()
                .get(cursor_row)
                .map_or("", String::as_str);
            let prefix: String = line.chars().take(cursor_col).collect();
            #[allow(clippy::cast_possible_truncation)]
            let cursor_x = inner.x + prefix.width() as u16;
            #[allow(clippy::cast_possible_truncation)]
            let cursor_y = inner.y + (cursor_row - row_offset) as u16;
            if cursor_x < inner.x + inner.width && cursor_y < inner.y + inner.height {
                buf[(cursor_x, cursor_y)]
                    .set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }

        Paragraph::new("Tab Switch field | Esc Done")
            .style(Style::default().fg(Color::DarkGray))
            .render(hint_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn editor_fixture() -> (Library, EditorScreen) {
        let mut library = Library::empty();
        let id = library.create_presentation("Deck").id();
        library.by_id_mut(id).unwrap().add_slide("", "");
        let slide = library.by_id(id).unwrap().slide(0).unwrap();
        let screen = EditorScreen::new(id, 0, slide);
        (library, screen)
    }

    fn slide_state(library: &Library, screen: &EditorScreen) -> (String, String) {
        let slide = library
            .by_id(screen.presentation_id())
            .unwrap()
            .slide(screen.slide_index())
            .unwrap();
        (slide.title().to_string(), slide.content().to_string())
    }

    #[test]
    fn test_typing_title_applies_live() {
        let (mut library, mut screen) = editor_fixture();

        for c in "Intro".chars() {
            screen.handle_key(key(KeyCode::Char(c)), &mut library);
        }

        let (title, content) = slide_state(&library, &screen);
        assert_eq!(title, "Intro");
        assert_eq!(content, "");
    }

    #[test]
    fn test_enter_on_title_moves_focus_to_content() {
        let (mut library, mut screen) = editor_fixture();

        screen.handle_key(key(KeyCode::Char('t')), &mut library);
        screen.handle_key(key(KeyCode::Enter), &mut library);
        for c in "body".chars() {
            screen.handle_key(key(KeyCode::Char(c)), &mut library);
        }

        let (title, content) = slide_state(&library, &screen);
        assert_eq!(title, "t");
        assert_eq!(content, "body");
    }

    #[test]
    fn test_content_newlines_round_trip() {
        let (mut library, mut screen) = editor_fixture();

        screen.handle_key(key(KeyCode::Tab), &mut library);
        screen.handle_key(key(KeyCode::Char('a')), &mut library);
        screen.handle_key(key(KeyCode::Enter), &mut library);
        screen.handle_key(key(KeyCode::Enter), &mut library);
        screen.handle_key(key(KeyCode::Char('b')), &mut library);

        let (_, content) = slide_state(&library, &screen);
        assert_eq!(content, "a\n\nb");
    }

    #[test]
    fn test_prefilled_from_existing_slide() {
        let mut library = Library::empty();
        let id = library.create_presentation("Deck").id();
        library
            .by_id_mut(id)
            .unwrap()
            .add_slide("Existing", "line one\nline two");
        let slide = library.by_id(id).unwrap().slide(0).unwrap();
        let mut screen = EditorScreen::new(id, 0, slide);

        // an immediate no-op keystroke must not clobber the content
        screen.handle_key(key(KeyCode::Right), &mut library);

        let (title, content) = slide_state(&library, &screen);
        assert_eq!(title, "Existing");
        assert_eq!(content, "line one\nline two");
    }

    #[test]
    fn test_escape_goes_back() {
        let (mut library, mut screen) = editor_fixture();
        let action = screen.handle_key(key(KeyCode::Esc), &mut library);
        assert_eq!(action, EditorAction::Back);
    }

    #[test]
    fn test_edits_survive_when_slide_is_gone() {
        let (mut library, mut screen) = editor_fixture();
        library
            .by_id_mut(screen.presentation_id())
            .unwrap()
            .remove_slide(0)
            .unwrap();

        // writing through to a vanished slide is a no-op, not a panic
        let action = screen.handle_key(key(KeyCode::Char('x')), &mut library);
        assert_eq!(action, EditorAction::None);
    }
}
