//! Main application orchestrator.

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info};

use crate::application::services::{RoomCode, RoomService};
use crate::domain::entities::{Library, PresentationId};
use crate::infrastructure::AppConfig;
use crate::presentation::ui::{
    DeckAction, DeckScreen, EditorAction, EditorScreen, LibraryAction, LibraryScreen,
    PresentAction, PresentScreen,
};

const SPINNER_TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Debug)]
enum Action {
    RoomReady { seq: u64, room: RoomCode },
}

enum Screen {
    Library(LibraryScreen),
    Deck(DeckScreen),
    Editor(EditorScreen),
    Present(PresentScreen),
}

enum Nav {
    None,
    Push(Screen),
    Pop,
    Quit,
    StartPresenting(PresentationId),
}

/// Application orchestrator: owns the library, the navigation stack,
/// and the event loop.
pub struct App {
    library: Library,
    room_service: RoomService,
    stack: Vec<Screen>,
    next_room_seq: u64,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    exiting: bool,
}

impl App {
    /// Creates the app with a seeded library and the library screen on
    /// top of the navigation stack.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            library: Library::new(),
            room_service: RoomService::with_delay(config.room.request_delay()),
            stack: vec![Screen::Library(LibraryScreen::new(config.sort.to_policy()))],
            next_room_seq: 0,
            action_tx,
            action_rx,
            exiting: false,
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// # Errors
    /// Returns an error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut spinner_interval = interval(SPINNER_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while !self.exiting {
            tokio::select! {
                Some(event) = terminal_events.next() => {
                    if let Ok(Event::Key(key)) = event {
                        if key.kind == KeyEventKind::Press {
                            self.handle_key(key);
                        }
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = spinner_interval.tick() => {
                    if let Some(Screen::Present(present)) = self.stack.last_mut() {
                        if present.is_requesting() {
                            present.tick();
                            terminal.draw(|frame| self.render(frame))?;
                        }
                    }
                }
            }
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let Self { library, stack, .. } = self;
        let buf = frame.buffer_mut();

        match stack.last_mut() {
            Some(Screen::Library(screen)) => screen.render(library, area, buf),
            Some(Screen::Deck(screen)) => screen.render(library, area, buf),
            Some(Screen::Editor(screen)) => screen.render(area, buf),
            Some(Screen::Present(screen)) => screen.render(library, area, buf),
            None => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let nav = match self.stack.last_mut() {
            Some(Screen::Library(screen)) => match screen.handle_key(key, &mut self.library) {
                LibraryAction::None => Nav::None,
                LibraryAction::Open(id) => Nav::Push(Screen::Deck(DeckScreen::new(id))),
                LibraryAction::Quit => Nav::Quit,
            },
            Some(Screen::Deck(screen)) => {
                let id = screen.presentation_id();
                match screen.handle_key(key, &mut self.library) {
                    DeckAction::None => Nav::None,
                    DeckAction::Back => Nav::Pop,
                    DeckAction::Edit { slide_index } => {
                        match self.library.by_id(id).and_then(|p| p.slide(slide_index)) {
                            Some(slide) => Nav::Push(Screen::Editor(EditorScreen::new(
                                id,
                                slide_index,
                                slide,
                            ))),
                            None => Nav::None,
                        }
                    }
                    DeckAction::Present => Nav::StartPresenting(id),
                }
            }
            Some(Screen::Editor(screen)) => match screen.handle_key(key, &mut self.library) {
                EditorAction::None => Nav::None,
                EditorAction::Back => Nav::Pop,
            },
            Some(Screen::Present(screen)) => match screen.handle_key(key, &self.library) {
                PresentAction::None => Nav::None,
                PresentAction::End => Nav::Pop,
            },
            None => Nav::None,
        };

        match nav {
            Nav::None => {}
            Nav::Push(screen) => self.stack.push(screen),
            Nav::Pop => {
                if self.stack.len() > 1 {
                    self.stack.pop();
                }
            }
            Nav::Quit => self.exiting = true,
            Nav::StartPresenting(id) => self.start_presenting(id),
        }
    }

    fn start_presenting(&mut self, id: PresentationId) {
        let seq = self.next_room_seq;
        self.next_room_seq += 1;
        self.stack.push(Screen::Present(PresentScreen::new(id, seq)));

        let service = self.room_service.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let room = service.request_room().await;
            // a send failure just means the app is already gone
            let _ = tx.send(Action::RoomReady { seq, room });
        });
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::RoomReady { seq, room } => {
                // apply only if the presenting session that asked for
                // this room is still up; otherwise the result is stale
                if let Some(Screen::Present(present)) = self.stack.last_mut() {
                    if present.seq() == seq && present.is_requesting() {
                        present.set_room(room);
                        return;
                    }
                }
                debug!(seq, "Dropping room code for a dismissed session");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn demo_room() -> RoomCode {
        tokio_test::block_on(RoomService::with_delay(Duration::ZERO).request_room())
    }

    fn app() -> App {
        App::new(&AppConfig::default())
    }

    #[test]
    fn test_quit_from_library_screen() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.exiting);
    }

    #[test]
    fn test_navigation_library_to_editor_and_back() {
        let mut app = app();

        app.handle_key(key(KeyCode::Enter)); // open first deck
        assert!(matches!(app.stack.last(), Some(Screen::Deck(_))));

        app.handle_key(key(KeyCode::Enter)); // edit first slide
        assert!(matches!(app.stack.last(), Some(Screen::Editor(_))));

        app.handle_key(key(KeyCode::Esc));
        assert!(matches!(app.stack.last(), Some(Screen::Deck(_))));

        app.handle_key(key(KeyCode::Esc));
        assert!(matches!(app.stack.last(), Some(Screen::Library(_))));

        // the library screen never pops off the stack
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.stack.len(), 1);
    }

    #[tokio::test]
    async fn test_presenting_spawns_room_request_and_applies_result() {
        let mut app = App::new(&AppConfig {
            room: crate::infrastructure::config::RoomConfig {
                request_delay_ms: 0,
            },
            ..AppConfig::default()
        });

        app.handle_key(key(KeyCode::Enter)); // open first deck
        app.handle_key(key(KeyCode::Char('p'))); // present
        assert!(matches!(app.stack.last(), Some(Screen::Present(_))));

        let action = app.action_rx.recv().await.expect("room result");
        app.handle_action(action);

        let Some(Screen::Present(present)) = app.stack.last() else {
            panic!("expected presenting screen");
        };
        assert!(!present.is_requesting());
        assert_eq!(present.current_slide(), Some(0));
    }

    #[test]
    fn test_stale_room_result_is_dropped_after_dismiss() {
        let mut app = app();
        let id = app.library.get(0).unwrap().id();
        app.stack.push(Screen::Present(PresentScreen::new(id, 3)));

        // the user ends the session before the room arrives
        app.handle_key(key(KeyCode::Esc));
        app.handle_action(Action::RoomReady {
            seq: 3,
            room: demo_room(),
        });

        assert!(matches!(app.stack.last(), Some(Screen::Library(_))));
    }

    #[test]
    fn test_room_result_for_older_session_is_dropped() {
        let mut app = app();
        let id = app.library.get(0).unwrap().id();
        app.stack.push(Screen::Present(PresentScreen::new(id, 4)));

        app.handle_action(Action::RoomReady {
            seq: 3,
            room: demo_room(),
        });

        let Some(Screen::Present(present)) = app.stack.last() else {
            panic!("expected presenting screen");
        };
        assert!(present.is_requesting());
    }
}
