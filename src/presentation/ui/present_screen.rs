//! Presenting mode: room request wait state, then the slide view.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use tracing::debug;

use crate::application::services::RoomCode;
use crate::domain::entities::{Library, PresentationId};

const SPINNER_FRAMES: [&str; 4] = ["   ", ".  ", ".. ", "..."];

/// What the presenting screen asks the app to do after a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentAction {
    /// Nothing to do.
    None,
    /// End the session and return to the deck screen.
    End,
}

enum PresentPhase {
    Requesting { ticks: usize },
    Showing { room: RoomCode, current: usize },
}

/// Full-screen presenting session over one deck.
///
/// Starts in the room-request wait state; the app flips it to the
/// slide view once the room code arrives. The sequence number ties the
/// in-flight request to this screen so a result that arrives after the
/// session ended is simply dropped.
pub struct PresentScreen {
    presentation_id: PresentationId,
    seq: u64,
    phase: PresentPhase,
}

impl PresentScreen {
    /// Creates a session in the room-request wait state.
    #[must_use]
    pub const fn new(presentation_id: PresentationId, seq: u64) -> Self {
        Self {
            presentation_id,
            seq,
            phase: PresentPhase::Requesting { ticks: 0 },
        }
    }

    /// Returns the id of the deck being presented.
    #[must_use]
    pub const fn presentation_id(&self) -> PresentationId {
        self.presentation_id
    }

    /// Returns the room-request sequence number for this session.
    #[must_use]
    pub const fn seq(&self) -> u64 {
        self.seq
    }

    /// Returns true while the room code has not arrived yet.
    #[must_use]
    pub const fn is_requesting(&self) -> bool {
        matches!(self.phase, PresentPhase::Requesting { .. })
    }

    /// Returns the current slide index, once showing.
    #[must_use]
    pub const fn current_slide(&self) -> Option<usize> {
        match self.phase {
            PresentPhase::Requesting { .. } => None,
            PresentPhase::Showing { current, .. } => Some(current),
        }
    }

    /// Advances the wait-state spinner.
    pub fn tick(&mut self) {
        if let PresentPhase::Requesting { ticks } = &mut self.phase {
            *ticks += 1;
        }
    }

    /// Flips to the slide view at the first slide. Ignored unless the
    /// session is still waiting for a room.
    pub fn set_room(&mut self, room: RoomCode) {
        if self.is_requesting() {
            debug!(room = %room, "Presenting session is live");
            self.phase = PresentPhase::Showing { room, current: 0 };
        }
    }

    /// Handles a key event.
    pub fn handle_key(&mut self, key: KeyEvent, library: &Library) -> PresentAction {
        if key.code == KeyCode::Esc {
            return PresentAction::End;
        }

        let slide_count = library
            .by_id(self.presentation_id)
            .map_or(0, |p| p.slide_count());

        if let PresentPhase::Showing { current, .. } = &mut self.phase {
            match key.code {
                KeyCode::Right | KeyCode::Char('n' | ' ') => {
                    if slide_count > 0 {
                        *current = (*current + 1).min(slide_count - 1);
                    }
                }
                KeyCode::Left | KeyCode::Char('p') => {
                    *current = current.saturating_sub(1);
                }
                _ => {}
            }
        }
        PresentAction::None
    }

    fn render_requesting(ticks: usize, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let spinner = SPINNER_FRAMES[ticks % SPINNER_FRAMES.len()];
        Paragraph::new(format!("Requesting room code{spinner}"))
            .style(Style::default().fg(Color::Yellow))
            .centered()
            .render(center, buf);
    }

    fn render_showing(
        &self,
        room: &RoomCode,
        current: usize,
        library: &Library,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let Some(presentation) = library.by_id(self.presentation_id) else {
            return;
        };

        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [header_area, body_area, footer_area] = layout.areas(area);

        let header = Line::from(vec![
            Span::styled("Room: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                room.as_str().to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("Esc End", Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(header).render(header_area, buf);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(body_area);
        block.render(body_area, buf);

        if let Some(slide) = presentation.slide(current) {
            let body_layout = Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ]);
            let [title_area, _, content_area] = body_layout.areas(inner);

            Paragraph::new(slide.title())
                .style(Style::default().add_modifier(Modifier::BOLD))
                .render(title_area, buf);
            Paragraph::new(slide.content())
                .wrap(Wrap { trim: false })
                .render(content_area, buf);
        }

        let last = presentation.slide_count().saturating_sub(1);
        let previous = if current > 0 { "\u{2190} Previous" } else { "" };
        let next = if current < last { "Next \u{2192}" } else { "" };
        let counter = format!("{}/{}", current + 1, presentation.slide_count());

        let footer_layout = Layout::horizontal([
            Constraint::Length(12),
            Constraint::Fill(1),
            Constraint::Length(12),
        ]);
        let [prev_area, counter_area, next_area] = footer_layout.areas(footer_area);
        Paragraph::new(previous)
            .style(Style::default().fg(Color::Cyan))
            .render(prev_area, buf);
        Paragraph::new(counter)
            .style(Style::default().fg(Color::DarkGray))
            .centered()
            .render(counter_area, buf);
        Paragraph::new(next)
            .style(Style::default().fg(Color::Cyan))
            .right_aligned()
            .render(next_area, buf);
    }

    /// Renders the screen.
    pub fn render(&self, library: &Library, area: Rect, buf: &mut Buffer) {
        match &self.phase {
            PresentPhase::Requesting { ticks } => Self::render_requesting(*ticks, area, buf),
            PresentPhase::Showing { room, current } => {
                self.render_showing(room, *current, library, area, buf);
            }
        }
    }
}
