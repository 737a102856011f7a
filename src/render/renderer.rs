use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{Phase, Position, Session};

const GAME_OVER_WIDTH: u16 = 40;
const GAME_OVER_HEIGHT: u16 = 9;

/// Draws a session into a ratatui frame
///
/// Only reads from the session; input is handled by the driver.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, session: &Session) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Score
                Constraint::Min(0),    // Grid
                Constraint::Length(1), // Controls
            ])
            .split(frame.area());

        frame.render_widget(self.render_score(session), chunks[0]);
        frame.render_widget(self.render_grid(session), chunks[1]);
        frame.render_widget(self.render_controls(), chunks[2]);

        if session.phase() == Phase::GameOver {
            let popup = centered(chunks[1], GAME_OVER_WIDTH, GAME_OVER_HEIGHT);
            frame.render_widget(Clear, popup);
            frame.render_widget(self.render_game_over(session), popup);
        }
    }

    fn render_score(&self, session: &Session) -> Paragraph<'_> {
        Paragraph::new(Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::White)),
            Span::styled(
                session.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Left)
    }

    fn render_grid(&self, session: &Session) -> Paragraph<'_> {
        let grid = session.grid();
        let body = session.agent_body();
        let head = session.agent().head();
        let target = session.target();

        let lines: Vec<Line> = (0..grid.height())
            .map(|y| {
                let spans: Vec<Span> = (0..grid.width())
                    .map(|x| {
                        let pos = Position::new(x, y);
                        if pos == head {
                            Span::styled(
                                "██",
                                Style::default()
                                    .fg(Color::LightGreen)
                                    .add_modifier(Modifier::BOLD),
                            )
                        } else if body.contains(&pos) {
                            Span::styled("▓▓", Style::default().fg(Color::Green))
                        } else if pos == target {
                            Span::styled("██", Style::default().fg(Color::Red))
                        } else {
                            Span::styled(" ·", Style::default().fg(Color::DarkGray))
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_game_over(&self, session: &Session) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("Final Score: {}", session.score()),
                Style::default().fg(Color::LightGreen),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press R to Restart | ESC to Quit",
                Style::default().fg(Color::White),
            )),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        Paragraph::new(Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]))
        .alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A `width` x `height` rect centred in `area`, clipped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
