//! UI rendering for the runner scene.

use crate::constants::{GROUND_Y, WORLD_HEIGHT, WORLD_WIDTH};
use crate::entity::EntityTag;
use crate::game_state::{GameMode, GameSession, LogoState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the whole game scene into `area`.
pub fn render(frame: &mut Frame, area: Rect, session: &GameSession) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Jumper ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Play area on top, status bar on the bottom two lines
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(inner);

    render_play_area(frame, chunks[0], session);
    render_score(frame, chunks[0], session);
    render_status_bar(frame, chunks[1], session);

    match session.logo {
        LogoState::Visible | LogoState::Fading { .. } => {
            render_logo(frame, chunks[0], session);
        }
        LogoState::Removed => {}
    }

    if session.game_over_visible {
        render_game_over(frame, area, session);
    }
}

/// Render the world: ground strip, obstacles, and the player glyph.
fn render_play_area(frame: &mut Frame, area: Rect, session: &GameSession) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let player = session.entities.get(session.player);

    let mut lines = Vec::with_capacity(height);
    for display_row in 0..height {
        // World coordinate of this cell's center
        let wy = (display_row as f64 + 0.5) * WORLD_HEIGHT / height as f64;
        let mut spans = Vec::with_capacity(width);

        for display_col in 0..width {
            let wx = (display_col as f64 + 0.5) * WORLD_WIDTH / width as f64;

            // Player glyph tilts with vertical velocity
            if let Some(p) = player {
                let (min, max) = p.aabb();
                if wx >= min.x && wx <= max.x && wy >= min.y && wy <= max.y {
                    let glyph = if p.vel.y < -5.0 {
                        "▲"
                    } else if p.vel.y > 5.0 {
                        "▼"
                    } else {
                        "►"
                    };
                    spans.push(Span::styled(
                        glyph,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ));
                    continue;
                }
            }

            let mut on_obstacle = false;
            for e in session.entities.iter() {
                if e.tag != EntityTag::Obstacle {
                    continue;
                }
                let (min, max) = e.aabb();
                if wx >= min.x && wx <= max.x && wy >= min.y && wy <= max.y {
                    on_obstacle = true;
                    break;
                }
            }

            if on_obstacle {
                spans.push(Span::styled("█", Style::default().fg(Color::Green)));
            } else if wy >= GROUND_Y {
                spans.push(Span::styled("▀", Style::default().fg(Color::DarkGray)));
            } else {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Score readout, centered on the top row of the play area.
fn render_score(frame: &mut Frame, area: Rect, session: &GameSession) {
    if area.height == 0 {
        return;
    }
    let row = Rect::new(area.x, area.y, area.width, 1);
    let label = Paragraph::new(Line::from(Span::styled(
        format!("SCORE: {}", session.score),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(label, row);
}

/// Bottom status bar with key hints.
fn render_status_bar(frame: &mut Frame, area: Rect, session: &GameSession) {
    let message = match session.mode {
        GameMode::IntroLogo => "Press Space to start!",
        GameMode::Playing => "Jump!",
        GameMode::Dead => "Press Space for a new run",
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {message}  "),
            Style::default().fg(match session.mode {
                GameMode::Playing => Color::Green,
                _ => Color::Yellow,
            }),
        ),
        Span::styled("[Space/Up/Enter]", Style::default().fg(Color::Cyan)),
        Span::raw(" Jump  "),
        Span::styled("[Q/Esc]", Style::default().fg(Color::Cyan)),
        Span::raw(" Quit"),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Intro logo, dimming as it fades out.
fn render_logo(frame: &mut Frame, area: Rect, session: &GameSession) {
    let alpha = session.logo.alpha();
    if alpha <= 0.0 {
        return;
    }
    let style = if alpha > 0.66 {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if alpha > 0.33 {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let popup = centered_rect(area, 24, 4);
    let lines = vec![
        Line::from(Span::styled("J U M P E R", style)),
        Line::from(""),
        Line::from(Span::styled("press Space to jump", style)),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        popup,
    );
}

/// Game-over overlay: centered panel with the final score.
fn render_game_over(frame: &mut Frame, area: Rect, session: &GameSession) {
    let popup = centered_rect(area, 34, 7);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" GAME OVER ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("SCORE: {}", session.score),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Space for a new run",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

/// Center a fixed-size popup inside `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}
