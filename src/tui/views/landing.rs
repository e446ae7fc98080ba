//! Landing screen
//!
//! The product page behind the demo modal.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, Screen};

const TAGLINE: &str = "Financial freedom made simple";
const PITCH: &str = "Savr helps Gen Z build wealth through gamified learning, \
                     smart investing, and goal-based saving.";

/// Features listed under the pitch
const FEATURES: [(&str, &str); 3] = [
    ("Learn", "Bite-sized lessons that reward progress"),
    ("Invest", "An AI portfolio matched to your risk"),
    ("Save", "Goals with friends who keep you on track"),
];

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(7), // Hero
            Constraint::Length(5), // Features
            Constraint::Length(2), // Call to action
            Constraint::Min(0),
        ])
        .split(area);

    let hero = vec![
        Line::from(Span::styled(
            "savr",
            Style::default()
                .fg(Color::Rgb(0x0D, 0x8C, 0xFE))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            TAGLINE,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(PITCH, Style::default().fg(Color::Gray))),
    ];
    frame.render_widget(
        Paragraph::new(hero)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[2]);
    for ((title, blurb), column) in FEATURES.iter().zip(columns.iter()) {
        let card = Paragraph::new(*blurb)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(format!(" {} ", title))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(card, *column);
    }

    if app.screen == Screen::Landing {
        let cta = Line::from(vec![
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Rgb(0x8F, 0xDE, 0x02))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Try Demo    "),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::raw(" Quit    "),
            Span::styled("?", Style::default().fg(Color::Cyan)),
            Span::raw(" Help"),
        ]);
        frame.render_widget(
            Paragraph::new(cta).alignment(Alignment::Center),
            chunks[3],
        );
    }
}
