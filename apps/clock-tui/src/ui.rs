//! Rendering. Stateless apart from expiring the transient footer message.

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph},
    Frame,
};

use clock_core::Phase;

use crate::{App, SetterFocus};

pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let main_block = Block::default()
        .title(Line::from(vec![
            Span::styled(" ◆ ", Style::default().fg(Color::Cyan)),
            Span::styled(
                "25+5 Clock ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = main_block.inner(area);
    f.render_widget(main_block, area);

    let chunks = Layout::vertical([
        Constraint::Length(5),
        Constraint::Min(7),
        Constraint::Length(2),
    ])
    .split(inner);

    render_setters(f, app, chunks[0]);
    render_display(f, app, chunks[1]);
    render_footer(f, app, chunks[2]);
}

fn render_setters(f: &mut Frame, app: &App, area: Rect) {
    let halves = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let settings = app.clock.settings();
    render_setter(
        f,
        "Break Length",
        settings.break_min,
        app.focus == SetterFocus::Break,
        halves[0],
    );
    render_setter(
        f,
        "Session Length",
        settings.session_min,
        app.focus == SetterFocus::Session,
        halves[1],
    );
}

fn render_setter(f: &mut Frame, label: &str, minutes: u32, focused: bool, area: Rect) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let border_type = if focused {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let value_color = if focused { Color::White } else { Color::Gray };
    let value = Paragraph::new(Line::from(vec![
        Span::styled("▼ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{minutes} min"),
            Style::default()
                .fg(value_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▲", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(value, centered_line(inner));
}

fn render_display(f: &mut Frame, app: &App, area: Rect) {
    let display = app.clock.display();

    let (phase_color, phase_icon) = match display.phase {
        Phase::Session => (Color::Green, "●"),
        Phase::Break => (Color::Blue, "○"),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let status = if display.running {
        Span::styled("Running", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("Stopped", Style::default().fg(Color::DarkGray))
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{phase_icon} "), Style::default().fg(phase_color)),
            Span::styled(
                display.phase.label(),
                Style::default()
                    .fg(phase_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            display.mmss(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(status).alignment(Alignment::Center),
    ];
    f.render_widget(Paragraph::new(lines), inner);

    // phase progress along the bottom of the panel
    let total = app.clock.settings().phase_secs(display.phase);
    if total > 0 && inner.height >= 7 {
        let gauge_area = Rect {
            x: inner.x,
            y: inner.y + inner.height - 1,
            width: inner.width,
            height: 1,
        };
        let ratio = f64::from(display.remaining_secs) / f64::from(total);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(phase_color).bg(Color::DarkGray))
            .ratio(ratio.clamp(0.0, 1.0))
            .label(display.mmss());
        f.render_widget(gauge, gauge_area);
    }
}

fn render_footer(f: &mut Frame, app: &mut App, area: Rect) {
    let content = if let Some((ref msg, until)) = app.message {
        if Instant::now() < until {
            Line::from(Span::styled(
                format!(" {msg}"),
                Style::default().fg(Color::Cyan),
            ))
        } else {
            app.message = None;
            default_footer()
        }
    } else {
        default_footer()
    };
    f.render_widget(Paragraph::new(content), area);
}

fn default_footer() -> Line<'static> {
    Line::from(vec![
        Span::styled(" [Tab]", Style::default().fg(Color::DarkGray)),
        Span::styled(" Setter ", Style::default().fg(Color::Gray)),
        Span::styled(" [↑↓]", Style::default().fg(Color::DarkGray)),
        Span::styled(" Adjust ", Style::default().fg(Color::Gray)),
        Span::styled(" [Space]", Style::default().fg(Color::DarkGray)),
        Span::styled(" Start/Stop ", Style::default().fg(Color::Gray)),
        Span::styled(" [r]", Style::default().fg(Color::DarkGray)),
        Span::styled(" Reset ", Style::default().fg(Color::Gray)),
        Span::styled(" [q]", Style::default().fg(Color::DarkGray)),
        Span::styled(" Quit ", Style::default().fg(Color::Gray)),
    ])
}

fn centered_line(area: Rect) -> Rect {
    let y = area.y + area.height / 2;
    Rect {
        y: y.min(area.y + area.height.saturating_sub(1)),
        height: 1,
        ..area
    }
}
