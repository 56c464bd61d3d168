//! TUI rendering with ratatui
//!
//! Entry form for the two words, the ladder found, and a message log.

use super::app::{App, Field, MessageStyle};
use crate::output::outcome_line;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Entry fields
            Constraint::Min(8),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_inputs(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Ladder
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[2]);

    render_ladder(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);

    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪜 WORD LADDER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_inputs(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_field(f, " Start ", &app.start, app.focus == Field::Start, chunks[0]);
    render_field(f, " End ", &app.end, app.focus == Field::End, chunks[1]);
}

fn render_field(f: &mut Frame, title: &str, text: &str, focused: bool, area: Rect) {
    let (color, border) = if focused {
        (Color::Yellow, BorderType::Double)
    } else {
        (Color::DarkGray, BorderType::Plain)
    };

    let content = if focused {
        format!("{}▏", text.to_uppercase())
    } else {
        text.to_uppercase()
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(border)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_ladder(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Ladder ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(result) = &app.result else {
        let paragraph = Paragraph::new("No search yet").block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let mut lines = vec![Line::from(outcome_line(
        &result.start,
        &result.end,
        result.ladder.as_ref(),
    ))];

    if let Some(ladder) = &result.ladder {
        lines.push(Line::from(""));
        for (step, word) in ladder.iter().enumerate() {
            let style = if step == 0 || step == ladder.steps() {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Green)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{step:>3}. "), Style::default().fg(Color::DarkGray)),
                Span::styled(word.text().to_uppercase(), style),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "{} graph words | {} expanded | {} scheduled | {:.2}ms",
            result.graph_words,
            result.expanded,
            result.scheduled,
            result.duration.as_secs_f64() * 1000.0
        ),
        Style::default().fg(Color::Cyan),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(25),
            Constraint::Percentage(45),
        ])
        .split(area);

    let options = Paragraph::new(format!("Search: {}", app.options.label())).alignment(Alignment::Center);
    f.render_widget(options, chunks[0]);

    let stats = Paragraph::new(format!(
        "Found: {}/{}",
        app.stats.found, app.stats.searches
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("Esc: Quit | Tab: Switch | Enter: Search | Ctrl-R: Reset")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
