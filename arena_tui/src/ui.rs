//! UI rendering

use crate::app::App;
use arena_core::{BattleState, Character};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title / notice
            Constraint::Min(0),    // Arena
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_title(f, app, chunks[0]);

    let arena = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(40), Constraint::Min(30)])
        .split(chunks[1]);

    let panels = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(arena[0]);

    draw_player(f, app, panels[0]);
    draw_enemy(f, app, panels[1]);
    draw_battle_log(f, app, arena[1]);
    draw_keybindings(f, app, chunks[2]);
}

fn draw_title(f: &mut Frame, app: &App, area: Rect) {
    let line = match (&app.notice, app.battle.state()) {
        (Some(notice), _) => Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Yellow),
        )),
        (None, BattleState::Defeated) => Line::from(Span::styled(
            "GAME OVER - press r to restart",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        (None, BattleState::Active) => Line::from(vec![
            Span::styled("Enemies defeated: ", Style::default().fg(Color::Gray)),
            Span::styled(
                app.battle.kills().to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
    };

    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(" Arena "))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn draw_player(f: &mut Frame, app: &App, area: Rect) {
    let player = app.battle.player();
    let mut lines = vec![health_bar(player.character(), area.width.saturating_sub(4))];
    lines.extend(summary_lines(&player.stats_summary()));

    let border = if player.shield_active() {
        Color::Cyan
    } else {
        Color::White
    };
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Player "),
    );
    f.render_widget(paragraph, area);
}

fn draw_enemy(f: &mut Frame, app: &App, area: Rect) {
    let enemy = app.battle.enemy();
    let mut lines = vec![health_bar(enemy.character(), area.width.saturating_sub(4))];
    lines.extend(summary_lines(&enemy.stats_summary()));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Enemy "))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// First summary line is the name, the rest are "Stat: value"
fn summary_lines(summary: &str) -> Vec<Line<'static>> {
    summary
        .lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                return Line::from(Span::styled(
                    line.to_string(),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ));
            }
            match line.split_once(": ") {
                Some((key, value)) => Line::from(vec![
                    Span::styled(format!("{:14}", key), Style::default().fg(Color::Gray)),
                    Span::styled(value.to_string(), Style::default().fg(Color::White)),
                ]),
                None => Line::from(Span::styled(
                    line.to_string(),
                    Style::default().fg(Color::Cyan),
                )),
            }
        })
        .collect()
}

fn health_bar(character: &Character, width: u16) -> Line<'static> {
    let percent = character.health_percent();
    let color = if percent > 50.0 {
        Color::Green
    } else if percent > 25.0 {
        Color::Yellow
    } else {
        Color::Red
    };

    let width = width as usize;
    let filled = ((percent / 100.0) * width as f64) as usize;
    let empty = width.saturating_sub(filled);
    Line::from(Span::styled(
        format!("{}{}", "█".repeat(filled), "░".repeat(empty)),
        Style::default().fg(color),
    ))
}

fn draw_battle_log(f: &mut Frame, app: &App, area: Rect) {
    let log = app.battle.log();
    let visible = area.height.saturating_sub(2) as usize;
    let end = log.len().saturating_sub(app.log_scroll);
    let start = end.saturating_sub(visible);

    let items: Vec<ListItem> = log[start..end]
        .iter()
        .map(|line| {
            let style = if line.contains("Game Over") {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else if line.starts_with("You defeated") || line.starts_with("A wild") {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if line.starts_with("You take") {
                Style::default().fg(Color::Red)
            } else if line.starts_with("You attack") {
                Style::default().fg(Color::Green)
            } else if line.starts_with("Shield") || line.contains("shield") {
                Style::default().fg(Color::Cyan)
            } else if line.contains("SMASHES") || line.contains("CLEAVING") || line.contains("riposte") {
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(line.clone(), style)))
        })
        .collect();

    let title = if app.log_scroll > 0 {
        format!(" Battle Log (-{}) ", app.log_scroll)
    } else {
        " Battle Log ".to_string()
    };
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let keys: Vec<(&str, &str)> = if app.battle.is_active() {
        vec![
            ("a/Space", "Attack"),
            ("s", "Shield"),
            ("↑/↓", "Scroll log"),
            ("r", "Restart"),
            ("q", "Quit"),
        ]
    } else {
        vec![("r", "Restart"), ("↑/↓", "Scroll log"), ("q", "Quit")]
    };

    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
