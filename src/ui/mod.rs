mod app;
mod probability_dialog;

pub use app::{App, Screen};

use gacha::{PityConfig, PullState, RarityOutcome};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let size = frame.size();

    match &app.screen {
        Screen::Main => draw_pull_panel(frame, size, app),
        Screen::History => draw_history_panel(frame, size, app),
        Screen::Probability(dialog) => {
            draw_pull_panel(frame, size, app);
            dialog.draw(frame, size);
        }
    }
}

fn rarity_color(outcome: RarityOutcome) -> Color {
    match outcome {
        RarityOutcome::ThreeStar => Color::White,
        RarityOutcome::FourStar => Color::Magenta,
        RarityOutcome::FiveStar => Color::Yellow,
        RarityOutcome::FeaturedFiveStar => Color::LightRed,
    }
}

fn featured_odds_text(state: &PullState, config: &PityConfig) -> String {
    if state.featured_guaranteed(config) {
        "Next 5★ is guaranteed up!5★".to_string()
    } else {
        format!(
            "Next 5★ is up!5★ with {:.0}% chance",
            config.featured_rate * 100.0
        )
    }
}

fn draw_pull_panel(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Gacha Simulator ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(4), // Results
            Constraint::Length(4), // Pity counters
            Constraint::Length(2), // Status
            Constraint::Min(0),
            Constraint::Length(1), // Controls
        ])
        .split(inner);

    let title = Paragraph::new("Welcome to the Gacha Simulator!")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let best = app.last_results.iter().max().copied();
    let mut result_style = Style::default().fg(best.map_or(Color::White, rarity_color));
    if best.is_some_and(|b| b.is_five_star()) {
        result_style = result_style.add_modifier(Modifier::BOLD);
    }
    let results = Paragraph::new(app.result_line())
        .style(result_style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(results, chunks[1]);

    let state = app.session.state();
    let config = app.session.config();
    let counters = vec![
        Line::from(format!(
            "Pulls since 4★: {}/{}",
            state.pulls_since_four_star, config.four_star_pity
        )),
        Line::from(format!(
            "Pulls since 5★: {}/{}",
            state.pulls_since_five_star, config.hard_pity_ceiling
        )),
        Line::from(Span::styled(
            featured_odds_text(state, config),
            Style::default().fg(if state.featured_guaranteed(config) {
                Color::Green
            } else {
                Color::Gray
            }),
        )),
    ];
    frame.render_widget(
        Paragraph::new(counters).alignment(Alignment::Center),
        chunks[2],
    );

    if let Some(status) = &app.status {
        let status = Paragraph::new(status.as_str())
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center);
        frame.render_widget(status, chunks[3]);
    }

    let controls = Paragraph::new(
        "[1] Single Pull  [0] 10 Pulls  [h] History  [p] Calculate Probability  [q] Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::Gray));
    frame.render_widget(controls, chunks[5]);
}

fn draw_history_panel(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Pull History ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let history = app.session.history();
    let mut lines = vec![Line::from(Span::styled(
        format!("Total Pulls: {}", history.total_pulls()),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    lines.push(Line::from(""));
    for outcome in RarityOutcome::ALL {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>6}", outcome.label()),
                Style::default().fg(rarity_color(outcome)),
            ),
            Span::raw(format!(
                ": {:>6}  ({:>5.2}%)",
                history.count(outcome),
                history.share(outcome) * 100.0
            )),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        chunks[0],
    );

    let controls = Paragraph::new("[r] Reset History  [Esc] Back")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(controls, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_odds_follow_banner_rate() {
        let config = PityConfig {
            featured_rate: 0.75,
            ..PityConfig::standard()
        };
        assert_eq!(
            featured_odds_text(&PullState::new(), &config),
            "Next 5★ is up!5★ with 75% chance"
        );
        assert_eq!(
            featured_odds_text(&PullState::new(), &PityConfig::standard()),
            "Next 5★ is up!5★ with 50% chance"
        );
    }

    #[test]
    fn test_featured_odds_after_lost_roll() {
        let state = PullState {
            pulls_since_featured: 1,
            ..PullState::new()
        };
        assert_eq!(
            featured_odds_text(&state, &PityConfig::standard()),
            "Next 5★ is guaranteed up!5★"
        );
    }
}
