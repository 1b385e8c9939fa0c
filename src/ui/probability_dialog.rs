use crossterm::event::KeyCode;
use gacha::simulator::estimate_probability_for;
use gacha::PityConfig;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PlannedPulls,
    Target,
}

/// "Calculate Probability" dialog: two integer inputs and a result line.
pub struct ProbabilityDialog {
    pub planned_pulls_input: String,
    pub target_input: String,
    pub focus: Field,
    pub outcome: Option<Result<f64, String>>,
}

impl Default for ProbabilityDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbabilityDialog {
    pub fn new() -> Self {
        Self {
            planned_pulls_input: String::new(),
            target_input: String::new(),
            focus: Field::PlannedPulls,
            outcome: None,
        }
    }

    /// Returns true when the dialog should close. `pity` is the banner the
    /// session pulls on.
    pub fn handle_key(&mut self, code: KeyCode, pity: &PityConfig) -> bool {
        match code {
            KeyCode::Esc => return true,
            KeyCode::Tab | KeyCode::Down | KeyCode::Up | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Enter => self.calculate(pity),
            KeyCode::Backspace => {
                self.focused_input().pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                let input = self.focused_input();
                if input.len() < 9 {
                    input.push(c);
                }
            }
            _ => {}
        }
        false
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::PlannedPulls => Field::Target,
            Field::Target => Field::PlannedPulls,
        };
    }

    fn focused_input(&mut self) -> &mut String {
        match self.focus {
            Field::PlannedPulls => &mut self.planned_pulls_input,
            Field::Target => &mut self.target_input,
        }
    }

    /// Parse both fields and run the estimator on `pity`.
    pub fn calculate(&mut self, pity: &PityConfig) {
        let parsed = (
            self.planned_pulls_input.trim().parse::<i64>(),
            self.target_input.trim().parse::<i64>(),
        );
        self.outcome = Some(match parsed {
            (Ok(pulls), Ok(target)) => {
                estimate_probability_for(pulls, target, pity).map_err(|e| e.to_string())
            }
            _ => Err("Please enter valid integer values.".to_string()),
        });
    }

    pub fn outcome_text(&self) -> Option<String> {
        self.outcome.as_ref().map(|outcome| match outcome {
            Ok(probability) => format!("Probability: {:.2}%", probability * 100.0),
            Err(message) => format!("✗ {}", message),
        })
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let width = 52.min(area.width);
        let height = 14.min(area.height);
        let dialog_area = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        f.render_widget(Clear, dialog_area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Calculate Probability ");
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Prompt
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Planned pulls
                Constraint::Length(1), // Target
                Constraint::Length(1), // Spacer
                Constraint::Length(2), // Result
                Constraint::Min(0),
                Constraint::Length(1), // Controls
            ])
            .split(inner);

        let prompt = Paragraph::new("Enter planned pulls and target up!5★:")
            .alignment(Alignment::Center);
        f.render_widget(prompt, chunks[0]);

        f.render_widget(
            self.input_line("Planned Pulls:", &self.planned_pulls_input, Field::PlannedPulls),
            chunks[2],
        );
        f.render_widget(
            self.input_line("Target up!5★: ", &self.target_input, Field::Target),
            chunks[3],
        );

        if let Some(text) = self.outcome_text() {
            let color = match self.outcome {
                Some(Ok(_)) => Color::Green,
                _ => Color::Red,
            };
            let result = Paragraph::new(Line::from(Span::styled(
                text,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center);
            f.render_widget(result, chunks[5]);
        }

        let controls = Paragraph::new("[Tab] Switch  [Enter] Calculate  [Esc] Close")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[7]);
    }

    fn input_line<'a>(&self, label: &'a str, value: &'a str, field: Field) -> Paragraph<'a> {
        let focused = self.focus == field;
        let value_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let cursor = if focused { "_" } else { "" };

        Paragraph::new(Line::from(vec![
            Span::raw(format!("  {} ", label)),
            Span::styled(format!("{}{}", value, cursor), value_style),
        ]))
    }
}
