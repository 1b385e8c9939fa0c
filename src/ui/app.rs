//! Front-end state and key handling, independent of the terminal.

use super::probability_dialog::ProbabilityDialog;
use crossterm::event::KeyCode;
use gacha::{GachaSession, PityConfig, RarityOutcome};

pub enum Screen {
    Main,
    History,
    Probability(ProbabilityDialog),
}

pub struct App {
    pub session: GachaSession,
    pub screen: Screen,
    pub last_results: Vec<RarityOutcome>,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: PityConfig, seed: Option<u64>) -> Self {
        let session = match seed {
            Some(seed) => GachaSession::with_seed(config, seed),
            None => GachaSession::new(config),
        };
        Self {
            session,
            screen: Screen::Main,
            last_results: Vec::new(),
            status: None,
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        if let Screen::Probability(dialog) = &mut self.screen {
            if dialog.handle_key(code, self.session.config()) {
                self.screen = Screen::Main;
            }
            return;
        }

        match self.screen {
            Screen::Main => self.handle_main_key(code),
            Screen::History => self.handle_history_key(code),
            Screen::Probability(_) => {}
        }
    }

    fn handle_main_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('1') | KeyCode::Char('s') => {
                self.last_results = vec![self.session.single_pull()];
                self.status = None;
            }
            KeyCode::Char('0') | KeyCode::Char('t') => {
                self.last_results = self.session.ten_pull();
                self.status = None;
            }
            KeyCode::Char('h') => self.screen = Screen::History,
            KeyCode::Char('p') => self.screen = Screen::Probability(ProbabilityDialog::new()),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('r') => {
                self.session.reset();
                self.last_results.clear();
                self.status = Some("Pull history has been reset.".to_string());
                self.screen = Screen::Main;
            }
            KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('q') => self.screen = Screen::Main,
            _ => {}
        }
    }

    /// "Result: 3★" for one pull, "Results: 3★, 4★, …" for a batch.
    pub fn result_line(&self) -> String {
        let labels: Vec<&str> = self.last_results.iter().map(|r| r.label()).collect();
        match labels.len() {
            0 => "Result: ".to_string(),
            1 => format!("Result: {}", labels[0]),
            _ => format!("Results: {}", labels.join(", ")),
        }
    }
}
