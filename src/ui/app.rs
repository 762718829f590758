use crate::config::AppConfig;
use crate::game::{GameOutcome, GameState, Player, Side, TurnOutcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    game: GameState,
    config: AppConfig,
    input: String,
    message: Option<String>,
    show_rules: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            game: GameState::with_stones(config.board.stones_per_pocket),
            config,
            input: String::new(),
            message: None,
            show_rules: false,
            should_quit: false,
        }
    }

    fn name_of(&self, player: Player) -> &str {
        match player {
            Player::One => &self.config.players.one,
            Player::Two => &self.config.players.two,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        if self.show_rules {
            // Any key closes the rules overlay.
            self.show_rules = false;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.show_rules = true;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.game = GameState::with_stones(self.config.board.stones_per_pocket);
                self.input.clear();
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                self.submit_move();
            }
            KeyCode::Char(c) if is_identifier_char(c) => {
                self.message = None;
                if self.input.len() < 2 {
                    self.input.push(c.to_ascii_uppercase());
                }
            }
            _ => {}
        }
    }

    /// Apply the typed identifier as the current player's move
    fn submit_move(&mut self) {
        if self.game.is_terminal() {
            self.message = Some("Game over! Press 'n' for a new game.".to_string());
            return;
        }

        let mover = self.game.current_player();
        let input = std::mem::take(&mut self.input);

        match self.game.apply_move(&input) {
            Ok(outcome) => {
                self.message = Some(match outcome {
                    TurnOutcome::ExtraTurn => {
                        format!("Free turn! {} goes again.", self.name_of(mover))
                    }
                    TurnOutcome::Capture { captured } => {
                        format!("Nice steal! {} captured {captured} stones.", self.name_of(mover))
                    }
                    TurnOutcome::Switched => {
                        format!("{}'s turn.", self.name_of(mover.other()))
                    }
                });

                if let Some(result) = self.game.outcome() {
                    self.message = Some(self.final_report(result));
                }
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    fn final_report(&self, result: GameOutcome) -> String {
        let verdict = match result {
            GameOutcome::Winner(p) => format!("{} wins!", self.name_of(p)),
            GameOutcome::Tie => "It's a tie!".to_string(),
        };
        format!(
            "Game over! {}: {}  {}: {}  \u{2014}  {verdict}",
            self.config.players.one,
            self.game.board().store(Side::Left),
            self.config.players.two,
            self.game.board().store(Side::Right),
        )
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        if self.show_rules {
            super::game_view::render_rules(frame);
        } else {
            super::game_view::render(
                frame,
                &self.game,
                (&self.config.players.one, &self.config.players.two),
                &self.input,
                &self.message,
            );
        }
    }
}

fn is_identifier_char(c: char) -> bool {
    matches!(c, '1'..='6' | 'l' | 'L' | 'r' | 'R' | 's' | 'S')
}
