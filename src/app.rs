use anyhow::Result;
use tracing::info;

use gridfall::input::KeyAction;
use gridfall::{GameSession, RenderedGrid};

use crate::config::Config;

pub struct App {
    pub session: GameSession,
    pub grid: RenderedGrid,
    pub game_over: bool,
    pub should_quit: bool,
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let mut session = new_session(&config)?;
        let grid = session.start_game();
        let game_over = session.is_game_over() || grid.is_game_over_banner();
        Ok(Self {
            session,
            grid,
            game_over,
            should_quit: false,
            config,
        })
    }

    pub fn handle(&mut self, action: KeyAction) -> Result<()> {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Restart => self.restart()?,
            // Controls are disabled once the game has ended
            KeyAction::Move(_) if self.game_over => {}
            KeyAction::Move(token) => {
                self.grid = self.session.move_figure(token);
                if self.session.is_game_over() || self.grid.is_game_over_banner() {
                    info!(score = self.session.score(), "game over");
                    self.game_over = true;
                }
            }
            KeyAction::Ignore => {}
        }
        Ok(())
    }

    fn restart(&mut self) -> Result<()> {
        self.session = new_session(&self.config)?;
        self.grid = self.session.start_game();
        self.game_over = false;
        Ok(())
    }
}

fn new_session(config: &Config) -> Result<GameSession> {
    let session = match config.seed {
        Some(seed) => GameSession::seeded(config.rows, config.columns, seed)?,
        None => GameSession::new(config.rows, config.columns)?,
    };
    Ok(session)
}
