//! 游戏循环
//!
//! Strictly turn based: draw, wait for one command, resolve it, repeat.
//! Nothing happens between key presses.

use crate::game::Game;
use crate::input::{Command, InputSource};
use crate::renderer::RatatuiRenderer;
use ratatui::backend::Backend;

pub struct GameLoop<B: Backend, I: InputSource> {
    pub game: Game,
    pub renderer: RatatuiRenderer<B>,
    pub input_source: I,
    pub is_running: bool,
}

impl<B: Backend, I: InputSource> GameLoop<B, I> {
    pub fn new(game: Game, renderer: RatatuiRenderer<B>, input_source: I) -> Self {
        Self {
            game,
            renderer,
            input_source,
            is_running: true,
        }
    }

    /// Run until the player quits.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.renderer.clear()?;
        while self.is_running {
            self.renderer.draw(&self.game)?;
            let command = self.input_source.next_command()?;
            self.step(command);
        }
        log::info!("quit on level {}", self.game.level());
        Ok(())
    }

    /// Apply one command to the game.
    pub fn step(&mut self, command: Command) {
        match command {
            Command::Quit => self.is_running = false,
            Command::Intent(intent) => {
                if !self.game.handle_intent(intent) {
                    log::trace!("{:?} rejected", intent);
                }
                for event in self.game.drain_events() {
                    log::debug!("event: {:?}", event);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::Intent;
    use dungeon::GameConfig;
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;

    struct Scripted(VecDeque<Command>);

    impl InputSource for Scripted {
        fn next_command(&mut self) -> anyhow::Result<Command> {
            Ok(self.0.pop_front().unwrap_or(Command::Quit))
        }
    }

    #[test]
    fn runs_scripted_commands_until_quit() {
        let game = Game::new(GameConfig::default(), 3);
        let renderer = RatatuiRenderer::new(TestBackend::new(60, 40)).unwrap();
        let script = Scripted(VecDeque::from([
            Command::Intent(Intent::Attack),
            Command::Intent(Intent::Restart),
            Command::Quit,
            Command::Intent(Intent::Restart),
        ]));
        let mut game_loop = GameLoop::new(game, renderer, script);

        game_loop.run().unwrap();
        assert!(!game_loop.is_running);
        assert_eq!(game_loop.game.level(), 1);
        // the command after quit is never read
        assert_eq!(game_loop.input_source.0.len(), 1);
    }
}
