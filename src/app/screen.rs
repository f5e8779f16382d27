//! Application screen state management
//!
//! Handles transitions between the main menu and a game in progress.

use crate::config::GameConfig;
use crate::game::{Dictionary, GameController};
use std::sync::Arc;

use super::state::App;

/// Menu option on the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    NewGame,
    Quit,
}

impl MenuOption {
    /// Get all menu options in order
    pub fn all() -> &'static [MenuOption] {
        &[MenuOption::NewGame, MenuOption::Quit]
    }

    /// Get the display label for this option
    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::NewGame => "New Game",
            MenuOption::Quit => "Quit",
        }
    }
}

/// The current application screen
pub enum Screen {
    /// Main menu
    Menu { selected: usize },
    /// Playing a game
    Playing { app: App },
}

/// Main application coordinator
pub struct AppCoordinator {
    /// Current screen
    pub screen: Screen,
    /// Whether the application should quit
    pub should_quit: bool,
    config: GameConfig,
    dictionary: Arc<Dictionary>,
}

impl AppCoordinator {
    /// Create a new app coordinator starting at the menu
    pub fn new(config: GameConfig, dictionary: Arc<Dictionary>) -> Self {
        Self {
            screen: Screen::Menu { selected: 0 },
            should_quit: false,
            config,
            dictionary,
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Go back to the main menu
    pub fn go_to_menu(&mut self) {
        self.screen = Screen::Menu { selected: 0 };
    }

    /// Deal a new game and switch to it
    pub fn start_game(&mut self) {
        let game = GameController::new(&self.config, Arc::clone(&self.dictionary));
        self.screen = Screen::Playing { app: App::new(game) };
    }

    /// Handle menu navigation (up)
    pub fn menu_up(&mut self) {
        if let Screen::Menu { selected } = &mut self.screen {
            if *selected > 0 {
                *selected -= 1;
            }
        }
    }

    /// Handle menu navigation (down)
    pub fn menu_down(&mut self) {
        if let Screen::Menu { selected } = &mut self.screen {
            if *selected < MenuOption::all().len() - 1 {
                *selected += 1;
            }
        }
    }

    /// Handle menu selection (Enter)
    pub fn menu_select(&mut self) {
        let selected = match &self.screen {
            Screen::Menu { selected } => *selected,
            _ => return,
        };

        match MenuOption::all()[selected] {
            MenuOption::NewGame => self.start_game(),
            MenuOption::Quit => self.quit(),
        }
    }

    /// Poll for updates (call regularly)
    pub fn poll(&mut self) {
        if let Screen::Playing { app } = &mut self.screen {
            app.poll();
            if app.should_quit {
                self.should_quit = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinator() -> AppCoordinator {
        let config = GameConfig {
            seed: Some(11),
            ..GameConfig::default()
        };
        AppCoordinator::new(config, Arc::new(Dictionary::new()))
    }

    #[test]
    fn test_starts_at_menu() {
        let coordinator = coordinator();
        assert!(matches!(coordinator.screen, Screen::Menu { selected: 0 }));
        assert!(!coordinator.should_quit);
    }

    #[test]
    fn test_menu_navigation_bounds() {
        let mut coordinator = coordinator();
        coordinator.menu_up();
        assert!(matches!(coordinator.screen, Screen::Menu { selected: 0 }));

        coordinator.menu_down();
        coordinator.menu_down();
        assert!(matches!(coordinator.screen, Screen::Menu { selected: 1 }));
    }

    #[test]
    fn test_new_game_from_menu() {
        let mut coordinator = coordinator();
        coordinator.menu_select();
        match &coordinator.screen {
            Screen::Playing { app } => {
                assert_eq!(app.game.rack().len(), 21);
                assert_eq!(app.game.reserve_len(), 55);
            }
            _ => panic!("expected playing screen"),
        }
    }

    #[test]
    fn test_quit_from_menu() {
        let mut coordinator = coordinator();
        coordinator.menu_down();
        coordinator.menu_select();
        assert!(coordinator.should_quit);
    }

    #[test]
    fn test_back_to_menu() {
        let mut coordinator = coordinator();
        coordinator.start_game();
        coordinator.go_to_menu();
        assert!(matches!(coordinator.screen, Screen::Menu { .. }));
    }
}
