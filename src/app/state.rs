//! Play-screen state: cursor, rack selection, and input handling

use crate::game::{Coordinate, GameController, GameError, GameEvent, TileSource};

/// Message shown when a spin is refused.
pub const INSUFFICIENT_POOL_MESSAGE: &str = "Not enough tiles left in the pool!";

/// Main application state while a game is on screen
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,
    /// The game being played
    pub game: GameController,
    /// Board cell under the cursor
    pub cursor: Coordinate,
    /// Selected rack slot
    pub rack_selected: usize,
    /// Board tile picked up to be moved, if any
    pub moving: Option<Coordinate>,
    /// Feedback message from the last action
    pub feedback: String,
    /// Whether the word list was loaded at the last check
    dictionary_ready: bool,
}

impl App {
    /// Wrap a freshly dealt game
    pub fn new(game: GameController) -> Self {
        let cursor = Coordinate::new(game.board().width() / 2, game.board().height() / 2);
        let dictionary_ready = game.dictionary().is_loaded();
        Self {
            should_quit: false,
            game,
            cursor,
            rack_selected: 0,
            moving: None,
            feedback: String::new(),
            dictionary_ready,
        }
    }

    /// Signal the application to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn is_won(&self) -> bool {
        self.game.is_won()
    }

    /// Move the board cursor, clamped to the grid
    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let board = self.game.board();
        let x = (self.cursor.x as i32 + dx).clamp(0, board.width() as i32 - 1);
        let y = (self.cursor.y as i32 + dy).clamp(0, board.height() as i32 - 1);
        self.cursor = Coordinate::new(x as u16, y as u16);
    }

    /// Cycle the rack selection forward (Tab) or backward (BackTab)
    pub fn cycle_rack(&mut self, forward: bool) {
        let len = self.game.rack().len();
        if len == 0 {
            self.rack_selected = 0;
            return;
        }
        self.rack_selected = if forward {
            (self.rack_selected + 1) % len
        } else {
            (self.rack_selected + len - 1) % len
        };
    }

    /// Enter: drop the moving board tile, or the selected rack tile, at the cursor
    pub fn on_drop(&mut self) {
        if self.is_won() {
            return;
        }
        self.begin_action();

        let source = match self.moving {
            Some(at) => TileSource::Board { at },
            None => TileSource::Rack {
                index: self.rack_selected,
            },
        };

        match self.game.place_tile(source, self.cursor) {
            Ok(event) => {
                self.moving = None;
                self.handle_event(event);
            }
            // Occupied cell: the tile bounces back to where it came from
            Err(GameError::OccupiedCell(_)) => {}
            Err(GameError::EmptySource) => {
                self.moving = None;
                self.feedback = "Rack is empty".to_string();
            }
            Err(e) => self.feedback = e.to_string(),
        }
        self.clamp_rack_selection();
    }

    /// `m`: pick up the board tile under the cursor to move it
    pub fn on_pick_up(&mut self) {
        if self.is_won() {
            return;
        }
        self.begin_action();
        if self.game.board().is_occupied(self.cursor) {
            self.moving = Some(self.cursor);
        }
    }

    /// Esc during a move: put the tile down where it was
    pub fn cancel_move(&mut self) -> bool {
        self.moving.take().is_some()
    }

    /// Backspace / `r`: return the tile under the cursor to the rack
    pub fn on_return(&mut self) {
        if self.is_won() {
            return;
        }
        self.begin_action();
        if self.moving == Some(self.cursor) {
            self.moving = None;
        }
        match self.game.return_to_rack(self.cursor) {
            Ok(event) => self.handle_event(event),
            Err(e) => self.feedback = e.to_string(),
        }
    }

    /// `s`: spin the selected rack tile
    pub fn on_spin_rack(&mut self) {
        self.spin(TileSource::Rack {
            index: self.rack_selected,
        });
    }

    /// `S`: spin the board tile under the cursor
    pub fn on_spin_board(&mut self) {
        self.spin(TileSource::Board { at: self.cursor });
    }

    fn spin(&mut self, source: TileSource) {
        if self.is_won() {
            return;
        }
        self.begin_action();
        match self.game.spin(source) {
            Ok(outcome) => {
                if matches!(source, TileSource::Board { at } if self.moving == Some(at)) {
                    self.moving = None;
                }
                let drawn: String = outcome.drawn.iter().map(|t| t.letter).collect();
                self.feedback = format!("SPIN! {} -> {}", outcome.discarded.letter, drawn);
            }
            Err(GameError::InsufficientPool { .. }) => {
                self.feedback = INSUFFICIENT_POOL_MESSAGE.to_string();
            }
            Err(GameError::EmptySource) => {}
            Err(e) => self.feedback = e.to_string(),
        }
        self.clamp_rack_selection();
    }

    /// Called every loop iteration; re-validates once the word list arrives
    pub fn poll(&mut self) {
        if !self.dictionary_ready && self.game.dictionary().is_loaded() {
            self.dictionary_ready = true;
            tracing::info!("word list ready, re-validating board");
            let event = self.game.revalidate();
            self.handle_event(event);
        }
    }

    /// New-tile highlights last until the next action
    fn begin_action(&mut self) {
        self.game.acknowledge_new_tiles();
        self.feedback.clear();
    }

    fn handle_event(&mut self, event: Option<GameEvent>) {
        match event {
            Some(GameEvent::Boogie(tile)) => {
                self.feedback = format!("BOOGIE! +{}", tile.letter);
            }
            Some(GameEvent::Win) => {
                self.feedback = "YOU WIN!".to_string();
            }
            None => {}
        }
    }

    fn clamp_rack_selection(&mut self) {
        let len = self.game.rack().len();
        if self.rack_selected >= len {
            self.rack_selected = len.saturating_sub(1);
        }
    }
}
