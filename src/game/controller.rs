//! Game progression: placing, returning and spinning tiles
//!
//! Every board change is followed by a full validation pass and an advance
//! check. When the board is complete (all tiles valid and connected) and the
//! rack is empty, the player either "Boogies" (draws one tile from the reserve)
//! or, with the reserve exhausted, wins.

use super::board::{Board, Coordinate};
use super::dictionary::Dictionary;
use super::error::GameError;
use super::rack::Rack;
use super::tiles::{deal, Tile, TileIdGenerator, LETTER_DISTRIBUTION};
use super::validation::{evaluate, Evaluation};
use crate::config::GameConfig;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Tiles drawn by a spin.
pub const SPIN_DRAW: usize = 3;

/// Where a tile is picked up from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileSource {
    Rack { index: usize },
    Board { at: Coordinate },
}

/// What happens to a spun tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpinPolicy {
    /// The tile leaves play for good
    #[default]
    Discard,
    /// The tile goes back into the reserve, which is reshuffled before drawing
    Reshuffle,
}

impl FromStr for SpinPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "discard" => Ok(SpinPolicy::Discard),
            "reshuffle" => Ok(SpinPolicy::Reshuffle),
            other => Err(format!("unknown spin policy: {}", other)),
        }
    }
}

impl fmt::Display for SpinPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpinPolicy::Discard => write!(f, "discard"),
            SpinPolicy::Reshuffle => write!(f, "reshuffle"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Won,
}

/// Signals fired by the advance check, at most one per evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// One tile moved from the reserve into the rack
    Boogie(Tile),
    /// Reserve empty, rack empty, board complete
    Win,
}

/// Result of a successful spin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinOutcome {
    pub discarded: Tile,
    pub drawn: Vec<Tile>,
}

/// Owns board, rack and reserve; the only mutator of game state.
pub struct GameController {
    board: Board,
    rack: Rack,
    reserve: VecDeque<Tile>,
    ids: TileIdGenerator,
    rng: StdRng,
    dictionary: Arc<Dictionary>,
    spin_policy: SpinPolicy,
    evaluation: Evaluation,
    phase: Phase,
}

impl GameController {
    /// Deal a new game.
    pub fn new(config: &GameConfig, dictionary: Arc<Dictionary>) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut ids = TileIdGenerator::default();
        let dealt = deal(
            &LETTER_DISTRIBUTION,
            config.total_tiles,
            config.rack_size,
            &mut ids,
            &mut rng,
        );

        tracing::info!(
            rack = dealt.rack.len(),
            reserve = dealt.reserve.len(),
            policy = %config.spin_policy,
            "new game dealt"
        );

        let mut controller = Self {
            board: Board::new(config.grid_width, config.grid_height),
            rack: Rack::new(dealt.rack),
            reserve: dealt.reserve.into(),
            ids,
            rng,
            dictionary,
            spin_policy: config.spin_policy,
            evaluation: Evaluation::default(),
            phase: Phase::Playing,
        };
        controller.evaluation = evaluate(&controller.board, controller.dictionary.as_ref());
        tracing::debug!(rack = %controller.rack.as_string(), "starting rack");
        controller
    }

    /// A game with a fixed rack and reserve, for tests.
    #[cfg(test)]
    pub fn with_tiles(
        width: u16,
        height: u16,
        rack: &str,
        reserve: &str,
        dictionary: Arc<Dictionary>,
        spin_policy: SpinPolicy,
    ) -> Self {
        let mut ids = TileIdGenerator::default();
        let rack_tiles: Vec<Tile> = rack.chars().map(|c| ids.tile(c)).collect();
        let reserve_tiles: VecDeque<Tile> = reserve.chars().map(|c| ids.tile(c)).collect();
        let board = Board::new(width, height);
        let evaluation = evaluate(&board, dictionary.as_ref());
        Self {
            board,
            rack: Rack::new(rack_tiles),
            reserve: reserve_tiles,
            ids,
            rng: StdRng::seed_from_u64(0),
            dictionary,
            spin_policy,
            evaluation,
            phase: Phase::Playing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub fn reserve_len(&self) -> usize {
        self.reserve.len()
    }

    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }

    pub fn spin_policy(&self) -> SpinPolicy {
        self.spin_policy
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The tile a source currently refers to.
    pub fn tile_at(&self, source: TileSource) -> Option<&Tile> {
        match source {
            TileSource::Rack { index } => self.rack.get(index),
            TileSource::Board { at } => self.board.get(at),
        }
    }

    /// Drop a tile from the rack or another cell onto `target`.
    ///
    /// An occupied or off-board target leaves the tile where it was.
    pub fn place_tile(
        &mut self,
        source: TileSource,
        target: Coordinate,
    ) -> Result<Option<GameEvent>, GameError> {
        self.ensure_playing()?;
        if self.tile_at(source).is_none() {
            return Err(GameError::EmptySource);
        }
        if !self.board.contains(target) {
            return Err(GameError::OutOfBounds(target));
        }
        if self.board.is_occupied(target) {
            tracing::debug!(cell = %target, "drop rejected, cell occupied");
            return Err(GameError::OccupiedCell(target));
        }

        let tile = self.take_from(source)?;
        tracing::debug!(id = %tile.id, letter = %tile.letter, cell = %target, "tile placed");
        self.board.place(target, tile)?;

        Ok(self.after_board_change())
    }

    /// Send the tile at `at` back to the end of the rack. Empty cells are ignored.
    pub fn return_to_rack(&mut self, at: Coordinate) -> Result<Option<GameEvent>, GameError> {
        self.ensure_playing()?;
        let Some(id) = self.board.get(at).map(|t| t.id) else {
            return Ok(None);
        };
        if self.rack.contains(id) {
            tracing::warn!(%id, from = %at, "tile already in rack, leaving it on the board");
            return Err(GameError::DuplicateTile(id));
        }
        let tile = self.board.take(at).ok_or(GameError::EmptySource)?;

        tracing::debug!(id = %tile.id, letter = %tile.letter, from = %at, "tile returned to rack");
        self.rack.push(tile);

        Ok(self.after_board_change())
    }

    /// Trade one tile for three fresh ones from the reserve.
    pub fn spin(&mut self, source: TileSource) -> Result<SpinOutcome, GameError> {
        self.ensure_playing()?;
        if self.tile_at(source).is_none() {
            return Err(GameError::EmptySource);
        }
        if self.reserve.len() < SPIN_DRAW {
            return Err(GameError::InsufficientPool {
                available: self.reserve.len(),
                required: SPIN_DRAW,
            });
        }

        let discarded = self.take_from(source)?;

        if self.spin_policy == SpinPolicy::Reshuffle {
            self.reserve.push_back(discarded.clone());
            self.reserve.make_contiguous().shuffle(&mut self.rng);
        }

        let mut drawn = Vec::with_capacity(SPIN_DRAW);
        for _ in 0..SPIN_DRAW {
            let Some(next) = self.reserve.pop_front() else {
                break;
            };
            let tile = self.ids.redraw(next);
            self.rack.push(tile.clone());
            drawn.push(tile);
        }

        tracing::info!(
            letter = %discarded.letter,
            drawn = %drawn.iter().map(|t| t.letter).collect::<String>(),
            reserve = self.reserve.len(),
            "spin"
        );

        // The rack now holds the drawn tiles, so this cannot Boogie or Win
        self.after_board_change();

        Ok(SpinOutcome { discarded, drawn })
    }

    /// Re-run validation without a board change (e.g. once the word list loads).
    pub fn revalidate(&mut self) -> Option<GameEvent> {
        if self.is_won() {
            return None;
        }
        self.after_board_change()
    }

    /// Clear the "new" highlight on rack tiles.
    pub fn acknowledge_new_tiles(&mut self) {
        self.rack.clear_new_flags();
    }

    fn ensure_playing(&self) -> Result<(), GameError> {
        match self.phase {
            Phase::Playing => Ok(()),
            Phase::Won => Err(GameError::GameOver),
        }
    }

    fn take_from(&mut self, source: TileSource) -> Result<Tile, GameError> {
        match source {
            TileSource::Rack { index } => {
                let id = self.rack.get(index).ok_or(GameError::EmptySource)?.id;
                self.rack.remove(id).ok_or(GameError::EmptySource)
            }
            TileSource::Board { at } => self.board.take(at).ok_or(GameError::EmptySource),
        }
    }

    fn after_board_change(&mut self) -> Option<GameEvent> {
        self.evaluation = evaluate(&self.board, self.dictionary.as_ref());
        self.advance()
    }

    fn advance(&mut self) -> Option<GameEvent> {
        if self.is_won() || !self.evaluation.is_complete() || !self.rack.is_empty() {
            return None;
        }

        match self.reserve.pop_front() {
            Some(next) => {
                let tile = self.ids.redraw(next);
                tracing::info!(letter = %tile.letter, reserve = self.reserve.len(), "boogie");
                self.rack.push(tile.clone());
                Some(GameEvent::Boogie(tile))
            }
            None => {
                tracing::info!(tiles = self.board.len(), "game won");
                self.phase = Phase::Won;
                Some(GameEvent::Win)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn dictionary() -> Arc<Dictionary> {
        Arc::new(Dictionary::from_words(["cat", "dog", "cats", "act", "tab"]))
    }

    fn game(rack: &str, reserve: &str) -> GameController {
        GameController::with_tiles(10, 10, rack, reserve, dictionary(), SpinPolicy::Discard)
    }

    const FRONT: TileSource = TileSource::Rack { index: 0 };

    /// Place the front rack tile at each target in turn, returning the last event.
    fn play_front(game: &mut GameController, targets: &[(u16, u16)]) -> Option<GameEvent> {
        let mut last = None;
        for &(x, y) in targets {
            last = game.place_tile(FRONT, Coordinate::new(x, y)).unwrap();
        }
        last
    }

    fn letters(tiles: &[Tile]) -> String {
        tiles.iter().map(|t| t.letter).collect()
    }

    #[test]
    fn test_new_game_deals_from_config() {
        let config = GameConfig {
            seed: Some(9),
            ..GameConfig::default()
        };
        let game = GameController::new(&config, dictionary());
        assert_eq!(game.rack().len(), 21);
        assert_eq!(game.reserve_len(), 55);
        assert!(game.board().is_empty());
        assert_eq!(game.phase, Phase::Playing);
    }

    #[test]
    fn test_seeded_games_match() {
        let config = GameConfig {
            seed: Some(1234),
            ..GameConfig::default()
        };
        let a = GameController::new(&config, dictionary());
        let b = GameController::new(&config, dictionary());
        assert_eq!(a.rack().as_string(), b.rack().as_string());
    }

    #[test]
    fn test_empty_board_no_advance() {
        let mut game = game("CAT", "XYZ");
        assert!(game.evaluation().contiguous);
        assert!(game.evaluation().all_placed_valid);
        assert_eq!(game.revalidate(), None);
        assert_eq!(game.rack().len(), 3);
        assert_eq!(game.reserve_len(), 3);
    }

    #[test]
    fn test_place_from_rack() {
        let mut game = game("CAT", "XYZ");
        let event = game.place_tile(TileSource::Rack { index: 1 }, Coordinate::new(4, 4)).unwrap();
        assert_eq!(event, None);
        assert_eq!(game.rack().as_string(), "CT");
        assert_eq!(game.board().get(Coordinate::new(4, 4)).map(|t| t.letter), Some('A'));
    }

    #[test]
    fn test_move_tile_on_board() {
        let mut game = game("CAT", "XYZ");
        play_front(&mut game, &[(0, 0)]);

        game.place_tile(TileSource::Board { at: Coordinate::new(0, 0) }, Coordinate::new(3, 2))
            .unwrap();
        assert!(!game.board().is_occupied(Coordinate::new(0, 0)));
        assert_eq!(game.board().get(Coordinate::new(3, 2)).map(|t| t.letter), Some('C'));
        assert_eq!(game.board().len(), 1);
    }

    #[test]
    fn test_drop_on_occupied_cell_bounces() {
        let mut game = game("CAT", "XYZ");
        play_front(&mut game, &[(0, 0)]);

        let result = game.place_tile(FRONT, Coordinate::new(0, 0));
        assert_eq!(result, Err(GameError::OccupiedCell(Coordinate::new(0, 0))));
        assert_eq!(game.rack().as_string(), "AT");
        assert_eq!(game.board().get(Coordinate::new(0, 0)).map(|t| t.letter), Some('C'));
    }

    #[test]
    fn test_drop_on_own_cell_is_rejected() {
        let mut game = game("CAT", "XYZ");
        play_front(&mut game, &[(1, 1)]);
        let at = Coordinate::new(1, 1);
        assert_eq!(
            game.place_tile(TileSource::Board { at }, at),
            Err(GameError::OccupiedCell(at))
        );
        assert!(game.board().is_occupied(at));
    }

    #[test]
    fn test_drop_out_of_bounds() {
        let mut game = game("CAT", "XYZ");
        let target = Coordinate::new(10, 0);
        assert_eq!(game.place_tile(FRONT, target), Err(GameError::OutOfBounds(target)));
        assert_eq!(game.rack().len(), 3);
    }

    #[test]
    fn test_empty_source() {
        let mut game = game("CAT", "XYZ");
        assert_eq!(
            game.place_tile(TileSource::Rack { index: 3 }, Coordinate::new(0, 0)),
            Err(GameError::EmptySource)
        );
        assert_eq!(
            game.spin(TileSource::Board { at: Coordinate::new(5, 5) }),
            Err(GameError::EmptySource)
        );
    }

    #[test]
    fn test_return_to_rack() {
        let mut game = game("CAT", "XYZ");
        play_front(&mut game, &[(0, 0), (1, 0)]);
        assert_eq!(game.rack().as_string(), "T");

        game.return_to_rack(Coordinate::new(0, 0)).unwrap();
        assert_eq!(game.rack().as_string(), "TC");
        assert!(!game.board().is_occupied(Coordinate::new(0, 0)));

        // Nothing there any more
        assert_eq!(game.return_to_rack(Coordinate::new(0, 0)), Ok(None));
        assert_eq!(game.rack().len(), 2);
    }

    #[test]
    fn test_return_refuses_id_already_in_rack() {
        let mut game = game("CAT", "XYZ");
        play_front(&mut game, &[(0, 0)]);
        let at = Coordinate::new(0, 0);
        let placed = game.board().get(at).cloned().unwrap();
        game.rack.push(placed.clone());

        assert_eq!(game.return_to_rack(at), Err(GameError::DuplicateTile(placed.id)));
        assert_eq!(game.board().get(at), Some(&placed));
        assert_eq!(game.rack().len(), 3);
    }

    #[test]
    fn test_validity_tracks_board() {
        let mut game = game("CATS", "XYZ");
        play_front(&mut game, &[(0, 0), (1, 0)]);
        assert!(game.evaluation().valid_positions.is_empty());

        play_front(&mut game, &[(2, 0)]);
        assert_eq!(game.evaluation().valid_positions.len(), 3);

        game.return_to_rack(Coordinate::new(2, 0)).unwrap();
        assert!(game.evaluation().valid_positions.is_empty());
    }

    #[test]
    fn test_disconnected_words_do_not_advance() {
        let mut game = game("CATDOG", "XYZ");
        let event = play_front(&mut game, &[(0, 0), (1, 0), (2, 0), (0, 5), (1, 5), (2, 5)]);

        assert_eq!(event, None);
        assert!(game.rack().is_empty());
        assert!(game.evaluation().all_placed_valid);
        assert!(!game.evaluation().contiguous);
        assert_eq!(game.reserve_len(), 3);
    }

    #[test]
    fn test_boogie_draws_one_tile() {
        let mut game = game("CAT", "BDEFG");
        let event = play_front(&mut game, &[(0, 0), (1, 0), (2, 0)]);

        let Some(GameEvent::Boogie(tile)) = event else {
            panic!("expected boogie, got {:?}", event);
        };
        assert_eq!(tile.letter, 'B');
        assert!(tile.is_new);
        assert_eq!(game.reserve_len(), 4);
        assert_eq!(game.rack().len(), 1);
        assert_eq!(game.rack().get(0), Some(&tile));
        assert_eq!(game.phase, Phase::Playing);
    }

    #[test]
    fn test_boogie_tile_gets_fresh_id() {
        let mut game = game("CAT", "B");
        let reserved_max = game.reserve.iter().map(|t| t.id).max().unwrap();
        let event = play_front(&mut game, &[(0, 0), (1, 0), (2, 0)]);
        match event {
            Some(GameEvent::Win) => panic!("reserve was not empty"),
            Some(GameEvent::Boogie(tile)) => assert!(tile.id > reserved_max),
            None => panic!("expected boogie"),
        }
    }

    #[test]
    fn test_win_fires_once() {
        let mut game = game("CAT", "");
        let event = play_front(&mut game, &[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(event, Some(GameEvent::Win));
        assert!(game.is_won());

        assert_eq!(game.revalidate(), None);
        assert_eq!(game.return_to_rack(Coordinate::new(0, 0)), Err(GameError::GameOver));
        assert_eq!(game.board().len(), 3);
        assert!(game.rack().is_empty());
    }

    #[test]
    fn test_boogie_then_win() {
        let mut game = game("CAT", "S");
        let event = play_front(&mut game, &[(0, 0), (1, 0), (2, 0)]);
        assert!(matches!(event, Some(GameEvent::Boogie(ref t)) if t.letter == 'S'));

        let event = play_front(&mut game, &[(3, 0)]);
        assert_eq!(event, Some(GameEvent::Win));
        assert_eq!(game.reserve_len(), 0);
    }

    #[test]
    fn test_invalid_board_does_not_advance() {
        let mut game = game("CTA", "XYZ");
        let event = play_front(&mut game, &[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(event, None);
        assert!(!game.evaluation().all_placed_valid);
        assert_eq!(game.reserve_len(), 3);
    }

    #[test]
    fn test_revalidate_after_dictionary_loads() {
        let dict = Arc::new(Dictionary::new());
        let mut game =
            GameController::with_tiles(10, 10, "CAT", "QR", dict.clone(), SpinPolicy::Discard);
        let event = play_front(&mut game, &[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(event, None);
        assert!(game.evaluation().valid_positions.is_empty());

        dict.load_str("cat").unwrap();
        let event = game.revalidate();
        assert!(matches!(event, Some(GameEvent::Boogie(ref t)) if t.letter == 'Q'));
        assert_eq!(game.evaluation().valid_positions.len(), 3);
    }

    #[test]
    fn test_spin_insufficient_pool() {
        let mut game = game("CAT", "XY");
        play_front(&mut game, &[(0, 0)]);

        let result = game.spin(FRONT);
        assert_eq!(
            result,
            Err(GameError::InsufficientPool {
                available: 2,
                required: 3
            })
        );
        assert_eq!(game.rack().as_string(), "AT");
        assert_eq!(game.reserve_len(), 2);
        assert_eq!(game.board().len(), 1);
    }

    #[test]
    fn test_spin_discard_from_rack() {
        let mut game = game("AB", "XYZW");
        let outcome = game.spin(FRONT).unwrap();

        assert_eq!(outcome.discarded.letter, 'A');
        assert_eq!(letters(&outcome.drawn), "XYZ");
        assert!(outcome.drawn.iter().all(|t| t.is_new));
        assert_eq!(game.rack().as_string(), "BXYZ");
        assert_eq!(game.reserve_len(), 1);
        // The spun tile is gone from play
        assert!(!game.rack().contains(outcome.discarded.id));
    }

    #[test]
    fn test_spin_from_board() {
        let mut game = game("AB", "XYZ");
        play_front(&mut game, &[(2, 2)]);

        let outcome = game.spin(TileSource::Board { at: Coordinate::new(2, 2) }).unwrap();
        assert_eq!(outcome.discarded.letter, 'A');
        assert!(game.board().is_empty());
        assert_eq!(game.rack().as_string(), "BXYZ");
        assert_eq!(game.reserve_len(), 0);
    }

    #[test]
    fn test_spin_reshuffle_insufficient_pool() {
        let mut game =
            GameController::with_tiles(10, 10, "AB", "XY", dictionary(), SpinPolicy::Reshuffle);
        play_front(&mut game, &[(0, 0)]);

        assert_eq!(
            game.spin(TileSource::Board { at: Coordinate::new(0, 0) }),
            Err(GameError::InsufficientPool {
                available: 2,
                required: 3
            })
        );
        assert_eq!(
            game.spin(FRONT),
            Err(GameError::InsufficientPool {
                available: 2,
                required: 3
            })
        );
        assert_eq!(game.rack().as_string(), "B");
        assert_eq!(game.board().get(Coordinate::new(0, 0)).map(|t| t.letter), Some('A'));
        assert_eq!(game.reserve_len(), 2);
        assert_eq!(letters(game.reserve.make_contiguous()), "XY");
    }

    #[test]
    fn test_spin_reshuffle_conserves_tiles() {
        let mut game =
            GameController::with_tiles(10, 10, "AB", "XYZW", dictionary(), SpinPolicy::Reshuffle);

        let mut before: Vec<char> = "ABXYZW".chars().collect();
        before.sort_unstable();

        let outcome = game.spin(FRONT).unwrap();
        assert_eq!(outcome.drawn.len(), 3);
        assert_eq!(game.reserve_len(), 2);

        let mut after: Vec<char> = game.rack().as_string().chars().collect();
        after.extend(game.reserve.iter().map(|t| t.letter));
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn test_acknowledge_new_tiles() {
        let mut game = game("AB", "XYZ");
        game.spin(FRONT).unwrap();
        assert!(game.rack().tiles().iter().any(|t| t.is_new));

        game.acknowledge_new_tiles();
        assert!(game.rack().tiles().iter().all(|t| !t.is_new));
    }

    #[test]
    fn test_tile_ids_never_shared() {
        for policy in [SpinPolicy::Discard, SpinPolicy::Reshuffle] {
            let config = GameConfig {
                grid_width: 8,
                grid_height: 8,
                spin_policy: policy,
                seed: Some(77),
                ..GameConfig::default()
            };
            let mut game = GameController::new(&config, dictionary());
            let mut rng = StdRng::seed_from_u64(5);

            for _ in 0..500 {
                let at = Coordinate::new(rng.random_range(0..8), rng.random_range(0..8));
                let rack_index = rng.random_range(0..game.rack().len().max(1));
                let _ = match rng.random_range(0..6) {
                    0 | 1 => game
                        .place_tile(TileSource::Rack { index: rack_index }, at)
                        .map(|_| ()),
                    2 => game.return_to_rack(at).map(|_| ()),
                    3 => game.spin(TileSource::Rack { index: rack_index }).map(|_| ()),
                    4 => game.spin(TileSource::Board { at }).map(|_| ()),
                    _ => {
                        let from = Coordinate::new(rng.random_range(0..8), rng.random_range(0..8));
                        game.place_tile(TileSource::Board { at: from }, at).map(|_| ())
                    }
                };

                let mut seen: HashMap<_, usize> = HashMap::new();
                for tile in game.rack().tiles() {
                    *seen.entry(tile.id).or_default() += 1;
                }
                for (_, tile) in game.board().iter() {
                    *seen.entry(tile.id).or_default() += 1;
                }
                let in_play = seen.len();
                for tile in &game.reserve {
                    *seen.entry(tile.id).or_default() += 1;
                }
                assert!(seen.values().all(|&n| n == 1), "{policy}: shared tile id");
                assert!(in_play >= 21);
            }
        }
    }
}
