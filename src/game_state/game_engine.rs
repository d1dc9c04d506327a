//! Game engine: board, side to move, bounded undo history and check status.
//!
//! `GameEngine` is the only type that executes moves. It layers king safety on
//! top of the pseudo-legal rules in `moves::move_rules` and classifies the
//! position for the side to move.

use tracing::trace;

use crate::game_state::board::Board;
use crate::game_state::chess_errors::{ChessErrors, GameError, GameResult};
use crate::game_state::chess_types::{Move, Piece, PieceKind, Player, Position};
use crate::game_state::move_log::BoundedMoveLog;
use crate::moves::move_rules::{enumerate_pseudo_legal_moves, is_pseudo_legal, is_square_attacked};

/// Undo window used when the caller does not pick one.
pub const DEFAULT_HISTORY_SIZE: usize = 6;

/// Classification of the position for the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// At least one legal move and the king is not attacked.
    Ongoing,
    /// At least one legal move and the king is attacked.
    Check,
    /// No legal move and the king is attacked.
    Checkmate,
    /// No legal move and the king is not attacked.
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    /// Indexed by `Player::index`.
    king_positions: [Position; 2],
    move_log: BoundedMoveLog<Move>,
    is_check: bool,
}

impl GameEngine {
    /// Creates a game at the standard starting position, White to move.
    ///
    /// # Arguments
    /// * `history_size` - Number of moves that can be undone; the oldest
    ///   entry is evicted when a new move would exceed it.
    ///
    /// # Errors
    /// `ChessErrors::InvalidHistorySize` when `history_size` is zero.
    pub fn new(history_size: usize) -> Result<Self, ChessErrors> {
        if history_size == 0 {
            return Err(ChessErrors::InvalidHistorySize(history_size));
        }
        Ok(GameEngine::standard(history_size))
    }

    fn standard(history_size: usize) -> Self {
        GameEngine {
            board: Board::new_game(),
            current_player: Player::White,
            king_positions: [Position::new(0, 4), Position::new(7, 4)],
            move_log: BoundedMoveLog::new(history_size),
            is_check: false,
        }
    }

    /// Creates a game from an arbitrary board with `player` to move.
    ///
    /// King bookkeeping is read from the board and the check flag is computed
    /// for `player`.
    ///
    /// # Errors
    /// * `ChessErrors::InvalidHistorySize` when `history_size` is zero.
    /// * `ChessErrors::MissingKing` / `ChessErrors::DuplicateKing` unless each
    ///   colour has exactly one king.
    pub fn from_board(board: Board, player: Player, history_size: usize) -> Result<Self, ChessErrors> {
        if history_size == 0 {
            return Err(ChessErrors::InvalidHistorySize(history_size));
        }

        let mut king_positions = [Position::new(0, 0); 2];
        for side in [Player::White, Player::Black] {
            let mut kings = board.kings(side);
            let king = kings.next().ok_or(ChessErrors::MissingKing(side))?;
            if kings.next().is_some() {
                return Err(ChessErrors::DuplicateKing(side));
            }
            king_positions[side.index()] = king;
        }

        let mut game = GameEngine {
            board,
            current_player: player,
            king_positions,
            move_log: BoundedMoveLog::new(history_size),
            is_check: false,
        };
        game.update_is_check();
        Ok(game)
    }

    /// Copies the position (board, kings, side to move, check flag) into a
    /// game whose history is empty and holds `history_size` moves.
    ///
    /// Search and perft work on such copies so their move/undo traffic never
    /// touches the real game's history. A zero `history_size` gives a copy on
    /// which moves cannot be undone.
    pub fn copy_with_empty_history(&self, history_size: usize) -> Self {
        GameEngine {
            board: self.board.clone(),
            current_player: self.current_player,
            king_positions: self.king_positions,
            move_log: BoundedMoveLog::new(history_size),
            is_check: self.is_check,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Whether the player to move is in check.
    #[inline]
    pub fn is_check(&self) -> bool {
        self.is_check
    }

    #[inline]
    pub fn king_position(&self, player: Player) -> Position {
        self.king_positions[player.index()]
    }

    /// Played moves still available for undo, oldest first.
    #[inline]
    pub fn history(&self) -> &BoundedMoveLog<Move> {
        &self.move_log
    }

    /// Piece on `pos`, or `None` when `pos` is off the board.
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        pos.is_valid().then(|| self.board.piece_at(pos))
    }

    /// Checks `from -> to` for the player to move without king safety.
    ///
    /// Range is checked first, then ownership of `from`, then the piece's
    /// movement rule.
    pub fn is_valid_move(&self, from: Position, to: Position) -> GameResult {
        if !from.is_valid() || !to.is_valid() {
            return Err(GameError::InvalidPosition);
        }
        if !self.board.piece_at(from).belongs_to(self.current_player) {
            return Err(GameError::NoPieceFound);
        }
        if !is_pseudo_legal(&self.board, from, to) {
            return Err(GameError::InvalidMove);
        }
        Ok(())
    }

    /// Executes `from -> to` for the player to move.
    ///
    /// On success the move is logged (evicting the oldest entry when the
    /// history is full), the turn passes and the check flag is recomputed. On
    /// any error the game is unchanged.
    ///
    /// # Returns
    /// The executed move, with the captured piece recorded.
    ///
    /// # Errors
    /// Everything `is_valid_move` reports, plus `GameError::UnresolvedCheck`
    /// when the mover was already in check and still is, or
    /// `GameError::MoveThreatensOwnKing` when the move exposes the mover's king.
    pub fn set_move(&mut self, from: Position, to: Position) -> GameResult<Move> {
        if let Err(err) = self.is_valid_move(from, to) {
            trace!(player = %self.current_player, %from, %to, %err, "move rejected");
            return Err(err);
        }

        let mover = self.current_player;
        let record = self.apply(from, to);
        if self.king_is_attacked(mover) {
            self.revert(&record);
            let err = if self.is_check {
                GameError::UnresolvedCheck
            } else {
                GameError::MoveThreatensOwnKing
            };
            trace!(player = %mover, %from, %to, %err, "move rejected");
            return Err(err);
        }

        if let Some(evicted) = self.move_log.push_evicting(record) {
            trace!(%evicted, "history full, oldest move dropped");
        }
        self.current_player = mover.opponent();
        self.update_is_check();
        trace!(player = %mover, %record, check = self.is_check, "move executed");
        Ok(record)
    }

    /// Takes back the most recent logged move and returns it.
    ///
    /// # Errors
    /// `GameError::EmptyHistory` when nothing is left to undo.
    pub fn undo_move(&mut self) -> GameResult<Move> {
        let record = self.move_log.pop_last().ok_or(GameError::EmptyHistory)?;
        self.revert(&record);
        self.current_player = self.current_player.opponent();
        self.update_is_check();
        trace!(%record, "move undone");
        Ok(record)
    }

    /// Legal moves of the piece on `pos`, each annotated with
    /// `is_threatened`.
    ///
    /// The piece may belong to either player; legality is judged against its
    /// owner's king. An empty square yields an empty list.
    ///
    /// # Errors
    /// `GameError::InvalidPosition` when `pos` is off the board.
    pub fn get_moves(&self, pos: Position) -> GameResult<BoundedMoveLog<Move>> {
        if !pos.is_valid() {
            return Err(GameError::InvalidPosition);
        }
        Ok(self.legal_moves_from(pos))
    }

    /// Every legal move of the player to move, pieces scanned row by row.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board
            .pieces()
            .filter(|(_, piece)| piece.belongs_to(self.current_player))
            .flat_map(|(pos, _)| self.legal_moves_from(pos))
            .collect()
    }

    /// Recomputes the check flag and classifies the position.
    pub fn current_state(&mut self) -> GameStatus {
        self.update_is_check();
        let can_move = self
            .board
            .pieces()
            .filter(|(_, piece)| piece.belongs_to(self.current_player))
            .any(|(pos, _)| !self.legal_moves_from(pos).is_empty());

        match (can_move, self.is_check) {
            (true, false) => GameStatus::Ongoing,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Checkmate,
            (false, false) => GameStatus::Draw,
        }
    }

    fn legal_moves_from(&self, pos: Position) -> BoundedMoveLog<Move> {
        let piece = self.board.piece_at(pos);
        let Some(owner) = piece.owner() else {
            return BoundedMoveLog::new(0);
        };
        let opponent = owner.opponent();
        let king = self.king_position(owner);
        let moves_king = piece.kind() == PieceKind::King;

        let mut scratch = self.board.clone();
        let mut moves = enumerate_pseudo_legal_moves(&scratch, pos);
        moves.retain_mut(|mv| {
            let record = scratch.apply(mv.from, mv.to);
            let king = if moves_king { mv.to } else { king };
            let safe = !is_square_attacked(&scratch, king, opponent);
            if safe {
                mv.is_threatened = is_square_attacked(&scratch, mv.to, opponent);
            }
            scratch.revert(&record);
            safe
        });
        moves
    }

    fn apply(&mut self, from: Position, to: Position) -> Move {
        let mover = self.board.piece_at(from);
        let record = self.board.apply(from, to);
        if let (PieceKind::King, Some(owner)) = (mover.kind(), mover.owner()) {
            self.king_positions[owner.index()] = to;
        }
        record
    }

    fn revert(&mut self, record: &Move) {
        let mover = self.board.piece_at(record.to);
        self.board.revert(record);
        if let (PieceKind::King, Some(owner)) = (mover.kind(), mover.owner()) {
            self.king_positions[owner.index()] = record.from;
        }
    }

    fn king_is_attacked(&self, player: Player) -> bool {
        is_square_attacked(&self.board, self.king_position(player), player.opponent())
    }

    fn update_is_check(&mut self) {
        self.is_check = self.king_is_attacked(self.current_player);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        GameEngine::standard(DEFAULT_HISTORY_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn pos(row: i8, column: i8) -> Position {
        Position::new(row, column)
    }

    fn play(game: &mut GameEngine, moves: &[((i8, i8), (i8, i8))]) {
        for &((fr, fc), (tr, tc)) in moves {
            game.set_move(pos(fr, fc), pos(tr, tc))
                .unwrap_or_else(|err| panic!("{} -> {} failed: {err}", pos(fr, fc), pos(tr, tc)));
        }
    }

    const SCHOLARS_MATE: [((i8, i8), (i8, i8)); 7] = [
        ((1, 4), (3, 4)),
        ((6, 4), (4, 4)),
        ((0, 5), (3, 2)),
        ((7, 1), (5, 2)),
        ((0, 3), (4, 7)),
        ((7, 6), (5, 5)),
        ((4, 7), (6, 5)),
    ];

    #[test]
    fn new_game_starts_with_white_and_no_check() {
        let mut game = GameEngine::new(DEFAULT_HISTORY_SIZE).unwrap();
        assert_eq!(game.current_player(), Player::White);
        assert!(!game.is_check());
        assert!(game.history().is_empty());
        assert_eq!(game.king_position(Player::Black), pos(7, 4));
        assert_eq!(game.legal_moves().len(), 20);
        assert_eq!(game.current_state(), GameStatus::Ongoing);
        assert_eq!(GameEngine::new(0), Err(ChessErrors::InvalidHistorySize(0)));
    }

    #[test]
    fn rejection_order_follows_range_ownership_then_rules() {
        let mut game = GameEngine::default();
        assert_eq!(game.set_move(pos(1, 0), pos(3, 0)).map(|mv| mv.to), Ok(pos(3, 0)));
        assert_eq!(game.current_player(), Player::Black);

        assert_eq!(game.set_move(pos(3, 0), pos(4, 0)), Err(GameError::NoPieceFound));
        assert!(game.board().is_empty_at(pos(5, 5)));
        assert_eq!(game.set_move(pos(7, 7), pos(5, 5)), Err(GameError::InvalidMove));
        assert_eq!(game.set_move(pos(8, 0), pos(6, 0)), Err(GameError::InvalidPosition));
        assert_eq!(game.set_move(pos(6, 0), pos(6, -1)), Err(GameError::InvalidPosition));
        assert_eq!(game.current_player(), Player::Black);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn scholars_mate_is_checkmate() {
        let mut game = GameEngine::default();
        play(&mut game, &SCHOLARS_MATE);
        assert!(game.is_check());
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.current_state(), GameStatus::Checkmate);
    }

    #[test]
    fn no_moves_without_check_is_a_draw() {
        let board: Board = "
            K_______
            __q_____
            ________
            ________
            ________
            ________
            ________
            k_______
        "
        .parse()
        .unwrap();
        let mut game = GameEngine::from_board(board, Player::Black, DEFAULT_HISTORY_SIZE).unwrap();
        assert!(!game.is_check());
        assert_eq!(game.current_state(), GameStatus::Draw);
    }

    #[test]
    fn staying_in_check_is_unresolved() {
        let mut game = GameEngine::default();
        play(&mut game, &[((1, 4), (3, 4)), ((6, 5), (5, 5)), ((0, 3), (4, 7))]);
        assert!(game.is_check());
        assert_eq!(game.current_state(), GameStatus::Check);

        let before = game.clone();
        assert_eq!(game.set_move(pos(6, 0), pos(5, 0)), Err(GameError::UnresolvedCheck));
        assert_eq!(game, before);
        assert!(game.set_move(pos(6, 6), pos(5, 6)).is_ok());
    }

    #[test]
    fn pinned_piece_cannot_expose_the_king() {
        let mut game = GameEngine::default();
        play(&mut game, &[((1, 4), (3, 4)), ((6, 4), (4, 4)), ((0, 3), (4, 7))]);
        assert!(!game.is_check());
        assert_eq!(game.set_move(pos(6, 5), pos(5, 5)), Err(GameError::MoveThreatensOwnKing));
        assert!(game.get_moves(pos(6, 5)).unwrap().is_empty());
    }

    #[test]
    fn undo_is_bounded_by_the_history_size() {
        let mut game = GameEngine::new(2).unwrap();
        play(&mut game, &[((1, 4), (3, 4)), ((6, 4), (4, 4)), ((0, 6), (2, 5))]);
        assert_eq!(game.history().len(), 2);

        let mut after_first = GameEngine::new(2).unwrap();
        play(&mut after_first, &[((1, 4), (3, 4))]);

        assert_eq!(game.undo_move().map(|mv| mv.from), Ok(pos(0, 6)));
        assert_eq!(game.undo_move().map(|mv| mv.from), Ok(pos(6, 4)));
        assert_eq!(game.undo_move(), Err(GameError::EmptyHistory));
        assert_eq!(game.board(), after_first.board());
        assert_eq!(game.current_player(), Player::Black);
    }

    #[test]
    fn undo_restores_captures_and_king_bookkeeping() {
        let board: Board = "
            ____K___
            ________
            ________
            ___M____
            ____k___
            ________
            ________
            ________
        "
        .parse()
        .unwrap();
        let mut game = GameEngine::from_board(board, Player::White, 4).unwrap();
        let before = game.clone();

        let capture = game.set_move(pos(3, 4), pos(4, 3)).unwrap();
        assert_eq!(capture.captured, Piece::new(PieceKind::Pawn, Player::Black));
        assert_eq!(game.king_position(Player::White), pos(4, 3));

        game.undo_move().unwrap();
        assert_eq!(game, before);
    }

    #[test]
    fn get_moves_handles_bad_and_empty_squares() {
        let game = GameEngine::default();
        assert_eq!(game.get_moves(pos(9, 0)).map(|list| list.len()), Err(GameError::InvalidPosition));
        assert!(game.get_moves(pos(4, 4)).unwrap().is_empty());
        assert_eq!(game.get_moves(pos(6, 0)).unwrap().len(), 2);
        assert_eq!(game.piece_at(pos(0, 8)), None);
    }

    #[test]
    fn threatened_flag_marks_attacked_destinations() {
        let game = GameEngine::default();
        let knight = game.get_moves(pos(0, 6)).unwrap();
        assert!(knight.iter().all(|mv| !mv.is_threatened));

        let mut game = GameEngine::default();
        play(&mut game, &[((1, 4), (3, 4)), ((6, 3), (4, 3))]);
        let queen = game.get_moves(pos(0, 3)).unwrap();
        let to_g4 = queen.iter().find(|mv| mv.to == pos(3, 6)).copied();
        assert_eq!(to_g4.map(|mv| mv.is_threatened), Some(true));
        let to_f3 = queen.iter().find(|mv| mv.to == pos(2, 5)).copied();
        assert_eq!(to_f3.map(|mv| mv.is_threatened), Some(false));
    }

    #[test]
    fn from_board_requires_one_king_per_side() {
        let no_black_king: Board = "
            ________
            ________
            ________
            ________
            ________
            ________
            ________
            ____k___
        "
        .parse()
        .unwrap();
        assert_eq!(
            GameEngine::from_board(no_black_king, Player::White, 6),
            Err(ChessErrors::MissingKing(Player::Black))
        );

        let mut two_kings = Board::new_game();
        two_kings.set_piece(pos(3, 3), Piece::new(PieceKind::King, Player::White));
        assert_eq!(
            GameEngine::from_board(two_kings, Player::White, 6),
            Err(ChessErrors::DuplicateKing(Player::White))
        );
    }

    #[test]
    fn copy_with_empty_history_keeps_the_position_only() {
        let mut game = GameEngine::default();
        play(&mut game, &[((1, 4), (3, 4))]);
        let mut copy = game.copy_with_empty_history(3);
        assert_eq!(copy.board(), game.board());
        assert_eq!(copy.current_player(), Player::Black);
        assert!(copy.history().is_empty());
        assert_eq!(copy.history().capacity(), 3);

        copy.set_move(pos(6, 4), pos(4, 4)).unwrap();
        assert_ne!(copy.board(), game.board());
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn random_playouts_keep_every_invariant() {
        const PLIES: usize = 40;
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = GameEngine::new(PLIES).unwrap();
            let start = game.clone();

            for _ in 0..PLIES {
                let moves = game.legal_moves();
                if moves.is_empty() {
                    break;
                }
                let player = game.current_player();
                for mv in &moves {
                    assert!(is_pseudo_legal(game.board(), mv.from, mv.to));
                    let mut probe = game.clone();
                    probe.set_move(mv.from, mv.to).unwrap();
                    assert!(!probe.king_is_attacked(player), "{mv} leaves the king attacked");
                    probe.undo_move().unwrap();
                    assert_eq!(probe, game);
                }

                let choice = moves[rng.random_range(0..moves.len())];
                game.set_move(choice.from, choice.to).unwrap();
                for side in [Player::White, Player::Black] {
                    let king = game.board().piece_at(game.king_position(side));
                    assert_eq!(king, Piece::new(PieceKind::King, side));
                }
            }

            while game.undo_move().is_ok() {}
            assert_eq!(game, start);
        }
    }
}
