use crate::engine::board::Board;
use crate::engine::types::{Color, Square};

/// ゲームの状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Status {
    /// 終局。
    GameOver {
        /// 黒の石数。
        black: u32,
        /// 白の石数。
        white: u32,
    },
    /// 進行中。
    InProgress,
}

/// 1ゲームの進行を管理する構造体。
///
/// 盤面と手番を保持し、UI からのマス選択を受けて着手・終局判定を行う。
/// 「終局した」という状態フラグは持たず、[`Status`] の通知と
/// 盤面の読み取りアクセサだけを外部に公開する。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    /// 現在の盤面。
    board: Board,
    /// 手番。
    turn: Color,
}

impl Game {
    /// 現在の盤面への参照を返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// 石数（黒、白）を返す。
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> (u32, u32) {
        self.board.counts()
    }

    /// 初期局面からゲームを開始する。
    #[inline]
    #[must_use]
    pub fn initial() -> Self {
        Self {
            board: Board::initial(),
            turn: Color::Black,
        }
    }

    /// `color` が `square` に着手できるかを返す（描画のヒント用）。
    #[inline]
    #[must_use]
    pub fn is_legal(&self, color: Color, square: Square) -> bool {
        !self.board.captured_stones(color, square).is_empty()
    }

    /// 手番を無条件に交代する。
    #[inline]
    pub fn next_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// UI からのマス選択を処理するエントリーポイント。
    ///
    /// 現手番で `index` への着手を試み、その成否に関わらず終局条件を
    /// 評価する。範囲外のインデックスは着手なしとして扱う。
    ///
    /// - 空マスが無い、またはどちらかの石数が0なら終局。
    /// - 空マスがちょうど1つなら、手番を交代して最後のマスへ自動着手し、
    ///   その着手が成立したか否かに関わらず終局する。
    /// - それ以外は進行中。
    pub fn on_cell_activated(&mut self, index: u8) -> Status {
        if let Some(square) = Square::from_index(index) {
            self.place_stone(self.turn, square);
        }

        let (black, white) = self.board.counts();
        if self.board.empty_count() == 0 || black == u32::MIN || white == u32::MIN {
            tracing::info!(black, white, "game over");
            return Status::GameOver { black, white };
        }

        if let Some(last) = self.board.sole_empty() {
            // 残り1マスは入力を待たず自動で解決する。
            self.next_turn();
            self.place_stone(self.turn, last);

            let (final_black, final_white) = self.board.counts();
            tracing::info!(
                black = final_black,
                white = final_white,
                "game over after forced final move"
            );
            return Status::GameOver {
                black: final_black,
                white: final_white,
            };
        }

        Status::InProgress
    }

    /// `color` の石を `square` に置く。
    ///
    /// 挟める石が1つも無い着手は不正として黙って無視し、盤面・手番とも
    /// 一切変更せず `false` を返す。成立した場合は挟んだ石を全て反転し、
    /// 石を置いて手番を交代し、`true` を返す。
    pub fn place_stone(&mut self, color: Color, square: Square) -> bool {
        let captured = self.board.captured_stones(color, square);
        if captured.is_empty() {
            return false;
        }

        for target in &captured {
            self.board.flip(*target);
        }
        self.board.place(color, square);

        tracing::debug!(
            ?color,
            index = square.index(),
            flipped = captured.len(),
            "stone placed"
        );

        self.next_turn();
        true
    }

    /// 盤面と手番を初期状態に戻す。
    #[inline]
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = Color::Black;
    }

    /// 現手番を返す。
    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.turn
    }
}

#[cfg(test)]
mod tests {
    use super::{Game, Status};
    use crate::engine::board::Board;
    use crate::engine::types::{Cell, Color, Square};

    /// テスト用: インデックスから `Square` を取り出す。
    fn square(index: u8) -> Square {
        let square_opt = Square::from_index(index);
        assert!(square_opt.is_some(), "index {index} must be on the board");
        square_opt.unwrap_or_else(|| unreachable!())
    }

    /// `keep_empty` 以外の空マスを全て埋める。
    ///
    /// `white_extra` に含まれるインデックスは白、それ以外は黒で埋める。
    /// 初期配置の中央4石（白: 27, 36 / 黒: 28, 35）はそのまま残る。
    fn fill_except(board: &mut Board, keep_empty: u8, white_extra: &[u8]) {
        let empties: Vec<u8> = board
            .empty_indices()
            .filter(|index| *index != keep_empty)
            .collect();

        for index in empties {
            let color = if white_extra.contains(&index) {
                Color::White
            } else {
                Color::Black
            };
            board.place(color, square(index));
        }
    }

    #[test]
    fn legal_placement_flips_captured_stones_and_turn() {
        let mut game = Game::initial();

        // (3, 2) から南方向に白27を挟む。
        let placed = game.place_stone(Color::Black, square(19));
        assert!(placed);

        assert_eq!(game.board().cell(square(19)), Cell::Black);
        assert_eq!(game.board().cell(square(27)), Cell::Black);
        assert_eq!(game.counts(), (4, 1));
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn illegal_placement_changes_nothing() {
        let mut game = Game::initial();
        let before = game.clone();

        let placed = game.place_stone(Color::Black, square(0));
        assert!(!placed);
        assert_eq!(game, before);
    }

    #[test]
    fn placement_on_occupied_cell_changes_nothing() {
        let mut game = Game::initial();
        let before = game.clone();

        assert!(!game.place_stone(Color::Black, square(27)));
        assert_eq!(game, before);
    }

    #[test]
    fn turn_alternates_only_on_successful_placement() {
        let mut game = Game::initial();
        assert_eq!(game.side_to_move(), Color::Black);

        assert!(!game.place_stone(Color::Black, square(0)));
        assert_eq!(game.side_to_move(), Color::Black);

        assert!(game.place_stone(Color::Black, square(19)));
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn reset_restores_opening_state() {
        let mut game = Game::initial();
        assert!(game.place_stone(Color::Black, square(19)));

        game.reset();
        assert_eq!(game, Game::initial());
    }

    #[test]
    fn activation_forwards_to_current_turn() {
        let mut game = Game::initial();

        let status = game.on_cell_activated(19);
        assert_eq!(status, Status::InProgress);
        assert_eq!(game.board().cell(square(19)), Cell::Black);
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn noop_activation_still_reports_in_progress_midgame() {
        let mut game = Game::initial();
        let before = game.clone();

        // 不成立の着手でも終局評価は行われるが、序盤では進行中のまま。
        let status = game.on_cell_activated(0);
        assert_eq!(status, Status::InProgress);
        assert_eq!(game, before);
    }

    #[test]
    fn out_of_range_activation_is_noop_midgame() {
        let mut game = Game::initial();
        let before = game.clone();

        let status = game.on_cell_activated(64);
        assert_eq!(status, Status::InProgress);
        assert_eq!(game, before);

        let status = game.on_cell_activated(u8::MAX);
        assert_eq!(status, Status::InProgress);
        assert_eq!(game, before);
    }

    #[test]
    fn wipeout_ends_the_game_even_after_noop_activation() {
        let mut board = Board::initial();
        // 白を全滅させる（27, 36 を黒に反転）。
        board.flip(square(27));
        board.flip(square(36));

        let mut game = Game {
            board,
            turn: Color::White,
        };

        // 占有マスへのタップは不成立だが、終局評価はそのまま走る。
        let status = game.on_cell_activated(28);
        assert_eq!(status, Status::GameOver { black: 4, white: 0 });
    }

    #[test]
    fn forced_final_move_fills_the_board() {
        let mut board = Board::initial();
        // マス0だけ空け、マス1を白、残りを黒で埋める。
        fill_except(&mut board, 0, &[1]);

        let mut game = Game {
            board,
            turn: Color::White,
        };

        // 占有マスへのタップ後、手番が黒へ交代し最後のマス0へ自動着手。
        // 東方向に白1を挟んで黒2が終端になる。
        let status = game.on_cell_activated(28);
        assert_eq!(status, Status::GameOver { black: 62, white: 2 });

        assert_eq!(game.board().empty_count(), 0);
        assert_eq!(game.board().cell(square(0)), Cell::Black);
        assert_eq!(game.board().cell(square(1)), Cell::Black);

        let (black, white) = game.counts();
        assert_eq!(black.checked_add(white), Some(64));
    }

    #[test]
    fn forced_final_move_ends_the_game_even_when_illegal() {
        let mut board = Board::initial();
        // マス0だけ空け、残りを黒で埋める（白は中央の 27, 36 のみ）。
        fill_except(&mut board, 0, &[]);

        let mut game = Game {
            board,
            turn: Color::White,
        };

        // 自動着手（黒、マス0）は周囲が全て黒のため不成立。
        // それでも終局として報告され、マス0は空いたまま残る。
        let status = game.on_cell_activated(28);
        assert_eq!(status, Status::GameOver { black: 61, white: 2 });

        assert_eq!(game.board().empty_count(), 1);
        assert_eq!(game.board().cell(square(0)), Cell::Empty);
        assert_eq!(game.side_to_move(), Color::Black);
    }
}
