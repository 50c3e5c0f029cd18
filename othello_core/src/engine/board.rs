use crate::engine::types::{Cell, Color, Square};
use std::collections::HashSet;

/// `cells` 配列の長さ（`Square::CELL_COUNT` と同値）。
const CELL_COUNT_USIZE: usize = 64;

/// 反転探索で走査する8方向（dx, dy）。
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// 初期配置（黒）の1つ目。
const START_BLACK_0: u8 = 28;

/// 初期配置（黒）の2つ目。
const START_BLACK_1: u8 = 35;

/// 初期配置（白）の1つ目。
const START_WHITE_0: u8 = 27;

/// 初期配置（白）の2つ目。
const START_WHITE_1: u8 = 36;

/// 盤面（64マスの状態、空マス集合、石数カウンタ）。
///
/// 不変条件:
/// - `empty_cells` は常に `cells` 中の空マスのインデックス集合と一致する。
/// - `black + white + |empty_cells| == 64` が常に成り立つ。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    /// 黒石の数。
    black: u32,
    /// 各マスの状態（0..=63、行優先）。
    cells: [Cell; CELL_COUNT_USIZE],
    /// 全ての空マスのインデックス集合。走査で再計算せず逐次更新する。
    empty_cells: HashSet<u8>,
    /// 白石の数。
    white: u32,
}

impl Board {
    /// `color` を `square` に置いた場合に反転できる石の集合を返す。
    ///
    /// 盤面を変更しない純粋な探索。既に石があるマスを指定した場合、
    /// およびどの方向でも挟めない場合は空の `Vec` を返す。
    #[inline]
    #[must_use]
    pub fn captured_stones(&self, color: Color, square: Square) -> Vec<Square> {
        captured(self, color, square)
    }

    /// 指定マスの状態を返す。
    #[inline]
    #[must_use]
    pub fn cell(&self, square: Square) -> Cell {
        match self.cells.get(usize::from(square.index())) {
            Some(value) => *value,
            None => Cell::Empty,
        }
    }

    /// 指定色の石数を返す。
    #[inline]
    #[must_use]
    pub const fn count_of(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// 石数（黒、白）を返す。
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> (u32, u32) {
        (self.black, self.white)
    }

    /// 空マスの数を返す。
    #[inline]
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.empty_cells.len()
    }

    /// 全ての空マスのインデックスを返す（順序不定）。
    #[inline]
    pub fn empty_indices(&self) -> impl Iterator<Item = u8> + '_ {
        self.empty_cells.iter().copied()
    }

    /// 指定マスの石を反転させ、石数カウンタを更新する。
    ///
    /// 空マスに対しては何もしない。反転探索は相手石のみを返すため、
    /// 通常の進行でこの分岐に入ることはない（内部不変条件）。
    pub(crate) fn flip(&mut self, square: Square) {
        match self.cell(square) {
            Cell::Black => {
                self.set_cell(square, Cell::White);
                self.black = self.black.saturating_sub(1);
                self.white = self.white.saturating_add(1);
            }
            Cell::Empty => {}
            Cell::White => {
                self.set_cell(square, Cell::Black);
                self.black = self.black.saturating_add(1);
                self.white = self.white.saturating_sub(1);
            }
        }
    }

    /// 生のインデックス指定で石を反転させる。
    ///
    /// 範囲外（64以上）の場合は何もしない。負のインデックスは
    /// `u8` 上で表現できないため、型の時点で排除される。
    #[inline]
    pub fn flip_stone(&mut self, index: u8) {
        if let Some(square) = Square::from_index(index) {
            self.flip(square);
        }
    }

    /// 初期盤面（中央4石のみ）を返す。
    #[inline]
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Self {
            black: u32::MIN,
            cells: [Cell::Empty; CELL_COUNT_USIZE],
            empty_cells: HashSet::with_capacity(CELL_COUNT_USIZE),
            white: u32::MIN,
        };
        board.reset();
        board
    }

    /// 指定色の石を無条件に置く（反転判定なし）。
    ///
    /// 初期配置と、反転判定済みの着手から呼ばれる。
    pub(crate) fn place(&mut self, color: Color, square: Square) {
        self.set_cell(square, Cell::stone(color));
        self.empty_cells.remove(&square.index());
        match color {
            Color::Black => self.black = self.black.saturating_add(1),
            Color::White => self.white = self.white.saturating_add(1),
        }
    }

    /// 全マスを空に戻し、空マス集合と石数カウンタをリセットした上で
    /// 初期配置の4石を置く。
    pub fn reset(&mut self) {
        self.black = u32::MIN;
        self.white = u32::MIN;
        self.cells = [Cell::Empty; CELL_COUNT_USIZE];

        self.empty_cells.clear();
        for index in u8::MIN..Square::CELL_COUNT {
            self.empty_cells.insert(index);
        }

        // 初期配置の4石は反転判定を経由せず無条件に置く。
        for (color, index) in [
            (Color::Black, START_BLACK_0),
            (Color::Black, START_BLACK_1),
            (Color::White, START_WHITE_0),
            (Color::White, START_WHITE_1),
        ] {
            if let Some(square) = Square::from_index(index) {
                self.place(color, square);
            }
        }
    }

    /// 指定マスの状態を書き換える。
    fn set_cell(&mut self, square: Square, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(usize::from(square.index())) {
            *slot = cell;
        }
    }

    /// 空マスがちょうど1つのとき、そのマスを返す。
    #[inline]
    #[must_use]
    pub fn sole_empty(&self) -> Option<Square> {
        if self.empty_cells.len() != 1 {
            return None;
        }

        let index = match self.empty_cells.iter().next() {
            Some(value) => *value,
            None => return None,
        };

        Square::from_index(index)
    }
}

/// 反転させる石の集合を返す（全方向の和）。
///
/// 各方向は互いに交わらない直線なので、重複は発生しない。
fn captured(board: &Board, color: Color, origin: Square) -> Vec<Square> {
    // 既に石があるマスには置けない。
    if !board.cell(origin).is_empty() {
        return Vec::new();
    }

    let mut results: Vec<Square> = Vec::new();
    for (dx, dy) in DIRECTIONS {
        captured_in_ray(board, color, origin, dx, dy, &mut results);
    }
    results
}

/// 1方向分の反転対象を `results` に追加する。
///
/// `origin` から (dx, dy) 方向へ1マスずつ進み、
/// - 盤外に出たら何も追加しない。
/// - 同色より先に空マスに当たったら何も追加しない。
/// - 同色に到達したら、通過した相手石を全て追加する。
///   隣接マスが同色（間に相手石が0個）の場合は追加対象が無い。
fn captured_in_ray(
    board: &Board,
    color: Color,
    origin: Square,
    dx: i8,
    dy: i8,
    results: &mut Vec<Square>,
) {
    let mut walked: Vec<Square> = Vec::new();
    let mut current = origin;

    loop {
        current = match current.offset(dx, dy) {
            Some(value) => value,
            None => return,
        };

        match board.cell(current).color() {
            None => return,
            Some(found) if found == color => {
                results.extend_from_slice(&walked);
                return;
            }
            Some(_opponent) => walked.push(current),
        }
    }
}
