/// マスの状態（空、黒石、白石のいずれか）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Cell {
    /// 黒石が置かれている。
    Black,
    /// 石が置かれていない。
    Empty,
    /// 白石が置かれている。
    White,
}

impl Cell {
    /// 置かれている石の色を返す（空マスは `None`）。
    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::Black => Some(Color::Black),
            Self::Empty => None,
            Self::White => Some(Color::White),
        }
    }

    /// 空マスかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// 指定色の石が置かれた状態を返す。
    #[inline]
    #[must_use]
    pub const fn stone(color: Color) -> Self {
        match color {
            Color::Black => Self::Black,
            Color::White => Self::White,
        }
    }
}

/// 手番（石の色）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Color {
    /// 先手。
    Black,
    /// 後手。
    White,
}

impl Color {
    /// 相手側の色を返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

/// 盤面上のマス（0..=63のインデックス）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Square(
    /// `y * 8 + x` に対応する0..=63の値。
    u8,
);

impl Square {
    /// 盤の一辺の長さ。
    pub const BOARD_LEN: u8 = 8;

    /// 盤面のマス数。
    pub const CELL_COUNT: u8 = 64;

    /// インデックス（0..=63）から `Square` を生成する。
    #[inline]
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index >= Self::CELL_COUNT {
            return None;
        }

        Some(Self(index))
    }

    /// 盤面座標（x, y）から `Square` を生成する。
    #[inline]
    #[must_use]
    pub const fn from_xy(x: u8, y: u8) -> Option<Self> {
        if x >= Self::BOARD_LEN || y >= Self::BOARD_LEN {
            return None;
        }

        let mut idx = match y.checked_mul(Self::BOARD_LEN) {
            Some(value) => value,
            None => return None,
        };

        idx = match idx.checked_add(x) {
            Some(value) => value,
            None => return None,
        };

        Some(Self(idx))
    }

    /// 0..=63 のインデックスを返す。
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// (dx, dy) 方向に1マスずらした `Square` を返す（盤外は `None`）。
    #[inline]
    #[must_use]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let cx = match i16::from(self.x()).checked_add(i16::from(dx)) {
            Some(value) => value,
            None => return None,
        };
        let cy = match i16::from(self.y()).checked_add(i16::from(dy)) {
            Some(value) => value,
            None => return None,
        };

        let x = match u8::try_from(cx) {
            Ok(value) => value,
            Err(_conversion_error) => return None,
        };
        let y = match u8::try_from(cy) {
            Ok(value) => value,
            Err(_conversion_error) => return None,
        };

        Self::from_xy(x, y)
    }

    /// x 座標（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn x(self) -> u8 {
        match self.0.checked_rem(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }

    /// y 座標（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn y(self) -> u8 {
        match self.0.checked_div(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }
}
