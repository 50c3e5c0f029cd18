//! WASM (Canvas) 向けの最小 UI。
//!
//! - `wasm32` ターゲットのみで `wasm-bindgen` / `web-sys` を有効化する。
//! - それ以外のターゲットでは、workspace の `cargo test` / `cargo clippy` を通すためにスタブを提供する。

#[cfg(target_arch = "wasm32")]
mod wasm32_app {
    use othello_core::engine;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::prelude::*;
    use web_sys::CanvasRenderingContext2d;

    /// 盤面描画のオフセット。
    const OFFSET: f64 = 8.0;

    /// 終局時に表示するメッセージ。
    const GAME_OVER_MESSAGE: &str = "ゲーム終了！";

    /// ブラウザ上で進行するアプリ状態。
    ///
    /// 1ゲームにつき1つの `Game` を所有する。盤面・手番・石数は
    /// 全てエンジン側が管理し、この層は入力の転送と描画だけを行う。
    #[wasm_bindgen]
    #[derive(Debug)]
    pub struct App {
        game: engine::Game,
    }

    #[wasm_bindgen]
    impl App {
        /// 新しいゲームを開始する。
        #[wasm_bindgen(constructor)]
        #[must_use]
        pub fn new() -> Self {
            Self {
                game: engine::Game::initial(),
            }
        }

        /// 盤面と手番を初期状態に戻す。
        pub fn reset(&mut self) {
            self.game.reset();
        }

        /// マス選択（0..=63のインデックス）をエンジンへ転送する。
        ///
        /// 終局が通知された場合はアラートを表示し false を返す。
        pub fn on_cell_activated(&mut self, index: u8) -> bool {
            let status = self.game.on_cell_activated(index);
            match status {
                engine::GameStatus::GameOver { .. } => {
                    alert(GAME_OVER_MESSAGE);
                    false
                }
                engine::GameStatus::InProgress => true,
                _ => true,
            }
        }

        /// クリック入力（盤面座標）。インデックスに変換して転送する。
        pub fn click(&mut self, x: u8, y: u8) -> bool {
            let square = match engine::Square::from_xy(x, y) {
                Some(value) => value,
                None => return true,
            };

            self.on_cell_activated(square.index())
        }

        /// 黒の石数（情報パネル用）。
        #[must_use]
        pub fn black_count(&self) -> u32 {
            self.game.board().count_of(engine::Color::Black)
        }

        /// 白の石数（情報パネル用）。
        #[must_use]
        pub fn white_count(&self) -> u32 {
            self.game.board().count_of(engine::Color::White)
        }

        /// 状態表示用の文字列を返す。
        #[must_use]
        pub fn status_text(&self) -> String {
            let (black, white) = self.game.counts();
            let side_text = match self.game.side_to_move() {
                engine::Color::Black => "Black",
                engine::Color::White => "White",
                _ => "Unknown",
            };

            format!("{side_text} to move | B={black} W={white}")
        }

        /// Canvas へ盤面を描画する。
        ///
        /// - `cell_size`: 1マスのピクセルサイズ（例: 64.0）
        pub fn render(&self, ctx: &CanvasRenderingContext2d, cell_size: f64) {
            let board_len: f64 = 8.0;
            let board_px = board_len * cell_size;
            let full = board_px + OFFSET * 2.0;

            ctx.set_fill_style(&JsValue::from_str("#105010"));
            ctx.fill_rect(0.0, 0.0, full, full);

            let board = self.game.board();
            let side = self.game.side_to_move();

            for y in 0..8 {
                for x in 0..8 {
                    let fx = f64::from(x);
                    let fy = f64::from(y);
                    let left = OFFSET + fx * cell_size;
                    let top = OFFSET + fy * cell_size;

                    ctx.set_fill_style(&JsValue::from_str("#008000"));
                    ctx.fill_rect(left, top, cell_size, cell_size);

                    ctx.set_stroke_style(&JsValue::from_str("#000000"));
                    ctx.stroke_rect(left, top, cell_size, cell_size);

                    let square = match engine::Square::from_xy(x, y) {
                        Some(value) => value,
                        None => continue,
                    };

                    if self.game.is_legal(side, square) {
                        let r = cell_size / 10.0;
                        let cx = left + cell_size / 2.0;
                        let cy = top + cell_size / 2.0;
                        ctx.begin_path();
                        let _: Result<(), JsValue> = ctx.arc(cx, cy, r, 0.0, 6.283185307179586);
                        ctx.set_fill_style(&JsValue::from_str("#e0e040"));
                        ctx.fill();
                    }

                    let piece = board.cell(square).color();
                    let (fill, present) = match piece {
                        Some(engine::Color::Black) => ("#000000", true),
                        Some(engine::Color::White) => ("#f0f0f0", true),
                        None => ("#000000", false),
                        Some(_) => ("#808080", true),
                    };
                    if present {
                        let r = cell_size * 0.40;
                        let cx = left + cell_size / 2.0;
                        let cy = top + cell_size / 2.0;
                        ctx.begin_path();
                        let _: Result<(), JsValue> = ctx.arc(cx, cy, r, 0.0, 6.283185307179586);
                        ctx.set_fill_style(&JsValue::from_str(fill));
                        ctx.fill();
                    }
                }
            }
        }
    }

    impl Default for App {
        fn default() -> Self {
            Self::new()
        }
    }

    /// ブラウザのアラートを表示する。
    fn alert(message: &str) {
        if let Some(window) = web_sys::window() {
            let _: Result<(), JsValue> = window.alert_with_message(message);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm32_app::App;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm_stub {
    #[derive(Debug, Default)]
    pub struct App;

    impl App {
        #[must_use]
        pub const fn new() -> Self {
            Self
        }

        pub fn reset(&mut self) {}

        pub fn on_cell_activated(&mut self, _index: u8) -> bool {
            false
        }

        pub fn click(&mut self, _x: u8, _y: u8) -> bool {
            false
        }

        #[must_use]
        pub const fn black_count(&self) -> u32 {
            0
        }

        #[must_use]
        pub const fn white_count(&self) -> u32 {
            0
        }

        #[must_use]
        pub fn status_text(&self) -> String {
            "wasm App is available only on wasm32".to_string()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm_stub::App;
