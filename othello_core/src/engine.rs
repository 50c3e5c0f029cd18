/// 盤面（64マスの配列）と反転探索/反転処理の実装。
pub mod board;
/// ゲーム進行（手番、終局判定など）の実装。
pub mod game;
pub mod types;

pub type Board = board::Board;
pub type Game = game::Game;
pub type Cell = types::Cell;
pub type Color = types::Color;
pub type Square = types::Square;
pub type GameStatus = game::Status;
