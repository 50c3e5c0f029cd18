//! Reversi (Othello) core logic.
//!
//! このクレートは盤面・ルール・ゲーム進行を管理する `engine` を提供します。
//! UI（`wasm`）から利用されることを想定しています。

#![forbid(unsafe_code)]

/// ゲームルール・盤面・進行を提供するモジュール。
pub mod engine;
