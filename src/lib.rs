#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
mod bitboard;
mod board;
mod common;
mod config;
mod game;
mod opponent;
mod placement;
mod ship;
#[cfg(feature = "std")]
mod controller;
#[cfg(feature = "std")]
mod input;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod sim;
#[cfg(feature = "std")]
mod ui;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use opponent::*;
pub use placement::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use controller::*;
#[cfg(feature = "std")]
pub use input::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use ui::*;
