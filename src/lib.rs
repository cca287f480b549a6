#![cfg_attr(not(feature = "std"), no_std)]

mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;

pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
