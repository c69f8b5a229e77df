#![no_std]

extern crate alloc;

pub use cell::*;
pub use digest::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use session::*;
pub use types::*;

mod cell;
mod digest;
mod engine;
mod error;
mod grid;
mod session;
mod types;
