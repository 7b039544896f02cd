//! Unit tests mirroring the source tree, one file per source module

mod game;
mod math;
