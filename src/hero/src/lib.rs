// src/hero/src/lib.rs
//! The player character.

mod core;

pub use self::core::{Hero, HERO_ID};
