//! Command implementations for the sqlmig CLI

pub mod common;
pub mod down;
pub mod history;
pub mod new;
pub mod redo;
pub mod to;
pub mod up;
