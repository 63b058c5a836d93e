//! Lane Crosser Library
//!
//! An endless lane-crossing game whose simulation can run independently or
//! with a Bevy UI.

pub mod simulation;

#[cfg(feature = "ui")]
pub mod ui;
