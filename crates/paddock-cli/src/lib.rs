//! CLI library components for the paddock league manager.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod views;
