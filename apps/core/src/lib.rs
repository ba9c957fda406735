//! Prompty core: turns a loosely written prompt into a structured one and
//! serves the browser shell through a native-messaging host.

pub mod actors;
pub mod brain;
pub mod config;
pub mod error;
pub mod host;
pub mod models;
pub mod snippet;
pub mod telemetry;

pub use error::AppError;

#[cfg(test)]
mod tests;
