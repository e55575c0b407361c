#![warn(clippy::pedantic)]
pub mod application;
pub mod config;
pub mod error;
pub mod logger;
pub mod window;
