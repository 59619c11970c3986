pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod export;
pub mod live;
pub mod interactive;
pub mod logging;
