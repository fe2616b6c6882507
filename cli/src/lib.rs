pub mod args;
pub mod commands;
pub mod config;
pub mod logger;
pub mod output;
