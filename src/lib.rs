pub mod bridge;
pub mod clients;
pub mod config;
pub mod error;
pub mod hub;
pub mod models;
pub mod normalizer;
pub mod resolver;
pub mod sequencer;
pub mod token_tracker;
pub mod utils;
