pub mod chains;
pub mod config;
pub mod handlers;
pub mod state;
pub mod types;

pub use crate::chains::*;
pub use crate::config::Config;
pub use crate::handlers::*;
pub use crate::state::AppState;
pub use crate::types::*;

pub use actix_web;
pub use log;
pub use reqwest;
