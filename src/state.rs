use crate::chains::{ProgressChain, StoryChain};
use crate::config::Config;
use std::sync::Arc;

/// Shared per-process state. Chains are constructed once at startup and
/// injected here so tests can substitute fakes.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub story_chain: Arc<dyn StoryChain>,
    pub progress_chain: Arc<dyn ProgressChain>,
}
