//! Application store shared through Dioxus context.
//!
//! Components read [`Store::state`] and send [`Action`]s through
//! [`Store::dispatch`]; effects run as spawned tasks and feed their
//! completions back into the same store.

use dioxus::prelude::*;

use crate::client::HrisClient;
use crate::config::ClientConfig;
use crate::runtime;
use crate::state::{Action, AppState, Effect, Timing};

#[derive(Clone, Copy)]
pub struct Store {
    pub state: Signal<AppState>,
    backend: Signal<HrisClient>,
}

impl Store {
    /// Apply an action and start the effects it produced.
    pub fn dispatch(&self, action: Action) {
        let mut state = self.state;
        let effects = state.write().dispatch(action);
        for effect in effects {
            self.spawn_effect(effect);
        }
    }

    fn spawn_effect(&self, effect: Effect) {
        let store = *self;
        spawn(async move {
            let backend = store.backend.peek().clone();
            if let Some(next) = runtime::execute(&backend, effect).await {
                store.dispatch(next);
            }
        });
    }
}

/// Create the store at the app root.
pub fn use_store_provider() -> Store {
    use_context_provider(|| {
        let config = ClientConfig::resolve();
        tracing::debug!(api_base_url = %config.api_base_url, "Creating store");
        Store {
            state: Signal::new(AppState::new(Timing::from(&config))),
            backend: Signal::new(HrisClient::new(&config)),
        }
    })
}

pub fn use_store() -> Store {
    use_context::<Store>()
}
