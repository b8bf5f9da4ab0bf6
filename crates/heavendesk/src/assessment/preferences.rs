use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Key under which the landing page remembers that the CTA popup was closed.
pub const CTA_SEEN_KEY: &str = "heavendesk_cta_seen";

/// Small key-value capability injected into the presentation layer.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryPreferences {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl PreferenceStore for InMemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        let guard = self.values.lock().expect("preferences mutex poisoned");
        guard.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut guard = self.values.lock().expect("preferences mutex poisoned");
        guard.insert(key.to_string(), value.to_string());
    }
}

/// Decides whether the call-to-action popup may be shown.
pub struct CtaPopupGate<P> {
    store: Arc<P>,
}

impl<P: PreferenceStore> CtaPopupGate<P> {
    pub fn new(store: Arc<P>) -> Self {
        Self { store }
    }

    pub fn should_show(&self) -> bool {
        self.store.get(CTA_SEEN_KEY).is_none()
    }

    pub fn dismiss(&self) {
        self.store.set(CTA_SEEN_KEY, "true");
    }
}
