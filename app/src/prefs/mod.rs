//! Reactive preference store.
//!
//! Holds the handful of user preferences the launcher glue reacts to, and
//! notifies subscribers with the changed key. A set that does not change
//! the stored value does not notify, so downstream recomputation only runs
//! on real changes. Subscriptions are RAII guards: dropping the
//! [`Subscription`] removes the listener, mirroring a listener released
//! when its consumer is disposed.

use crate::config::AppConfig;
use crate::theme::types::{Rgb, ThemeChoice};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

/// Keys a listener can be notified about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefKey {
    ThemeChoice,
    AccentColor,
    SearchProvider,
    AutoLaunchKeyboard,
}

#[derive(Debug, Clone)]
struct PrefValues {
    theme_choice: ThemeChoice,
    accent_color: Option<Rgb>,
    search_provider: Option<String>,
    auto_launch_keyboard: bool,
}

impl Default for PrefValues {
    fn default() -> Self {
        Self {
            theme_choice: ThemeChoice::System,
            accent_color: None,
            search_provider: None,
            auto_launch_keyboard: false,
        }
    }
}

type Listener = Arc<dyn Fn(PrefKey) + Send + Sync>;

/// Thread-safe preference store with change notification.
#[derive(Default)]
pub struct PreferenceStore {
    values: Mutex<PrefValues>,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_id: AtomicU64,
}

impl PreferenceStore {
    /// Seed the store from configuration.
    ///
    /// The accent string was already validated during config validation;
    /// an unparseable value here is only logged.
    pub fn from_config(config: &AppConfig) -> Self {
        let store = Self::default();
        {
            let mut values = store.values_lock();
            values.theme_choice = config.theme().choice();
            values.accent_color = config.theme().accent().and_then(|hex| {
                Rgb::from_hex(hex)
                    .map_err(|e| log::warn!("Ignoring configured accent color: {e}"))
                    .ok()
            });
            values.search_provider = config.search().provider().map(str::to_string);
        }
        store
    }

    // A poisoned lock only means another thread panicked mid-update; the
    // stored values are plain data and still usable.
    fn values_lock(&self) -> MutexGuard<'_, PrefValues> {
        self.values.lock().unwrap_or_else(|p| p.into_inner())
    }

    fn listeners_lock(&self) -> MutexGuard<'_, Vec<(u64, Listener)>> {
        self.listeners.lock().unwrap_or_else(|p| p.into_inner())
    }

    pub fn theme_choice(&self) -> ThemeChoice {
        self.values_lock().theme_choice
    }

    pub fn accent_color(&self) -> Option<Rgb> {
        self.values_lock().accent_color
    }

    pub fn search_provider(&self) -> Option<String> {
        self.values_lock().search_provider.clone()
    }

    pub fn auto_launch_keyboard(&self) -> bool {
        self.values_lock().auto_launch_keyboard
    }

    pub fn set_theme_choice(&self, choice: ThemeChoice) {
        {
            let mut values = self.values_lock();
            if values.theme_choice == choice {
                return;
            }
            values.theme_choice = choice;
        }
        log::debug!("Preference changed: theme choice -> {choice:?}");
        self.notify(PrefKey::ThemeChoice);
    }

    pub fn set_accent_color(&self, accent: Option<Rgb>) {
        {
            let mut values = self.values_lock();
            if values.accent_color == accent {
                return;
            }
            values.accent_color = accent;
        }
        log::debug!("Preference changed: accent color -> {accent:?}");
        self.notify(PrefKey::AccentColor);
    }

    pub fn set_search_provider(&self, provider: Option<String>) {
        {
            let mut values = self.values_lock();
            if values.search_provider == provider {
                return;
            }
            values.search_provider = provider;
        }
        log::debug!("Preference changed: search provider");
        self.notify(PrefKey::SearchProvider);
    }

    pub fn set_auto_launch_keyboard(&self, enabled: bool) {
        {
            let mut values = self.values_lock();
            if values.auto_launch_keyboard == enabled {
                return;
            }
            values.auto_launch_keyboard = enabled;
        }
        log::debug!("Preference changed: auto launch keyboard -> {enabled}");
        self.notify(PrefKey::AutoLaunchKeyboard);
    }

    // Neither lock is held while listeners run: listeners are free to read
    // preferences, subscribe, or drop their own subscription. A listener
    // removed during notification may still see this one change.
    fn notify(&self, key: PrefKey) {
        let snapshot: Vec<Listener> = self
            .listeners_lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(key);
        }
    }

    /// Register a change listener. The listener stays active until the
    /// returned [`Subscription`] is dropped.
    pub fn subscribe(
        self: &Arc<Self>,
        listener: impl Fn(PrefKey) + Send + Sync + 'static,
    ) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners_lock().push((id, Arc::new(listener)));
        Subscription {
            store: Arc::downgrade(self),
            id,
        }
    }
}

/// RAII guard for a preference listener.
pub struct Subscription {
    store: Weak<PreferenceStore>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store.listeners_lock().retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counting_store() -> (Arc<PreferenceStore>, Arc<Mutex<Vec<PrefKey>>>, Subscription) {
        let store = Arc::new(PreferenceStore::default());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let subscription = store.subscribe(move |key| sink.lock().unwrap().push(key));
        (store, seen, subscription)
    }

    #[test]
    fn test_notifies_exactly_the_changed_key() {
        let (store, seen, _subscription) = counting_store();

        store.set_accent_color(Some(Rgb(1, 2, 3)));
        store.set_auto_launch_keyboard(true);
        store.set_theme_choice(ThemeChoice::Dark);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                PrefKey::AccentColor,
                PrefKey::AutoLaunchKeyboard,
                PrefKey::ThemeChoice
            ]
        );
    }

    #[test]
    fn test_setting_same_value_does_not_notify() {
        let (store, seen, _subscription) = counting_store();

        store.set_theme_choice(ThemeChoice::System); // already the default
        store.set_accent_color(None); // already the default
        assert!(seen.lock().unwrap().is_empty());

        store.set_accent_color(Some(Rgb(1, 2, 3)));
        store.set_accent_color(Some(Rgb(1, 2, 3)));
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_dropping_subscription_removes_listener() {
        let store = Arc::new(PreferenceStore::default());
        let count = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&count);
        let subscription = store.subscribe(move |_| {
            sink.fetch_add(1, Ordering::SeqCst);
        });

        store.set_auto_launch_keyboard(true);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        drop(subscription);
        store.set_auto_launch_keyboard(false);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_listener_may_subscribe_reentrantly() {
        let store = Arc::new(PreferenceStore::default());
        let count = Arc::new(AtomicUsize::new(0));
        let held = Arc::new(Mutex::new(Vec::new()));

        let inner_store = Arc::clone(&store);
        let inner_count = Arc::clone(&count);
        let inner_held = Arc::clone(&held);
        let _subscription = store.subscribe(move |_| {
            let sink = Arc::clone(&inner_count);
            let subscription = inner_store.subscribe(move |_| {
                sink.fetch_add(1, Ordering::SeqCst);
            });
            inner_held.lock().unwrap().push(subscription);
        });

        // The listener added during this notification does not see it.
        store.set_auto_launch_keyboard(true);
        assert_eq!(count.load(Ordering::SeqCst), 0);

        // It does see the next one.
        store.set_auto_launch_keyboard(false);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_listener_may_drop_subscription_reentrantly() {
        let store = Arc::new(PreferenceStore::default());
        let count = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&count);
        let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

        let inner_slot = Arc::clone(&slot);
        let subscription = store.subscribe(move |_| {
            sink.fetch_add(1, Ordering::SeqCst);
            inner_slot.lock().unwrap().take();
        });
        *slot.lock().unwrap() = Some(subscription);

        // First change fires once and removes the listener from within.
        store.set_auto_launch_keyboard(true);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        store.set_auto_launch_keyboard(false);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_listener_may_read_preferences() {
        let store = Arc::new(PreferenceStore::default());
        let observed = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&observed);
        let inner = Arc::clone(&store);
        let _subscription = store.subscribe(move |_| {
            *sink.lock().unwrap() = inner.accent_color();
        });

        store.set_accent_color(Some(Rgb(9, 9, 9)));
        assert_eq!(*observed.lock().unwrap(), Some(Rgb(9, 9, 9)));
    }
}
