pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::Dark => "☾",
        }
    }
}

pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str) -> bool;
}

pub fn resolve_initial(store: &dyn ThemeStore, platform_prefers_dark: bool) -> Theme {
    store
        .load()
        .and_then(|value| Theme::from_str(&value))
        .unwrap_or(if platform_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        })
}

pub fn persist(store: &dyn ThemeStore, theme: Theme) {
    let _ = store.save(theme.as_str());
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{resolve_initial, Theme, ThemeStore, THEME_KEY};
    use web_sys::window;

    pub struct LocalStorageStore;

    impl ThemeStore for LocalStorageStore {
        fn load(&self) -> Option<String> {
            let storage = window()?.local_storage().ok().flatten()?;
            storage.get_item(THEME_KEY).ok().flatten()
        }

        fn save(&self, value: &str) -> bool {
            let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) else {
                return false;
            };

            storage.set_item(THEME_KEY, value).is_ok()
        }
    }

    pub fn system_prefers_dark() -> bool {
        window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|mq| mq.matches())
            .unwrap_or(false)
    }

    pub fn resolve_theme() -> Theme {
        resolve_initial(&LocalStorageStore, system_prefers_dark())
    }

    pub fn apply_theme(theme: Theme) {
        let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };

        let marker = root.class_list();
        let _ = match theme {
            Theme::Dark => marker.add_1("dark"),
            Theme::Light => marker.remove_1("dark"),
        };
    }

    pub fn persist_theme(theme: Theme) {
        super::persist(&LocalStorageStore, theme);
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{apply_theme, persist_theme, resolve_theme};

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct MemoryStore {
        value: RefCell<Option<String>>,
    }

    impl MemoryStore {
        fn empty() -> Self {
            Self {
                value: RefCell::new(None),
            }
        }

        fn seeded(value: &str) -> Self {
            Self {
                value: RefCell::new(Some(value.to_string())),
            }
        }
    }

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.value.borrow().clone()
        }

        fn save(&self, value: &str) -> bool {
            *self.value.borrow_mut() = Some(value.to_string());
            true
        }
    }

    struct FailingStore;

    impl ThemeStore for FailingStore {
        fn load(&self) -> Option<String> {
            None
        }

        fn save(&self, _value: &str) -> bool {
            false
        }
    }

    #[test]
    fn toggle_affordance_reflects_the_next_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
        assert!(Theme::Dark.pressed());
        assert!(!Theme::Light.pressed());
        assert_ne!(Theme::Light.icon(), Theme::Dark.icon());
    }

    #[test]
    fn scalar_round_trips_through_its_persisted_form() {
        assert_eq!(Theme::from_str(Theme::Dark.as_str()), Some(Theme::Dark));
        assert_eq!(Theme::from_str(Theme::Light.as_str()), Some(Theme::Light));
        assert_eq!(Theme::from_str(""), None);
    }

    #[test]
    fn persisted_dark_wins_over_platform_preference() {
        let store = MemoryStore::seeded("dark");

        assert_eq!(resolve_initial(&store, false), Theme::Dark);
        assert_eq!(resolve_initial(&store, true), Theme::Dark);
    }

    #[test]
    fn missing_value_follows_platform_preference() {
        let store = MemoryStore::empty();

        assert_eq!(resolve_initial(&store, true), Theme::Dark);
        assert_eq!(resolve_initial(&store, false), Theme::Light);
    }

    #[test]
    fn unrecognized_persisted_value_falls_back_to_platform() {
        let store = MemoryStore::seeded("solarized");

        assert_eq!(resolve_initial(&store, false), Theme::Light);
        assert_eq!(resolve_initial(&store, true), Theme::Dark);
    }

    #[test]
    fn inaccessible_store_defaults_to_light_and_toggle_still_flips() {
        let store = FailingStore;
        let initial = resolve_initial(&store, false);

        assert_eq!(initial, Theme::Light);

        let toggled = initial.toggled();
        persist(&store, toggled);
        assert_eq!(toggled, Theme::Dark);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn double_toggle_returns_value_and_persisted_scalar_to_initial() {
        let store = MemoryStore::empty();
        let initial = resolve_initial(&store, false);
        persist(&store, initial);

        let once = initial.toggled();
        persist(&store, once);
        let twice = once.toggled();
        persist(&store, twice);

        assert_eq!(twice, initial);
        assert_eq!(store.load().as_deref(), Some(initial.as_str()));
    }
}
