use crate::layout::tabs::route_tab::normalize_pathname;
use crate::system::api;
use contracts::system::user::CurrentUser;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::window;

/// Application-wide state shared through context.
///
/// Holds what the old global store used to keep: the sidebar collapsed
/// flag, the signed-in user and the current location.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub pathname: RwSignal<String>,
    pub collapsed: RwSignal<bool>,
    pub current_user: RwSignal<CurrentUser>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            pathname: RwSignal::new(current_location_pathname()),
            collapsed: RwSignal::new(false),
            current_user: RwSignal::new(CurrentUser::guest()),
        }
    }

    /// Keeps `pathname` in sync with browser back/forward navigation.
    pub fn init_router_integration(&self) {
        let this = *self;
        // listener lives as long as the page, the shell is never unmounted
        let _ = window_event_listener(leptos::ev::popstate, move |_| {
            let pathname = current_location_pathname();
            log::debug!("popstate: '{}'", pathname);
            this.pathname.set(pathname);
        });
    }

    /// Pushes a history entry and updates `pathname`.
    pub fn navigate(&self, path: &str) {
        let path = normalize_pathname(path);
        if self.pathname.with_untracked(|current| current == &path) {
            return;
        }
        log::debug!("navigate: '{}'", path);

        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
            }
        }
        self.pathname.set(path);
    }

    /// Same as `navigate`, but replaces the current history entry.
    pub fn redirect(&self, path: &str) {
        let path = normalize_pathname(path);
        log::debug!("redirect: '{}'", path);

        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
            }
        }
        self.pathname.set(path);
    }

    pub fn set_collapsed(&self, collapsed: bool) {
        self.collapsed.set(collapsed);
    }

    pub fn fetch_current_user(&self) {
        let current_user = self.current_user;
        spawn_local(async move {
            match api::fetch_current_user().await {
                Ok(user) => {
                    log::info!("current user: '{}' {:?}", user.name, user.authority);
                    current_user.set(user);
                }
                Err(e) => log::warn!("failed to fetch current user: {}", e),
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn current_location_pathname() -> String {
    let pathname = window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    normalize_pathname(&pathname)
}
