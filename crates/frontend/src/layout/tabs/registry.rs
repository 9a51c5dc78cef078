//! Tab registry - единственный источник правды для открытых табов.
//!
//! Хранит упорядоченный список табов (порядок вставки = порядок в tab bar)
//! и ключ активного таба. Модуль не зависит от Leptos: компоненты держат
//! registry внутри `RwSignal` и вызывают операции в обработчиках событий.
//!
//! Invariant: `active` is `Some` and names an existing tab whenever the
//! list is non-empty, and is `None` when it is empty.

/// One open page tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab<C> {
    pub key: String,
    pub title: String,
    pub content: C,
    pub closable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRegistry<C> {
    tabs: Vec<Tab<C>>,
    active: Option<String>,
}

impl<C> Default for TabRegistry<C> {
    fn default() -> Self {
        Self {
            tabs: Vec::new(),
            active: None,
        }
    }
}

impl<C> TabRegistry<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tabs(&self) -> &[Tab<C>] {
        &self.tabs
    }

    pub fn active_key(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_tab(&self) -> Option<&Tab<C>> {
        self.active.as_deref().and_then(|key| self.get(key))
    }

    pub fn get(&self, key: &str) -> Option<&Tab<C>> {
        self.tabs.iter().find(|tab| tab.key == key)
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.as_deref() == Some(key)
    }

    /// `true` when `key` is the right-most tab.
    pub fn is_last(&self, key: &str) -> bool {
        self.tabs.last().is_some_and(|tab| tab.key == key)
    }

    /// Opens a tab for `key` or re-activates the existing one.
    ///
    /// An existing tab keeps its position, title and content; use
    /// [`update_content`](Self::update_content) to refresh it.
    pub fn open(&mut self, key: &str, title: &str, content: C, closable: bool) -> bool {
        let mut changed = false;
        if !self.contains(key) {
            log::debug!("tab registry: open '{}'", key);
            self.tabs.push(Tab {
                key: key.to_string(),
                title: title.to_string(),
                content,
                closable,
            });
            changed = true;
        }
        if !self.is_active(key) {
            self.active = Some(key.to_string());
            changed = true;
        }
        changed
    }

    /// Activates an existing tab. Unknown keys are ignored.
    pub fn switch(&mut self, key: &str) -> bool {
        if !self.contains(key) || self.is_active(key) {
            return false;
        }
        self.active = Some(key.to_string());
        true
    }

    /// Removes the tab with `key`.
    ///
    /// The registry never drops its last tab. When the active tab goes away
    /// the next tab to the right becomes active, or the previous one if the
    /// closed tab was right-most.
    pub fn close(&mut self, key: &str) -> bool {
        let Some(index) = self.position(key) else {
            return false;
        };
        if self.tabs.len() == 1 {
            log::debug!("tab registry: refusing to close the only tab '{}'", key);
            return false;
        }

        self.tabs.remove(index);
        if self.is_active(key) {
            // после remove следующий таб сдвинулся на место закрытого
            let fallback = self.tabs.get(index).or_else(|| self.tabs.get(index - 1));
            self.active = fallback.map(|tab| tab.key.clone());
        }
        log::debug!(
            "tab registry: closed '{}', active={:?}",
            key,
            self.active
        );
        true
    }

    /// Keeps `key` and every non-closable tab, and activates `key`.
    pub fn close_others(&mut self, key: &str) -> bool {
        if !self.contains(key) {
            return false;
        }
        let before = self.tabs.len();
        self.tabs.retain(|tab| tab.key == key || !tab.closable);
        let removed = before != self.tabs.len();
        let activated = self.switch(key);
        removed || activated
    }

    /// Removes the closable tabs positioned after `key`.
    ///
    /// If the active tab was among them, `key` becomes active.
    pub fn close_to_right(&mut self, key: &str) -> bool {
        let Some(index) = self.position(key) else {
            return false;
        };
        let before = self.tabs.len();
        let mut position = 0;
        self.tabs.retain(|tab| {
            let keep = position <= index || !tab.closable;
            position += 1;
            keep
        });
        let removed = before != self.tabs.len();

        let active_gone = self
            .active
            .as_deref()
            .is_some_and(|active| !self.tabs.iter().any(|tab| tab.key == active));
        if active_gone {
            self.active = Some(key.to_string());
        }
        removed
    }

    /// Renames an existing tab without moving or activating it.
    pub fn update_title(&mut self, key: &str, title: &str) -> bool {
        match self.tabs.iter_mut().find(|tab| tab.key == key) {
            Some(tab) if tab.title != title => {
                tab.title = title.to_string();
                true
            }
            _ => false,
        }
    }
}

impl<C: PartialEq> TabRegistry<C> {
    /// Replaces the content of an existing tab without moving or activating it.
    pub fn update_content(&mut self, key: &str, content: C) -> bool {
        match self.tabs.iter_mut().find(|tab| tab.key == key) {
            Some(tab) if tab.content != content => {
                tab.content = content;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(keys: &[&str]) -> TabRegistry<()> {
        let mut registry = TabRegistry::new();
        for key in keys {
            registry.open(key, key, (), true);
        }
        registry
    }

    fn keys<C>(registry: &TabRegistry<C>) -> Vec<&str> {
        registry.tabs().iter().map(|tab| tab.key.as_str()).collect()
    }

    #[test]
    fn test_open_keeps_first_open_order() {
        let mut registry = registry(&["a", "b", "c"]);
        registry.open("b", "b", (), true);
        registry.open("d", "d", (), true);
        registry.open("a", "a", (), true);

        assert_eq!(keys(&registry), vec!["a", "b", "c", "d"]);
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.active_key(), Some("a"));
    }

    #[test]
    fn test_open_existing_only_activates() {
        let mut registry = TabRegistry::new();
        registry.open("/list", "List", 1, true);
        registry.open("/welcome", "Welcome", 2, true);

        assert!(registry.open("/list", "Other title", 3, false));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.active_key(), Some("/list"));
        let tab = registry.get("/list").unwrap();
        assert_eq!(tab.title, "List");
        assert_eq!(tab.content, 1);
        assert!(tab.closable);

        assert!(!registry.open("/list", "List", 1, true));
    }

    #[test]
    fn test_switch_unknown_key_is_noop() {
        let mut registry = registry(&["a", "b"]);
        assert!(!registry.switch("zzz"));
        assert_eq!(registry.active_key(), Some("b"));
        assert!(registry.switch("a"));
        assert_eq!(registry.active_key(), Some("a"));
    }

    #[test]
    fn test_close_only_tab_is_rejected() {
        let mut registry = registry(&["a"]);
        assert!(!registry.close("a"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.active_key(), Some("a"));
    }

    #[test]
    fn test_close_active_falls_to_next() {
        let mut registry = registry(&["a", "b", "c"]);
        registry.switch("b");
        assert!(registry.close("b"));
        assert_eq!(keys(&registry), vec!["a", "c"]);
        assert_eq!(registry.active_key(), Some("c"));
    }

    #[test]
    fn test_close_last_active_falls_to_previous() {
        let mut registry = registry(&["a", "b", "c"]);
        assert_eq!(registry.active_key(), Some("c"));
        assert!(registry.close("c"));
        assert_eq!(registry.active_key(), Some("b"));
    }

    #[test]
    fn test_close_inactive_keeps_active() {
        let mut registry = registry(&["a", "b", "c"]);
        assert!(registry.close("a"));
        assert_eq!(registry.active_key(), Some("c"));
        assert!(!registry.close("missing"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_close_others_keeps_pinned() {
        let mut registry = TabRegistry::new();
        registry.open("home", "Home", (), false);
        registry.open("a", "A", (), true);
        registry.open("b", "B", (), true);
        registry.open("c", "C", (), true);

        assert!(registry.close_others("b"));
        assert_eq!(keys(&registry), vec!["home", "b"]);
        assert_eq!(registry.active_key(), Some("b"));

        assert!(!registry.close_others("missing"));
        assert_eq!(keys(&registry), vec!["home", "b"]);
    }

    #[test]
    fn test_close_to_right_moves_active() {
        for active in ["c", "d"] {
            let mut registry = registry(&["a", "b", "c", "d"]);
            registry.switch(active);
            assert!(registry.close_to_right("b"));
            assert_eq!(keys(&registry), vec!["a", "b"]);
            assert_eq!(registry.active_key(), Some("b"));
        }
    }

    #[test]
    fn test_close_to_right_keeps_active_on_left() {
        let mut registry = registry(&["a", "b", "c", "d"]);
        registry.switch("a");
        registry.close_to_right("b");
        assert_eq!(registry.active_key(), Some("a"));
    }

    #[test]
    fn test_close_to_right_skips_pinned() {
        let mut registry = TabRegistry::new();
        registry.open("a", "A", (), true);
        registry.open("b", "B", (), true);
        registry.open("pinned", "P", (), false);
        registry.open("c", "C", (), true);

        registry.close_to_right("a");
        assert_eq!(keys(&registry), vec!["a", "pinned"]);
        assert_eq!(registry.active_key(), Some("a"));
        assert!(!registry.close_to_right("pinned"));
    }

    #[test]
    fn test_update_content_keeps_position_and_active() {
        let mut registry = TabRegistry::new();
        registry.open("/list/:id", "Detail", "/list/1".to_string(), true);
        registry.open("/welcome", "Welcome", "/welcome".to_string(), true);

        assert!(registry.update_content("/list/:id", "/list/2".to_string()));
        assert_eq!(registry.position("/list/:id"), Some(0));
        assert_eq!(registry.active_key(), Some("/welcome"));
        assert_eq!(registry.get("/list/:id").unwrap().content, "/list/2");
        assert!(!registry.update_content("missing", String::new()));
    }

    #[test]
    fn test_update_title_renames_in_place() {
        let mut registry = registry(&["a", "b"]);

        assert!(registry.update_title("a", "A · 7"));
        assert_eq!(registry.get("a").unwrap().title, "A · 7");
        assert_eq!(keys(&registry), vec!["a", "b"]);
        assert_eq!(registry.active_key(), Some("b"));

        assert!(!registry.update_title("a", "A · 7"));
        assert!(!registry.update_title("missing", "M"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_empty_registry_has_no_active() {
        let registry: TabRegistry<()> = TabRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.active_key(), None);
        assert!(registry.active_tab().is_none());
    }
}
