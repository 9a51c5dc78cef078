//! Right-click menu of a tab label.

use super::registry::TabRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabMenuAction {
    CloseCurrent,
    CloseOthers,
    CloseToRight,
}

impl TabMenuAction {
    pub const ALL: [TabMenuAction; 3] = [
        TabMenuAction::CloseCurrent,
        TabMenuAction::CloseOthers,
        TabMenuAction::CloseToRight,
    ];

    /// Message id of the menu item label.
    pub fn message_id(&self) -> &'static str {
        match self {
            TabMenuAction::CloseCurrent => "component.childrenTabs.closeCurrent",
            TabMenuAction::CloseOthers => "component.childrenTabs.closeOthers",
            TabMenuAction::CloseToRight => "component.childrenTabs.closeToRight",
        }
    }

    /// Whether the item is clickable for the tab `key`.
    pub fn is_enabled<C>(&self, registry: &TabRegistry<C>, key: &str) -> bool {
        let single = registry.len() <= 1;
        match self {
            TabMenuAction::CloseCurrent => {
                !single && registry.get(key).is_some_and(|tab| tab.closable)
            }
            TabMenuAction::CloseOthers => !single && registry.contains(key),
            TabMenuAction::CloseToRight => registry.contains(key) && !registry.is_last(key),
        }
    }

    /// Runs the action against the registry. Returns `true` if anything changed.
    pub fn apply<C>(&self, registry: &mut TabRegistry<C>, key: &str) -> bool {
        match self {
            TabMenuAction::CloseCurrent => registry.close(key),
            TabMenuAction::CloseOthers => registry.close_others(key),
            TabMenuAction::CloseToRight => registry.close_to_right(key),
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

    #[test]
    fn test_single_tab_disables_closing() {
        let registry = registry(&["a"]);
        for action in TabMenuAction::ALL {
            assert!(!action.is_enabled(&registry, "a"), "{:?}", action);
        }
    }

    #[test]
    fn test_last_tab_disables_close_to_right() {
        let registry = registry(&["a", "b", "c"]);
        assert!(!TabMenuAction::CloseToRight.is_enabled(&registry, "c"));
        assert!(TabMenuAction::CloseToRight.is_enabled(&registry, "b"));
        assert!(TabMenuAction::CloseCurrent.is_enabled(&registry, "c"));
        assert!(TabMenuAction::CloseOthers.is_enabled(&registry, "c"));
    }

    #[test]
    fn test_pinned_tab_cannot_close_current() {
        let mut registry = registry(&["a"]);
        registry.open("pinned", "Pinned", (), false);
        assert!(!TabMenuAction::CloseCurrent.is_enabled(&registry, "pinned"));
        assert!(TabMenuAction::CloseOthers.is_enabled(&registry, "pinned"));
    }

    #[test]
    fn test_apply_dispatches_to_registry() {
        let mut registry = registry(&["a", "b", "c", "d"]);
        assert!(TabMenuAction::CloseToRight.apply(&mut registry, "c"));
        assert_eq!(registry.len(), 3);
        assert!(TabMenuAction::CloseOthers.apply(&mut registry, "a"));
        assert_eq!(registry.len(), 1);
        assert!(!TabMenuAction::CloseCurrent.apply(&mut registry, "a"));
    }
}
