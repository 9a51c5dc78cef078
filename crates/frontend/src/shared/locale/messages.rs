//! Message catalogue (en-US).

use once_cell::sync::Lazy;
use std::collections::HashMap;

static MESSAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // ── Menu ──────────────────────────────────────────────────────────
        ("menu.home", "Home"),
        ("menu.welcome", "Welcome"),
        ("menu.admin", "Admin"),
        ("menu.admin.sub-page", "Sub Page"),
        ("menu.list", "List"),
        ("menu.list.table-list", "Search Table"),
        ("menu.list.detail", "Detail"),
        // ── Tabs ──────────────────────────────────────────────────────────
        ("component.childrenTabs.closeCurrent", "Close"),
        ("component.childrenTabs.closeOthers", "Close Others"),
        ("component.childrenTabs.closeToRight", "Close to the Right"),
        // ── Settings drawer ───────────────────────────────────────────────
        ("app.setting.title", "Page Settings"),
        ("app.setting.navtheme", "Menu Theme"),
        ("app.setting.navtheme.dark", "Dark"),
        ("app.setting.navtheme.light", "Light"),
        ("app.setting.content-width", "Content Width"),
        ("app.setting.content-width.fluid", "Fluid"),
        ("app.setting.content-width.fixed", "Fixed"),
        ("app.setting.fixedheader", "Fixed Header"),
        ("app.setting.routetabs", "Page Tabs"),
        ("app.setting.routetabs.off", "Off"),
        ("app.setting.routetabs.route", "One tab per route"),
        ("app.setting.routetabs.path", "One tab per path"),
        ("app.setting.fixedtabs", "Fixed Tabs"),
        // ── Exceptions ────────────────────────────────────────────────────
        ("exception.403.title", "403"),
        ("exception.403.description", "Sorry, you are not authorized to access this page."),
        ("exception.404.title", "404"),
        ("exception.404.description", "Sorry, the page you visited does not exist."),
        ("exception.back", "Back Home"),
        // ── Misc ──────────────────────────────────────────────────────────
        ("app.loading", "Loading..."),
        ("app.header.collapse", "Collapse menu"),
        ("app.header.expand", "Expand menu"),
        ("app.footer.copyright", "2019 Admin Pro"),
    ])
});

/// Looks up a message by id. Unknown ids are returned as-is.
pub fn format_message(id: &str) -> String {
    MESSAGES
        .get(id)
        .map(|message| message.to_string())
        .unwrap_or_else(|| id.to_string())
}
