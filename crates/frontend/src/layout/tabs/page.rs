//! TabPage component - wrapper для отображения контента таба
//!
//! Отвечает за:
//! - Показ/скрытие контента в зависимости от активности таба
//! - Логирование создания/уничтожения для отладки
//! - Рендер страницы по pathname, сохранённому в табе

use super::page_tabs::PageTabRegistry;
use crate::layout::footer::GlobalFooter;
use leptos::prelude::*;

/// Компонент-обёртка для отдельного таба.
///
/// Inactive tabs stay mounted and are hidden through the
/// `page-tabs__pane--hidden` class, so their state survives switching.
#[component]
pub fn TabPage(
    tab_key: String,
    registry: RwSignal<PageTabRegistry>,
    render_page: fn(&str) -> AnyView,
) -> impl IntoView {
    let key = StoredValue::new(tab_key.clone());

    let is_active = Memo::new(move |_| registry.with(|r| key.with_value(|k| r.is_active(k))));
    let pathname = Memo::new(move |_| {
        registry.with(|r| {
            key.with_value(|k| r.get(k).map(|tab| tab.content.pathname.clone()))
        })
    });

    log::debug!("TabPage CREATED for: '{}'", tab_key);
    let tab_key_for_cleanup = tab_key.clone();
    on_cleanup(move || {
        log::debug!("TabPage DESTROYED for: '{}'", tab_key_for_cleanup);
    });

    view! {
        <div
            class="page-tabs__pane"
            class:page-tabs__pane--hidden=move || !is_active.get()
            role="tabpanel"
            data-tab-key=tab_key
        >
            <GlobalFooter>
                {move || pathname.get().map(|pathname| render_page(&pathname))}
            </GlobalFooter>
        </div>
    }
}
