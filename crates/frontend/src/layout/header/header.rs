//! Header - top bar of the shell.
//!
//! Contains:
//! - Sidebar collapse toggle
//! - Application title
//! - Current user
//! - Settings drawer toggle

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::HOME_PATH;
use crate::shared::icons::icon;
use crate::shared::locale::format_message;
use leptos::prelude::*;

#[component]
pub fn Header(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] fixed: Signal<bool>,
    #[prop(into)] menu_loading: Signal<bool>,
    settings_open: RwSignal<bool>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let is_collapsed = move || ctx.collapsed.get();

    let toggle_collapsed = move |_| {
        // пока меню грузится, сворачивание игнорируется
        if menu_loading.get_untracked() {
            return;
        }
        ctx.set_collapsed(!ctx.collapsed.get_untracked());
    };

    view! {
        <header data-zone="header" class="header" class:header--fixed=move || fixed.get()>
            <div class="header__content">
                <button
                    class="header__icon-btn"
                    on:click=toggle_collapsed
                    title=move || {
                        if is_collapsed() {
                            format_message("app.header.expand")
                        } else {
                            format_message("app.header.collapse")
                        }
                    }
                >
                    {move || if is_collapsed() { icon("menu-unfold") } else { icon("menu-fold") }}
                </button>
                <a
                    class="header__title"
                    href=HOME_PATH
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(HOME_PATH);
                    }
                >
                    {move || title.get()}
                </a>
            </div>
            <div class="header__actions">
                <div class="header__user">
                    {icon("user")}
                    <span>{move || ctx.current_user.with(|user| user.name.clone())}</span>
                </div>
                <button
                    class="header__icon-btn"
                    title=format_message("app.setting.title")
                    on:click=move |_| settings_open.update(|open| *open = !*open)
                >
                    {icon("settings")}
                </button>
            </div>
        </header>
    }
}
