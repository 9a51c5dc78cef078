//! Settings drawer - runtime reconfiguration of the layout.
//!
//! Every control edits its own signal; an effect per control writes the
//! value back into the shared `LayoutSettings` signal owned by the shell.

use crate::shared::locale::format_message;
use contracts::shared::settings::{ContentWidth, LayoutSettings, NavTheme, RouteTabsMode};
use leptos::prelude::*;
use thaw::*;

const ROUTE_TABS_OFF: &str = "off";

/// Mirrors a control signal into the settings, skipping the initial run.
fn sync_setting<T>(control: RwSignal<T>, settings: RwSignal<LayoutSettings>, apply: fn(&mut LayoutSettings, &T))
where
    T: Clone + Send + Sync + 'static,
{
    Effect::new(move |prev: Option<()>| {
        let value = control.get();
        if prev.is_some() {
            settings.update(|settings| {
                apply(settings, &value);
                log::debug!("settings changed: {:?}", settings);
            });
        }
    });
}

#[component]
pub fn SettingDrawer(settings: RwSignal<LayoutSettings>, open: RwSignal<bool>) -> impl IntoView {
    let initial = settings.get_untracked();

    let nav_theme = RwSignal::new(initial.nav_theme.as_str().to_string());
    let content_width = RwSignal::new(initial.content_width.as_str().to_string());
    let fixed_header = RwSignal::new(initial.fixed_header);
    let route_tabs_mode = RwSignal::new(
        initial
            .route_tabs_mode
            .map(|mode| mode.as_str())
            .unwrap_or(ROUTE_TABS_OFF)
            .to_string(),
    );
    let fixed_page_tabs = RwSignal::new(initial.fixed_page_tabs);

    sync_setting(nav_theme, settings, |s, v| s.nav_theme = NavTheme::from_str(v));
    sync_setting(content_width, settings, |s, v| {
        s.content_width = ContentWidth::from_str(v)
    });
    sync_setting(fixed_header, settings, |s, v| s.fixed_header = *v);
    sync_setting(route_tabs_mode, settings, |s, v| {
        s.route_tabs_mode = RouteTabsMode::parse_option(v)
    });
    sync_setting(fixed_page_tabs, settings, |s, v| s.fixed_page_tabs = *v);

    let tabs_enabled = move || route_tabs_mode.get() != ROUTE_TABS_OFF;

    view! {
        <Show when=move || open.get()>
            <div class="setting-drawer__mask" on:click=move |_| open.set(false)></div>
            <aside class="setting-drawer" role="dialog">
                <div class="setting-drawer__header">
                    <span class="setting-drawer__title">{format_message("app.setting.title")}</span>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| open.set(false)>
                        "×"
                    </Button>
                </div>

                <section class="setting-drawer__section">
                    <h3>{format_message("app.setting.navtheme")}</h3>
                    <RadioGroup value=nav_theme>
                        <Radio value="dark" label=format_message("app.setting.navtheme.dark")/>
                        <Radio value="light" label=format_message("app.setting.navtheme.light")/>
                    </RadioGroup>
                </section>

                <section class="setting-drawer__section">
                    <h3>{format_message("app.setting.content-width")}</h3>
                    <Select value=content_width>
                        <option value="fluid">{format_message("app.setting.content-width.fluid")}</option>
                        <option value="fixed">{format_message("app.setting.content-width.fixed")}</option>
                    </Select>
                    <Switch checked=fixed_header label=format_message("app.setting.fixedheader")/>
                </section>

                <section class="setting-drawer__section">
                    <h3>{format_message("app.setting.routetabs")}</h3>
                    <RadioGroup value=route_tabs_mode>
                        <Radio value=ROUTE_TABS_OFF label=format_message("app.setting.routetabs.off")/>
                        <Radio value="route" label=format_message("app.setting.routetabs.route")/>
                        <Radio value="path" label=format_message("app.setting.routetabs.path")/>
                    </RadioGroup>
                    <Show when=tabs_enabled>
                        <Switch checked=fixed_page_tabs label=format_message("app.setting.fixedtabs")/>
                    </Show>
                </section>
            </aside>
        </Show>
    }
}
