use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::PageHeader;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn Admin() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="page">
            <PageHeader title="Admin" subtitle="Visible to users with the admin authority only.".to_string()>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.navigate("/admin/sub-page")
                >
                    "Sub page"
                </Button>
            </PageHeader>
        </div>
    }
}

#[component]
pub fn SubPage() -> impl IntoView {
    // state below survives tab switches because inactive tabs stay mounted
    let clicks = RwSignal::new(0u32);

    view! {
        <div class="page">
            <PageHeader title="Sub Page">
                <Button on_click=move |_| clicks.update(|n| *n += 1)>"Click"</Button>
            </PageHeader>
            <p class="page__text">{move || format!("Clicked {} times", clicks.get())}</p>
        </div>
    }
}
