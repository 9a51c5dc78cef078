use crate::shared::locale::format_message;
use leptos::prelude::*;

struct FooterLink {
    key: &'static str,
    title: &'static str,
    href: &'static str,
}

const FOOTER_LINKS: [FooterLink; 3] = [
    FooterLink {
        key: "leptos",
        title: "Leptos",
        href: "https://leptos.dev",
    },
    FooterLink {
        key: "thaw",
        title: "Thaw UI",
        href: "https://thawui.vercel.app",
    },
    FooterLink {
        key: "axum",
        title: "Axum",
        href: "https://github.com/tokio-rs/axum",
    },
];

#[component]
pub fn DefaultFooter() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="global-footer">
            <div class="global-footer__links">
                {FOOTER_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                data-key=link.key
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {link.title}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="global-footer__copyright">
                {format!("Copyright © {}", format_message("app.footer.copyright"))}
            </div>
        </footer>
    }
}

/// Page content followed by the footer.
#[component]
pub fn GlobalFooter(children: Children) -> impl IntoView {
    view! {
        <div class="global-footer-wrapper">
            <div class="global-footer-wrapper__content">{children()}</div>
            <DefaultFooter />
        </div>
    }
}
