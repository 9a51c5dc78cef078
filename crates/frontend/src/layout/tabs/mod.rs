//! Tab management module
//!
//! Содержит:
//! - `registry` - упорядоченный список открытых табов и активный ключ
//! - `route_tab` - вычисление ключа/заголовка таба по pathname
//! - `context_menu` - действия контекстного меню таба
//! - `page_tabs` - компонент tab bar
//! - `page` - компонент TabPage для обёртки контента таба

pub mod context_menu;
pub mod page;
pub mod page_tabs;
pub mod registry;
pub mod route_tab;

pub use page_tabs::PageTabs;
pub use registry::{Tab, TabRegistry};
