pub mod api_utils;
pub mod authorized;
pub mod components;
pub mod icons;
pub mod locale;
