pub mod footer;

pub use footer::{DefaultFooter, GlobalFooter};
