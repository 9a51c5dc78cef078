pub mod page_header;
pub mod page_loading;

pub use page_header::PageHeader;
pub use page_loading::PageLoading;
