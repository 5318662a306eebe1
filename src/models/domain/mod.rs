pub mod document;
pub mod notice;
pub mod page_range;
pub mod page_result;
pub mod run_batch;
pub use document::{Document, DocumentFormat};
pub use notice::{Notice, NoticeLevel, Notices};
pub use page_range::PageRange;
pub use page_result::PageResult;
pub use run_batch::RunBatch;
