mod catalog_source;
mod clipboard_writer;

pub use catalog_source::CatalogSource;
pub use clipboard_writer::{ClipboardWriter, NoopClipboard};
