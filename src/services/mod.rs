mod catalog_file;
mod catalog_http;
mod clipboard_arboard;
mod embedded_catalog;
mod sheet_converter;

pub use catalog_file::CatalogFile;
pub use catalog_http::CatalogUrl;
pub use clipboard_arboard::ArboardClipboard;
pub use embedded_catalog::EmbeddedCatalog;
pub use sheet_converter::{SheetConversion, convert_sheet};
