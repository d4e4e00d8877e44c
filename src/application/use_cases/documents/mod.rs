pub mod delete_document;
pub mod download_document;
pub mod move_document;
pub mod rename_document;
pub mod upload_document;
