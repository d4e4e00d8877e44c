pub mod cleanup_duplicates;
