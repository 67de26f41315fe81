pub mod entries;
pub mod not_found;
