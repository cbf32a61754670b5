pub mod db;
pub mod record_store;
pub mod store;
