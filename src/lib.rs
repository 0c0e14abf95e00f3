pub mod api_doc;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod schema;
pub mod state;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;
