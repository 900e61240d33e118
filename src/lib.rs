pub mod config;
pub mod db;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod models;
pub mod state;
pub mod store;
pub mod utils;
pub mod view;
