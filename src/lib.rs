pub mod app;
pub mod collab;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod routes;
pub mod state;
pub mod store;
pub mod types;
