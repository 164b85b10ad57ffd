pub mod auth;
pub mod config;
pub mod db;
pub mod environment;
pub mod errors;
pub mod i18n;
pub mod io;
pub mod recipe;
pub mod review;
pub mod routes;
pub mod seed;
pub mod session;
pub mod store;
pub mod templates;
pub mod user;
