pub mod auth;
pub mod forms;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod server;
pub mod session;
