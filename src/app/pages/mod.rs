pub mod routes;
pub mod auth;
pub mod site;

pub use routes::{App, Route};
