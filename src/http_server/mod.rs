pub mod main;
pub mod response;
pub mod routes;

#[cfg(test)]
mod tests;

pub use main::{router, serve, AppState};
