pub mod config;
pub mod domain;
pub mod errors;
pub mod middleware;
pub mod utils;
