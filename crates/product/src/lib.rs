pub mod abstract_trait;
pub mod di;
pub mod domain;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;
pub mod state;

pub const SERVICE_NAME: &str = "product-service";
pub const DEFAULT_PORT: u16 = 7001;
