pub mod assertions;
pub mod clients;
pub mod config;
pub mod error;
pub mod fakers;
pub mod fixtures;
pub mod reporting;
pub mod routes;
pub mod schema;
