pub mod json;
pub mod models;
pub mod routes;
