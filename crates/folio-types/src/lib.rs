pub mod frame;
pub mod manifest;
pub mod models;
