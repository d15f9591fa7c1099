pub mod association;
pub mod contact;
pub mod error;
pub mod manifest;
pub mod pages;
pub mod routes;
pub mod state;
pub mod webhook;
