pub mod api;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod forms;
pub mod models;
pub mod pages;
