pub mod scanning;
pub mod models;
pub mod my_utils;
pub mod config;
pub mod errors;
