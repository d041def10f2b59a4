// src/views/mod.rs
pub mod home;

pub use home::{Home, HomeModel, HomeProps};
