// src/lib.rs
pub mod app;
pub mod client;
pub mod report;
pub mod settings;
pub mod state;
pub mod ui;
