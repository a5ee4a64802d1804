// src/lib.rs

pub mod app;
pub mod chat_view;
pub mod config;
pub mod conversation;
pub mod errors;
pub mod events;
pub mod intro_screen;
pub mod key_handlers;
pub mod logging;
pub mod transport;
pub mod ui;
