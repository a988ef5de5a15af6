//! webshell - connection configuration core for a native shell that hosts a
//! remote web application in an embedded browser.
//!
//! The platform layer wires its events to [`shell::MainScreen`] and
//! [`settings::SettingsScreen`] and executes the effects they return.

pub mod config;
pub mod error;
pub mod models;
pub mod prefs;
pub mod resolver;
pub mod settings;
pub mod shell;
pub mod store;
pub mod webview;
