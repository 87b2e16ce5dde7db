//! Fruit form - a host for the tui-select dropdown
//!
//! The form loads its options asynchronously, shows a placeholder until they
//! arrive, and reads the dropdown's committed value when the user submits.
//!
//! - `action`: what can happen (`#[derive(Action)]` with inferred categories)
//! - `state` / `reducer` / `effect`: host state and its transitions
//! - `source`: the asynchronous option source
//! - `config`: command line and keybinding file
//! - `components`: the form view and help bar

pub mod action;
pub mod components;
pub mod config;
pub mod effect;
pub mod reducer;
pub mod source;
pub mod state;
