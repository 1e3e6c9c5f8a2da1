#[path = "../common/mod.rs"]
mod common;

mod app_component;
mod components;
