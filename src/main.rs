#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_config;
mod app_constants;
mod app_errors;
mod app_runtime;
mod app_shell;
mod bridge_commands;
mod config_paths;
mod failure_notice;
mod logging;
mod ui_host;

pub(crate) use app_constants::*;

fn main() {
    app_runtime::run();
}
