mod app;
mod components;
mod hooks;
mod pages;
mod services;
mod state;

use app::{App, AppProps};
use services::config::AppConfig;
use services::logging::ConsoleLogger;

fn main() {
    let config = AppConfig::from_env();
    if let Err(err) = ConsoleLogger::init(config.log_level) {
        gloo::console::error!(format!("logger already installed: {}", err));
    }
    log::info!("inventory client starting against {}", config.api_base_url);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
