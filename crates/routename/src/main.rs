use log::error;
use routename::{
    app::{App, AppProps},
    components::load_error::{LoadError, LoadErrorProps},
    config::AppConfig,
    loader::load_climbers,
};
use std::rc::Rc;

fn main() {
    init_logging();
    match load_climbers() {
        Ok(dataset) => {
            yew::Renderer::<App>::with_props(AppProps {
                dataset: Rc::new(dataset),
                config: AppConfig::default(),
            })
            .render();
        }
        Err(err) => {
            error!("Cannot load climbers: {err}");
            yew::Renderer::<LoadError>::with_props(LoadErrorProps {
                message: err.to_string().into(),
            })
            .render();
        }
    }
}

fn init_logging() {
    use log::Level;
    use wasm_logger::Config;

    // trace level for debug builds, warn level for production builds.
    #[cfg(debug_assertions)]
    let level = Level::Trace;
    #[cfg(not(debug_assertions))]
    let level = Level::Warn;

    wasm_logger::init(Config::new(level));
}
