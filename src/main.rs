use std::{cell::Cell, rc::Rc};

use gpui::{
    App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions, px, size,
};
use gpui_storefront::{config::StorefrontConfig, views::Storefront};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_ENV: &str = "STOREFRONT_LOG";
const DEFAULT_LOG_FILTER: &str = "gpui_storefront=info,warn";

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = StorefrontConfig::from_env();
    tracing::info!(appearance = ?config.appearance, theme = ?config.theme_path, "starting storefront");

    let window_error = Rc::new(Cell::new(None::<anyhow::Error>));
    let window_error_slot = window_error.clone();

    Application::new()
        .with_quit_mode(gpui::QuitMode::LastWindowClosed)
        .run(move |cx: &mut App| {
            gpui_storefront::init(cx, &config);

            let bounds = Bounds::centered(None, size(px(390.), px(844.)), cx);
            let appearance = config.appearance;

            let opened = cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    titlebar: Some(TitlebarOptions {
                        title: Some("Storefront".into()),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                |window, cx| cx.new(|cx| Storefront::new(appearance, window, cx)),
            );

            match opened {
                Ok(_) => cx.activate(true),
                Err(error) => {
                    tracing::error!(%error, "failed to open window");
                    window_error_slot.set(Some(error));
                    cx.quit();
                }
            }
        });

    match window_error.take() {
        Some(error) => Err(error.context("opening the storefront window")),
        None => Ok(()),
    }
}
