//! Portfolio workspace shell entry point
//!
//! The server build serves the Dioxus app with request tracing; the browser and native client
//! builds launch the same `App` component.

use portfolio_workspace_shell::app::App;

// dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting portfolio workspace shell...");

    dioxus::serve(|| async move {
        let router = dioxus::server::router(App)
            .layer(tower_http::trace::TraceLayer::new_for_http());
        Ok(router)
    });
}

#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Portfolio workspace shell initialized".into());
    dioxus::launch(App);
}

#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
