use creatorhub_web::config::AppConfig;
use creatorhub_web::pages::route_table;
use creatorhub_web::{App, AppProps};
use tracing_subscriber::fmt::format::{FmtSpan, Pretty};
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn init_tracing(config: &AppConfig) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(true)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(tracing_web::MakeWebConsoleWriter::new())
        .with_span_events(FmtSpan::ACTIVE);
    let perf_layer = tracing_web::performance_layer().with_details_from_fields(Pretty::default());

    tracing_subscriber::registry()
        .with(config.max_log_level)
        .with(fmt_layer)
        .with(perf_layer)
        .init();
}

fn main() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let config = AppConfig::for_build();
    init_tracing(&config);

    tracing::info!("starting up!");

    let routes = match route_table() {
        Ok(routes) => routes,
        Err(e) => {
            tracing::error!("failed to build the route table: {e}");
            return;
        }
    };
    for (path, page) in routes.routes() {
        tracing::info!("🗺️ '{path}' -> {page:?}");
    }
    tracing::info!("🗺️ '*' -> {:?}", routes.fallback());

    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        document.set_title(config.title);
    }

    yew::Renderer::<App>::with_props(AppProps {
        routes: routes.into(),
    })
    .render();
}
