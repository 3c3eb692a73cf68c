//! Splash App demo binary
//!
//! Walks the header and counter page through a scripted session using the
//! sharing strategy named by `SPLASH_STRATEGY`.

use anyhow::Context as _;
use splash::{
    configure_store, App, AppConfig, AppError, ButtonId, CountBinding, CountProvider,
    CounterEnvironment, LocalCounter, Strategy,
};
use splash_core::environment::SystemClock;
use splash_runtime::metrics::MetricsRecorder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("reading configuration")?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let recorder = if config.print_metrics {
        Some(MetricsRecorder::install().context("installing metrics recorder")?)
    } else {
        None
    };

    tracing::info!(strategy = %config.strategy, "Starting Splash App");
    println!("=== Splash App: {} strategy ===\n", config.strategy);

    let environment = CounterEnvironment::new(SystemClock);

    match config.strategy {
        Strategy::Local => {
            let mut app = App::new(LocalCounter::new(environment));
            walk(&mut app).await?;
        },
        Strategy::Context => {
            let provider = CountProvider::new();
            let mut app = App::new(provider.use_count());
            walk(&mut app).await?;
            tracing::debug!(consumers = provider.consumers(), "Context walk finished");
        },
        Strategy::Store => {
            let store = configure_store(config.store_config(), environment);
            let mut app = App::new(store.clone());
            walk(&mut app).await?;

            println!("\n=== Action history ===");
            println!("{}", store.history().export_json()?);

            store
                .shutdown(config.shutdown_timeout())
                .await
                .context("shutting down store")?;
        },
    }

    if let Some(rendered) = recorder.as_ref().and_then(MetricsRecorder::render) {
        println!("\n=== Metrics ===\n{rendered}");
    }

    Ok(())
}

/// Home, counter page, a few clicks, away and back again
async fn walk<B: CountBinding>(app: &mut App<B>) -> Result<(), AppError> {
    show(app, "Home").await;

    app.navigate("/counter-app").await?;
    show(app, "Counter page").await;

    app.click(ButtonId::Decrement).await?;
    show(app, "After Decrement at zero").await;

    for _ in 0..10 {
        app.click(ButtonId::Increment).await?;
    }
    show(app, "After ten Increments").await;

    app.click(ButtonId::Decrement).await?;
    show(app, "After Decrement").await;

    app.navigate("/").await?;
    show(app, "Back home").await;

    app.navigate("/counter-app").await?;
    show(app, "Counter page again").await;

    Ok(())
}

async fn show<B: CountBinding>(app: &App<B>, step: &str) {
    println!(">>> {step}\n{}\n", app.render().await);
}
