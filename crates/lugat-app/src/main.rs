use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod profile;


use self::controller::AppController;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = profile::load_config()?;
    let ui_config = config.ui.clone();

    let runtime = tokio::runtime::Runtime::new()?;

    let (controller, mut tasks) = {
        let _guard = runtime.enter();
        let mut controller = AppController::new(config)?;
        let tasks = controller.spawn_tasks();
        (controller, tasks)
    };

    // Slint must own the main thread
    let (app_to_ui_rx, ui_to_app_tx) = controller.ui_channels();
    let ui_result = lugat_ui::ui_loop(app_to_ui_rx, ui_to_app_tx, &ui_config);

    tracing::info!("Shutdown requested");
    controller.shutdown();

    runtime.block_on(async {
        while let Some(result) = tasks.join_next().await {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => tracing::error!("task exited with error: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    });

    ui_result
}
