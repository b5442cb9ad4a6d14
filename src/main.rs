#[tokio::main]
async fn main() -> sindbot::error::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("sindbot=info,serenity=warn"),
    )
    .init();
    log::info!("Starting sindbot");

    match sindbot::run().await {
        Ok(()) => {
            log::info!("Bot shut down successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Bot encountered an error: {e}");
            Err(e)
        }
    }
}
