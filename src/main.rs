use rocketstats::collector_start;
use rocketstats::interface::settings::Settings;

#[cfg(all(
    feature = "jemalloc",
    not(target_os = "android"),
    not(target_os = "freebsd")
))]
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

/// event collector start.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::new(true);

    collector_start(settings).await?;

    Ok(())
}
