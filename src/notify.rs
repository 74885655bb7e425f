use classplan_api::config::parse_log_level;
use classplan_reminder::{FileSubjectSource, LocalClock, config::ReminderConfig, spawn_reminders};
use color_eyre::eyre::Result;
use dotenv::dotenv;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Initialize logging
    let level = std::env::var("LOG_LEVEL")
        .map(|level| parse_log_level(&level))
        .unwrap_or(tracing::Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let config = ReminderConfig::from_env()?;
    info!(
        file = %config.subjects_file.display(),
        "Watching subject schedules for starting classes"
    );

    let (tx, mut rx) = mpsc::channel(config.channel_capacity);
    let source = FileSubjectSource::new(config.subjects_file.clone());
    let handle = spawn_reminders(source, LocalClock, config.interval, tx);

    // Deliver notifications until Ctrl-C
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            reminder = rx.recv() => match reminder {
                Some(reminder) => info!(label = %reminder.label, hour = reminder.hour, "{}", reminder),
                None => break,
            },
        }
    }

    info!("Shutting down reminders");
    handle.shutdown().await?;

    Ok(())
}
