//! `teamspace-worker` -- keeps a file-backed workspace and its activity feed
//! running.
//!
//! Opens the workspace under `TEAMSPACE_DATA_DIR` (seeding absent lists),
//! wires store changes onto the event bus and runs the activity feed until
//! Ctrl-C. See [`config::WorkerConfig`] for the environment variables.

mod config;

use std::sync::Arc;

use anyhow::Context;
use teamspace_core::clock::SystemClock;
use teamspace_db::{FileKv, Workspace};
use teamspace_events::bus::as_sink;
use teamspace_events::{feed, ActivityFeed, EventBus};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::WorkerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "teamspace_worker=debug,teamspace_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = WorkerConfig::from_env()?;
    tracing::info!(
        data_dir = %config.data_dir.display(),
        interval_secs = config.activity_interval_secs,
        feed_cap = config.activity_feed_cap,
        "Starting teamspace-worker",
    );

    let kv = FileKv::open(&config.data_dir)
        .with_context(|| format!("failed to open data dir {}", config.data_dir.display()))?;
    let bus = Arc::new(EventBus::default());
    let workspace = Workspace::with_parts(Arc::new(kv), Arc::new(SystemClock::new()), as_sink(&bus));

    let counts = workspace.counts();
    tracing::info!(
        users = counts.users,
        squads = counts.squads,
        spaces = counts.spaces,
        docs = counts.docs,
        video_notes = counts.video_notes,
        "Workspace loaded",
    );

    let orphaned_docs = workspace.orphaned_docs().len();
    let orphaned_notes = workspace.orphaned_video_notes().len();
    if orphaned_docs + orphaned_notes > 0 {
        tracing::warn!(
            docs = orphaned_docs,
            video_notes = orphaned_notes,
            "Content references spaces that no longer exist",
        );
    }

    let activity = Arc::new(ActivityFeed::new(
        config.activity_feed_cap,
        config.activity_interval(),
    ));
    let cancel = CancellationToken::new();
    let feed_task = feed::spawn(activity.clone(), bus.subscribe(), cancel.clone());

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    tracing::info!("Shutdown signal received");

    cancel.cancel();
    feed_task.await.context("activity feed task failed")?;

    tracing::info!(entries = activity.len().await, "Worker stopped");
    Ok(())
}
