use std::sync::Arc;

use anyhow::{Error, Result};
use push_bridge::{
    bridge::{ChannelListener, EventBridge},
    config::{Config, LogFormat},
    hub::NotificationHub,
    models::message::InboundCallback,
};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::load()?;
    init_tracing(config.log_format);

    let bridge = Arc::new(EventBridge::new());
    let hub = NotificationHub::new(config.normalizer(), Arc::clone(&bridge));

    let (listener, mut events) = ChannelListener::channel();
    bridge.attach_listener(Arc::new(listener));

    let writer = tokio::spawn(async move {
        let mut stdout = io::stdout();
        while let Some(event) = events.recv().await {
            let mut line = serde_json::to_vec(&event.to_wire())?;
            line.push(b'\n');
            stdout.write_all(&line).await?;
        }
        stdout.flush().await?;
        Ok::<(), Error>(())
    });

    info!("Replaying native callbacks from stdin");

    let mut lines = BufReader::new(io::stdin()).lines();
    let mut line_number = 0usize;
    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<InboundCallback>(&line) {
            Ok(callback) => hub.dispatch(callback),
            Err(e) => warn!(line_number, error = %e, "Skipping malformed callback"),
        }
    }

    // Dropping the hub and bridge closes the listener channel.
    drop(hub);
    drop(bridge);
    writer.await??;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}
