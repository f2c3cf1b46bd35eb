//! slock agent binary.
//!
//! Loads the durable lock record, connects to the MQTT broker, and runs the
//! single-task command loop: every inbound publish is routed through the
//! core, its effect persisted, and its response published on `lock/update`.
//! Because all commands are handled inline on the one event-loop task, the
//! classify → mutate → persist → respond sequence is serialized by
//! construction.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rumqttc::v5::mqttbytes::v5::Packet;
use rumqttc::v5::{AsyncClient, Event};
use slock_agent::{LockService, session};
use slock_core::{Command, command::RESPONSE_TOPIC};
use slock_store::{StateStore, StoreError};
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Delay before polling the transport again after an error.
const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// Capacity of the client request channel.
const CLIENT_CHANNEL_CAPACITY: usize = 16;

/// Smart lock agent: an MQTT-commanded lock with durable state.
#[derive(Debug, Parser)]
#[command(name = "slock-agent", version, about)]
struct Args {
    /// MQTT broker hostname.
    #[arg(long, default_value = "localhost")]
    broker_host: String,

    /// MQTT broker port.
    #[arg(long, default_value_t = 1883)]
    broker_port: u16,

    /// MQTT client id; also the lock's identity in the last-will notice.
    #[arg(long)]
    client_id: String,

    /// Path of the durable lock record.
    #[arg(long, default_value = "lock.json")]
    state_file: PathBuf,
}

/// Fatal startup failures.
#[derive(Debug, Error)]
enum AgentError {
    /// The durable record could not be loaded.
    #[error("cannot load lock state: {0}")]
    Load(#[from] StoreError),
}

#[tokio::main]
async fn main() -> Result<(), AgentError> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();

    // A missing or corrupt record is fatal: operating on an assumed default
    // state would desynchronize the lock from its durable record.
    let store = StateStore::new(&args.state_file);
    let record = store.load()?;

    let qos = session::qos_level(record.qos);
    let options =
        session::mqtt_options(&args.client_id, &args.broker_host, args.broker_port, &record);
    let mut service = LockService::new(record, store);

    let (client, mut event_loop) = AsyncClient::new(options, CLIENT_CHANNEL_CAPACITY);
    info!(host = %args.broker_host, port = args.broker_port, "connecting to broker");

    loop {
        match event_loop.poll().await {
            Ok(Event::Incoming(Packet::ConnAck(_))) => {
                info!("connection established");

                // Subscriptions do not survive a fresh session, so they are
                // re-registered on every ConnAck.
                for topic in Command::topics() {
                    if let Err(err) = client.subscribe(topic, qos).await {
                        error!(%topic, error = %err, "subscribe failed");
                    }
                }
            },
            Ok(Event::Incoming(Packet::Publish(publish))) => {
                // Lossy decode: command topics are ASCII, so anything else
                // cannot route and is reported below with the raw bytes.
                let topic = String::from_utf8_lossy(&publish.topic).into_owned();

                match service.handle(&topic, &publish.payload) {
                    Ok(response) => {
                        if let Err(err) = client
                            .publish_with_properties(
                                RESPONSE_TOPIC,
                                qos,
                                false,
                                response,
                                session::publish_properties(),
                            )
                            .await
                        {
                            error!(error = %err, "response publish failed");
                        }
                    },
                    Err(err) => {
                        warn!(raw_topic = ?publish.topic, error = %err, "dropping message");
                    },
                }
            },
            Ok(_) => {},
            Err(err) => {
                // Reconnection is the transport's job; the loop just backs
                // off and polls again.
                error!(error = %err, "transport error");
                tokio::time::sleep(RECONNECT_DELAY).await;
            },
        }
    }
}
