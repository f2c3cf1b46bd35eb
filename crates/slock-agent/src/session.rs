//! MQTT session parameters.
//!
//! Connection behavior recovered from the reference deployment: MQTT v5,
//! 60 s keep-alive, 1800 s session expiry, a retained last will announcing
//! connection loss, and a 30 s expiry on every outbound response.

use std::time::Duration;

use rumqttc::v5::MqttOptions;
use rumqttc::v5::mqttbytes::QoS;
use rumqttc::v5::mqttbytes::v5::{ConnectProperties, LastWill, PublishProperties};
use slock_core::{LockRecord, command::RESPONSE_TOPIC};

/// Keep-alive interval for the broker connection.
pub const KEEP_ALIVE: Duration = Duration::from_secs(60);

/// Session expiry requested at connect time, in seconds.
pub const SESSION_EXPIRY_SECS: u32 = 1800;

/// Message expiry attached to every outbound response, in seconds.
pub const MESSAGE_EXPIRY_SECS: u32 = 30;

/// Map the record's QoS level onto the transport's.
///
/// Levels above 2 are clamped to exactly-once.
#[must_use]
pub fn qos_level(qos: u8) -> QoS {
    match qos {
        0 => QoS::AtMostOnce,
        1 => QoS::AtLeastOnce,
        _ => QoS::ExactlyOnce,
    }
}

/// Build the broker connection options for a lock.
///
/// The agent authenticates to the broker as the lock's client id with the
/// permanent credential, and registers a retained last will on the response
/// topic so consumers learn about connection loss from the broker itself.
#[must_use]
pub fn mqtt_options(client_id: &str, host: &str, port: u16, record: &LockRecord) -> MqttOptions {
    let mut options = MqttOptions::new(client_id, host, port);
    options.set_keep_alive(KEEP_ALIVE);
    options.set_credentials(client_id, record.permanent_password.expose());

    let mut connect_properties = ConnectProperties::new();
    connect_properties.session_expiry_interval = Some(SESSION_EXPIRY_SECS);
    options.set_connect_properties(connect_properties);

    let will_message = format!("ERROR: Connection to Smart Lock {client_id} Lost");
    options.set_last_will(LastWill::new(
        RESPONSE_TOPIC,
        will_message,
        qos_level(record.qos),
        true,
        None,
    ));

    options
}

/// Properties attached to every outbound response publish.
#[must_use]
pub fn publish_properties() -> PublishProperties {
    PublishProperties {
        message_expiry_interval: Some(MESSAGE_EXPIRY_SECS),
        ..PublishProperties::default()
    }
}
