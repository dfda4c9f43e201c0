use std::fs;
use std::time::Duration;

use rumqttc::{
    AsyncClient, Event, EventLoop, MqttOptions, Packet, QoS, TlsConfiguration, Transport,
};
use tokio::time;

use crate::configs::{Settings, Topics};
use crate::errors::BridgeError;
use crate::services::pipeline::SchedulePipeline;

/// MQTT shell around [`SchedulePipeline`]: subscribes to the legacy
/// schedule topic and republishes whatever the pipeline produces.
/// Delivery is best-effort (QoS 0, no retries) on both the schedule and
/// the override topic; only the schedule is retained.
pub struct BridgeService {
    client: AsyncClient,
    event_loop: EventLoop,
    topics: Topics,
}

impl BridgeService {
    pub fn new(settings: &Settings) -> Result<Self, BridgeError> {
        let gateway = &settings.gateway;

        let mut options = MqttOptions::new(&gateway.client_id, &gateway.host, gateway.port);
        options.set_keep_alive(Duration::from_secs(5));

        if let Some(auth) = &gateway.auth {
            let client_cert = fs::read(&auth.cert_path)?;
            let client_key = fs::read(&auth.key_path)?;

            options.set_transport(Transport::Tls(TlsConfiguration::Simple {
                ca: client_cert.clone(),
                alpn: None,
                client_auth: Some((client_cert, client_key)),
            }));
        }

        let (client, event_loop) = AsyncClient::new(options, 10);

        Ok(Self {
            client,
            event_loop,
            topics: settings.topics.clone(),
        })
    }

    /// Processes inbound messages until the task is dropped. One message
    /// at a time, in arrival order; every per-message failure is logged
    /// and the loop keeps listening.
    pub async fn serve(self) -> Result<(), BridgeError> {
        let Self {
            client,
            mut event_loop,
            topics,
        } = self;

        client
            .subscribe(&topics.legacy_schedule, QoS::AtMostOnce)
            .await?;

        tracing::info!("subscribed to {}", topics.legacy_schedule);

        let mut pipeline = SchedulePipeline::new();

        loop {
            match event_loop.poll().await {
                Ok(Event::Incoming(Packet::Publish(publish))) => {
                    Self::dispatch(&client, &topics, &mut pipeline, &publish.payload).await;
                }
                Ok(Event::Incoming(Packet::ConnAck(_))) => {
                    // The broker drops subscriptions on reconnect.
                    if let Err(e) = client
                        .subscribe(&topics.legacy_schedule, QoS::AtMostOnce)
                        .await
                    {
                        tracing::error!("resubscribe failed: {}", e);
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::error!("mqtt error: {}", e);
                    time::sleep(Duration::from_secs(1)).await;
                }
            }
        }
    }

    async fn dispatch(
        client: &AsyncClient,
        topics: &Topics,
        pipeline: &mut SchedulePipeline,
        payload: &[u8],
    ) {
        let output = match pipeline.handle(payload) {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!("dropping message: {}", e);
                return;
            }
        };

        if let Err(e) = client
            .publish(&topics.schedule, QoS::AtMostOnce, true, output.schedule_json)
            .await
        {
            tracing::error!("cannot publish schedule: {}", e);
        }

        if let Some(command) = output.override_command {
            if let Err(e) = client
                .publish(&topics.override_command, QoS::AtMostOnce, false, command)
                .await
            {
                tracing::error!("cannot publish override: {}", e);
            }
        }
    }
}
