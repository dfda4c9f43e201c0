use crate::errors::ScheduleError;

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("mqtt connection error: {0}")]
    Connection(#[from] rumqttc::ConnectionError),

    #[error("mqtt publish error: {0}")]
    Publish(#[from] rumqttc::ClientError),

    #[error("tls material error: {0}")]
    TlsMaterial(#[from] std::io::Error),
}
