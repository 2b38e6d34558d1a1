//! Alert delivery interface.

use tokio::sync::Mutex;

use crate::error::NotifyError;

#[async_trait::async_trait]
pub trait Notifier {
    /// Deliver one pre-formatted message to the configured recipient.
    async fn send(&self, message: &str) -> Result<(), NotifyError>;
}

/// Keeps messages in memory instead of delivering them.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent_messages(&self) -> Vec<String> {
        self.sent.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        self.sent.lock().await.push(message.to_string());
        Ok(())
    }
}
