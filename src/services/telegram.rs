//! Telegram Bot API notifier

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::config::TelegramSettings;
use crate::error::NotifyError;
use crate::services::notifier::Notifier;

pub struct TelegramNotifier {
    settings: TelegramSettings,
    client: Client,
}

impl TelegramNotifier {
    pub fn new(settings: TelegramSettings) -> Self {
        Self::with_client(settings, Client::new())
    }

    pub fn with_client(settings: TelegramSettings, client: Client) -> Self {
        Self { settings, client }
    }

    fn send_message_url(&self, token: &str, chat_id: &str, text: &str) -> Result<Url, NotifyError> {
        let mut url = Url::parse(&self.settings.api_url)?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend([format!("bot{token}").as_str(), "sendMessage"]);
        url.query_pairs_mut()
            .append_pair("chat_id", chat_id)
            .append_pair("text", text)
            .append_pair("parse_mode", "HTML");
        Ok(url)
    }
}

#[async_trait::async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        let token = self
            .settings
            .token
            .as_deref()
            .ok_or(NotifyError::NotConfigured("TELEGRAM_TOKEN"))?;
        let chat_id = self
            .settings
            .chat_id
            .as_deref()
            .ok_or(NotifyError::NotConfigured("CHAT_ID"))?;

        let url = self.send_message_url(token, chat_id, message)?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Rejected(status));
        }

        debug!(chat_id = %chat_id, "Telegram: message delivered");
        Ok(())
    }
}
