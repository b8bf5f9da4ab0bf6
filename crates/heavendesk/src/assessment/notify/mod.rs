pub mod email;
mod resend;

pub use resend::{ResendConfig, ResendNotifier};

use async_trait::async_trait;

use super::repository::{Notice, Notifier, NotifyError};

/// Writes notices to the log instead of sending them. Used when no e-mail
/// provider is configured.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier {
    booking_url: String,
}

impl TracingNotifier {
    pub fn new(booking_url: impl Into<String>) -> Self {
        Self {
            booking_url: booking_url.into(),
        }
    }
}

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, notice: Notice) -> Result<(), NotifyError> {
        let rendered = email::render(&notice, &self.booking_url);
        tracing::info!(
            audience = ?notice.audience,
            recipient = %notice.recipient,
            result_id = %notice.result_id,
            subject = %rendered.subject,
            "e-mail delivery disabled; notice logged"
        );
        Ok(())
    }
}
