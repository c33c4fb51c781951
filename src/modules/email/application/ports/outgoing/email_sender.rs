use async_trait::async_trait;

#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Replies to the sent message go to `reply_to` when it is set.
    async fn send_email(
        &self,
        to: &str,
        reply_to: Option<String>,
        subject: &str,
        body: &str,
    ) -> Result<(), String>;
}
