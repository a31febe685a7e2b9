use crate::core::schema;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MenuError, Result};
use reqwest::Client;
use serde_json::{json, Value};
use std::sync::Arc;

/// Instruction prompt for the vision model. The model must extract every
/// item, translate titles/descriptions/ingredients to English, and answer
/// with schema-conforming JSON only.
const EXTRACTION_PROMPT: &str = "You are a food and language expert given an image of a restaurant \
menu. Extract every menu item from the image; do not skip any item under any condition. For each \
item produce: a unique integer id; the Original Title exactly as printed on the menu (never \
invented); the Price as printed; an English Title, Description and list of Ingredients (translate \
to English where needed, predict sensible values where the menu gives none); the Category the dish \
belongs to (for example Entrees, Main Courses, Drinks, Desserts); the Allergy tags commonly \
associated with the dish; and an empty Image array. Return only structured JSON matching the \
required schema, with no surrounding text or decoration.";

/// Talks to an OpenAI-compatible chat-completions endpoint and keeps
/// resubmitting until it gets a response with non-empty message content.
///
/// Transport failures, non-success statuses, unparseable bodies and empty
/// content are all treated the same: wait a fixed delay and try again. The
/// loop is bounded by `max_attempts`; exhausting it surfaces
/// `ExtractionTimeout`. Content is returned as-is and only validated by the
/// parser downstream.
pub struct ExtractionClient<C: ConfigProvider> {
    client: Client,
    config: Arc<C>,
}

impl<C: ConfigProvider> ExtractionClient<C> {
    pub fn new(client: Client, config: Arc<C>) -> Self {
        Self { client, config }
    }

    pub async fn extract(&self, encoded_image: &str) -> Result<String> {
        let body = request_body(self.config.extraction_model(), encoded_image);
        let max_attempts = self.config.max_attempts().max(1);

        let mut attempts = 0;
        loop {
            attempts += 1;
            match self.attempt(&body).await {
                Ok(content) => {
                    tracing::debug!("extraction succeeded on attempt {}", attempts);
                    return Ok(content);
                }
                Err(e) if attempts >= max_attempts => {
                    tracing::error!("extraction attempt {} failed: {}, giving up", attempts, e);
                    return Err(MenuError::ExtractionTimeout { attempts });
                }
                Err(e) => {
                    tracing::warn!(
                        "extraction attempt {} failed: {}, retrying in {:?}",
                        attempts,
                        e,
                        self.config.retry_delay()
                    );
                    tokio::time::sleep(self.config.retry_delay()).await;
                }
            }
        }
    }

    async fn attempt(&self, body: &Value) -> Result<String> {
        let response = self
            .client
            .post(self.config.extraction_endpoint())
            .bearer_auth(self.config.extraction_api_key())
            .json(body)
            .send()
            .await?;

        tracing::debug!("extraction response status: {}", response.status());

        let payload: Value = response.error_for_status()?.json().await?;
        let content = payload
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .unwrap_or("");

        if content.is_empty() {
            return Err(MenuError::ProcessingError {
                message: "response carried no message content".to_string(),
            });
        }

        Ok(content.to_string())
    }
}

fn request_body(model: &str, encoded_image: &str) -> Value {
    json!({
        "model": model,
        "messages": [{
            "role": "user",
            "content": [
                { "type": "text", "text": EXTRACTION_PROMPT },
                {
                    "type": "image_url",
                    "image_url": { "url": format!("data:image/jpeg;base64,{}", encoded_image) }
                }
            ]
        }],
        "response_format": schema::response_format()
    })
}
