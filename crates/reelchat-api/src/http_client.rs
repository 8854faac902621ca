use async_trait::async_trait;
use reelchat_logging::{log_request, log_response};
use reelchat_types::{
    ChatError, CreateChatRequest, CreateChatResponse, SendPromptRequest, SendPromptResponse,
};
use serde::Serialize;

use crate::ChatBackend;

pub const CREATE_CHAT_PATH: &str = "/user/create";
pub const SEND_PROMPT_PATH: &str = "/first/send";

/// Trim whitespace and trailing slashes from a backend base address
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// reqwest-backed [`ChatBackend`]
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
    verbose: bool,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            client: reqwest::Client::new(),
            verbose: false,
        }
    }

    /// Dump requests and responses to the console
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url, ChatError> {
        let raw = format!("{}{}", self.base_url, path);
        reqwest::Url::parse(&raw)
            .map_err(|e| ChatError::RequestSetup(format!("invalid backend URL '{}': {}", raw, e)))
    }

    /// POST a JSON body and return the raw body of a 2xx response.
    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<String, ChatError> {
        let url = self.endpoint(path)?;

        if self.verbose || log::log_enabled!(log::Level::Debug) {
            let value = serde_json::to_value(body)
                .map_err(|e| ChatError::RequestSetup(e.to_string()))?;
            log_request(url.as_str(), &value, token, self.verbose);
        }

        let mut request = self.client.post(url).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(classify_transport_error)?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        log_response(status, &text, self.verbose);

        if !status.is_success() {
            log::warn!("{} returned {}", path, status.as_u16());
            return Err(ChatError::server(status.as_u16(), &text));
        }

        Ok(text)
    }
}

/// Map a reqwest failure that produced no response.
///
/// Builder errors mean the request never left the process; everything
/// else is treated as a connectivity problem.
fn classify_transport_error(err: reqwest::Error) -> ChatError {
    if err.is_builder() {
        log::error!("request could not be built: {}", err);
        ChatError::RequestSetup(err.to_string())
    } else {
        log::error!("no response from backend: {}", err);
        ChatError::Network(err.to_string())
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn create_chat(&self, request: &CreateChatRequest) -> Result<CreateChatResponse, ChatError> {
        let text = self.post_json(CREATE_CHAT_PATH, request, None).await?;

        let value: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| ChatError::MalformedResponse(e.to_string()))?;

        CreateChatResponse::from_json(&value).ok_or_else(|| {
            ChatError::MalformedResponse("response did not contain a chat id".to_string())
        })
    }

    async fn send_prompt(&self, request: &SendPromptRequest, token: &str) -> Result<String, ChatError> {
        let text = self.post_json(SEND_PROMPT_PATH, request, Some(token)).await?;

        let response: SendPromptResponse = serde_json::from_str(&text)
            .map_err(|e| ChatError::MalformedResponse(e.to_string()))?;

        response.latest_reply().map(str::to_string).ok_or_else(|| {
            ChatError::MalformedResponse("response did not contain a reply in chat.messages".to_string())
        })
    }
}
