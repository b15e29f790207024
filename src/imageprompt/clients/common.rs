use crate::imageprompt::client_wrapper::{Completion, ModelRequest, TokenUsage};
use crate::imageprompt::error::{PromptError, PromptResult};
use serde::{Deserialize, Serialize};

/// Body of an OpenAI-compatible `POST /chat/completions` call.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: MessageContent<'a>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MessageContent<'a> {
    Text(&'a str),
    Parts(Vec<ContentPart<'a>>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u64,
    completion_tokens: u64,
    total_tokens: u64,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Convert a [`ModelRequest`] into the wire body: system text, then user text plus image.
pub fn to_chat_request(request: &ModelRequest) -> ChatCompletionRequest<'_> {
    ChatCompletionRequest {
        model: &request.model,
        messages: vec![
            ChatMessage {
                role: "system",
                content: MessageContent::Text(request.system_instruction),
            },
            ChatMessage {
                role: "user",
                content: MessageContent::Parts(vec![
                    ContentPart::Text {
                        text: &request.user_instruction,
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: request.image_source.as_url(),
                        },
                    },
                ]),
            },
        ],
        max_tokens: request.max_tokens,
        temperature: request.temperature,
    }
}

/// Send a chat request and return the first choice's content along with its usage.
pub async fn send_chat_completion(
    http: &reqwest::Client,
    endpoint: &str,
    api_key: &str,
    request: &ModelRequest,
) -> PromptResult<Completion> {
    let body = to_chat_request(request);

    let response = http
        .post(endpoint)
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .await
        .map_err(classify_transport_error)?;

    let status = response.status();
    let raw = response.text().await.map_err(classify_transport_error)?;

    if !status.is_success() {
        let detail = serde_json::from_str::<ErrorEnvelope>(&raw)
            .map(|envelope| envelope.error.message)
            .unwrap_or(raw);
        log::error!(
            "imageprompt::clients::common::send_chat_completion(...): backend returned {}: {}",
            status,
            detail
        );
        return Err(PromptError::backend(format!(
            "Backend returned {}: {}",
            status, detail
        )));
    }

    parse_completion(&raw)
}

/// Extract the first completion from a successful response body.
pub fn parse_completion(raw: &str) -> PromptResult<Completion> {
    let parsed: ChatCompletionResponse = serde_json::from_str(raw)
        .map_err(|err| PromptError::backend(format!("Malformed backend response: {}", err)))?;

    let usage = parsed.usage.map(|usage| TokenUsage {
        input_tokens: usage.prompt_tokens as usize,
        output_tokens: usage.completion_tokens as usize,
        total_tokens: usage.total_tokens as usize,
    });

    let text = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| PromptError::backend("Malformed backend response: no choices returned"))?
        .message
        .content
        .ok_or_else(|| {
            PromptError::backend("Malformed backend response: first choice has no content")
        })?;

    Ok(Completion { text, usage })
}

fn classify_transport_error(err: reqwest::Error) -> PromptError {
    if err.is_timeout() {
        PromptError::timeout(format!("Model call timed out: {}", err))
    } else {
        PromptError::backend(format!("Model call failed: {}", err))
    }
}
