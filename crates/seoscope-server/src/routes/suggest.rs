//! Streaming AI suggestion route (SSE).

use std::convert::Infallible;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::response::sse::{Event, Sse};
use axum::routing::post;
use axum::{Json, Router};
use futures::Stream;
use serde::Deserialize;
use tokio_stream::StreamExt;

use seoscope_llm::prompt::{enhancement_prompt, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use seoscope_llm::providers::{self, StreamChunk};
use seoscope_llm::types::StreamEvent;

use crate::state::AppState;

type SseStream = Pin<Box<dyn Stream<Item = Result<Event, Infallible>> + Send>>;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/suggest/stream", post(stream_suggestion))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRequest {
    pub text: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub temperature: Option<f64>,
    #[serde(rename = "maxTokens")]
    pub max_tokens: Option<usize>,
}

async fn stream_suggestion(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SuggestRequest>,
) -> Sse<SseStream> {
    let start = Instant::now();

    let resolved = {
        let config = state.llm_config.read();
        config.resolve()
    };

    let (provider, model, api_key) = match resolved {
        Some(r) => r,
        None => {
            let error_stream: SseStream = Box::pin(async_stream::stream! {
                let event = StreamEvent::Error {
                    error: "No LLM provider configured".into(),
                };
                yield Ok::<_, Infallible>(Event::default().data(
                    serde_json::to_string(&event).unwrap()
                ));
            });
            return Sse::new(error_stream);
        }
    };

    let prompt = enhancement_prompt(&req.text, &req.keywords);
    let temperature = req.temperature.unwrap_or(DEFAULT_TEMPERATURE);
    let max_tokens = req.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS);

    let llm_stream = providers::stream_completion(
        &state.http,
        provider,
        &prompt,
        &model,
        &api_key,
        temperature,
        max_tokens,
    );

    let model_clone = model.clone();

    let sse_stream: SseStream = Box::pin(async_stream::stream! {
        tokio::pin!(llm_stream);
        while let Some(chunk) = llm_stream.next().await {
            match chunk {
                StreamChunk::Token(text) => {
                    let event = StreamEvent::Token { content: text };
                    yield Ok::<_, Infallible>(Event::default().data(
                        serde_json::to_string(&event).unwrap()
                    ));
                }
                StreamChunk::Done { tokens_used } => {
                    let duration = start.elapsed().as_millis() as u64;
                    let event = StreamEvent::Done {
                        model: model_clone.clone(),
                        tokens_used,
                        duration,
                    };
                    yield Ok(Event::default().data(
                        serde_json::to_string(&event).unwrap()
                    ));
                    // Final [DONE] marker
                    yield Ok(Event::default().data("[DONE]".to_string()));
                    return;
                }
                StreamChunk::Error(e) => {
                    let event = StreamEvent::Error { error: e };
                    yield Ok(Event::default().data(
                        serde_json::to_string(&event).unwrap()
                    ));
                    return;
                }
            }
        }
    });

    Sse::new(sse_stream)
}
