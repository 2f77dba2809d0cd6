// src/store/mod.rs
pub mod identity;
pub mod transport;

use serde_json::Value;
use uuid::Uuid;

use crate::services::extract::extract_assistant_text;
use self::identity::IdProvider;
use self::transport::{ChatTransport, RelayRequest};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
        }
    }
}

/// Client-side owner of one conversation: the draft being typed, the
/// transcript, and the in-flight/error flags. All mutation goes through
/// these methods; the transcript is append-only apart from `clear`.
pub struct ConversationStore<T: ChatTransport> {
    transport: T,
    client_id: String,
    route: Option<String>,
    draft: String,
    transcript: Vec<ChatMessage>,
    is_loading: bool,
    last_error: Option<String>,
}

impl<T: ChatTransport> ConversationStore<T> {
    pub fn new(transport: T, ids: &dyn IdProvider, route: Option<String>) -> Self {
        Self {
            transport,
            client_id: ids.get_or_create(),
            route,
            draft: String::new(),
            transcript: Vec::new(),
            is_loading: false,
            last_error: None,
        }
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Drop the transcript and any recorded error. An in-flight send is not
    /// cancelled; its reply will still be appended when it lands.
    pub fn clear(&mut self) {
        self.transcript.clear();
        self.last_error = None;
    }

    /// Send the current draft through the relay and append the reply.
    ///
    /// A blank draft is a silent no-op. Otherwise exactly one user message is
    /// appended up front and exactly one assistant message after the call
    /// resolves, on the success and the failure path alike, and `is_loading`
    /// always ends up false again.
    pub async fn send(&mut self) {
        let message = self.draft.trim().to_string();
        if message.is_empty() {
            return;
        }

        self.transcript.push(ChatMessage::new(Role::User, message.clone()));
        self.draft.clear();
        self.is_loading = true;
        self.last_error = None;

        let request = RelayRequest {
            chat_id: self.client_id.clone(),
            message,
            route: self.route.clone(),
        };

        match self.transport.send_chat(&request).await {
            Ok(body) => {
                let text = extract_assistant_text(Some(&body));
                self.transcript.push(ChatMessage::new(Role::Assistant, text));
            }
            Err(err) => {
                let upstream_message = err
                    .body
                    .as_ref()
                    .and_then(|body| body.get("error"))
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| {
                        if err.message.is_empty() {
                            "Request failed".to_string()
                        } else {
                            err.message.clone()
                        }
                    });

                self.transcript.push(ChatMessage::new(
                    Role::Assistant,
                    format!("Error: {upstream_message}"),
                ));
                self.last_error = Some(upstream_message);
            }
        }

        self.is_loading = false;
    }
}
