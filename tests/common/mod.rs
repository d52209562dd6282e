#![allow(dead_code)] // Not every test binary uses every helper.

use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use transmission_rpc::constants::SESSION_ID_HEADER;
use transmission_rpc::rpc::{
    HeaderSet, HostConfiguration, HttpExecutor, HttpRequest, HttpResponse, TransportError,
};
use url::Url;

// --- Test Setup: Mock Implementations ---

/// A scripted reply handed out by `MockHttpExecutor`, one per request.
pub enum ScriptedReply {
    /// Returns the given response verbatim.
    Response(HttpResponse),
    /// Answers with status 200 and an envelope echoing the request's tag.
    EchoTag { result: String, arguments: Value },
    /// Fails the request at the transport level.
    TransportFailure(String),
}

/// A mock transport that replays scripted replies in order and records every
/// request it receives.
#[derive(Clone, Default)]
pub struct MockHttpExecutor {
    replies: Arc<Mutex<VecDeque<ScriptedReply>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockHttpExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, reply: ScriptedReply) -> &Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn push_json(&self, status: u16, body: Value) -> &Self {
        self.push(ScriptedReply::Response(HttpResponse {
            status,
            headers: HeaderSet::new(),
            body: serde_json::to_vec(&body).unwrap(),
        }))
    }

    pub fn push_raw(&self, status: u16, body: &[u8]) -> &Self {
        self.push(ScriptedReply::Response(HttpResponse {
            status,
            headers: HeaderSet::new(),
            body: body.to_vec(),
        }))
    }

    /// The daemon's answer to a request with a missing or stale session id.
    pub fn push_conflict(&self) -> &Self {
        self.push_raw(409, b"<h1>409: Conflict</h1>")
    }

    /// A bootstrap answer carrying `session_id` in the session header.
    pub fn push_session(&self, session_id: &str) -> &Self {
        let mut headers = HeaderSet::new();
        headers.insert(SESSION_ID_HEADER.to_string(), session_id.to_string());
        self.push(ScriptedReply::Response(HttpResponse {
            status: 409,
            headers,
            body: b"<h1>409: Conflict</h1>".to_vec(),
        }))
    }

    pub fn push_echo(&self, result: &str, arguments: Value) -> &Self {
        self.push(ScriptedReply::EchoTag {
            result: result.to_string(),
            arguments,
        })
    }

    pub fn push_transport_failure(&self, message: &str) -> &Self {
        self.push(ScriptedReply::TransportFailure(message.to_string()))
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests with an empty body, i.e. session bootstraps.
    pub fn bootstrap_requests(&self) -> Vec<HttpRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.body.is_empty())
            .collect()
    }

    /// Requests carrying an RPC envelope.
    pub fn rpc_requests(&self) -> Vec<HttpRequest> {
        self.requests()
            .into_iter()
            .filter(|request| !request.body.is_empty())
            .collect()
    }

    pub fn remaining_replies(&self) -> usize {
        self.replies.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl HttpExecutor for MockHttpExecutor {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());

        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(ScriptedReply::Response(response)) => Ok(response),
            Some(ScriptedReply::EchoTag { result, arguments }) => {
                let envelope: Value = serde_json::from_slice(&request.body).unwrap();
                let body = json!({
                    "result": result,
                    "arguments": arguments,
                    "tag": envelope["tag"],
                });
                Ok(HttpResponse {
                    status: 200,
                    headers: HeaderSet::new(),
                    body: serde_json::to_vec(&body).unwrap(),
                })
            }
            Some(ScriptedReply::TransportFailure(message)) => Err(TransportError::with_source(
                message,
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
            )),
            None => Err(TransportError::new("no scripted reply left")),
        }
    }
}

pub fn test_host() -> HostConfiguration {
    HostConfiguration::new(Url::parse("http://127.0.0.1:9091/transmission/rpc").unwrap())
}

/// Decodes the JSON envelope a request carried.
pub fn request_envelope(request: &HttpRequest) -> Value {
    serde_json::from_slice(&request.body).unwrap()
}
