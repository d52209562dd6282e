use super::{
    HeaderSet, HostConfiguration, HttpExecutor, JsonCodec, RequestExecutor, RpcCodec, RpcCommand,
    RpcError, RpcResponse, RpcSessionStore, TypedRpcCommand,
};
use crate::constants::{AUTHORIZATION_HEADER, SESSION_ID_HEADER, STATUS_OK};
use crate::utils::next_tag;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, trace, warn};

/// Executes typed RPC commands against a session-token protected endpoint.
///
/// A non-200 answer is treated as an expired or missing session: the client
/// fetches a fresh token with a bare request and retries the command exactly
/// once. Every other failure is surfaced immediately.
///
/// Headers are assembled per call and handed to the executor by value, so
/// concurrent calls on one client never share transport state.
pub struct RpcClient<E, C = JsonCodec> {
    configuration: Arc<HostConfiguration>,
    request_executor: RequestExecutor<E, C>,
    session_store: RpcSessionStore,
    // Serializes bootstraps so their session store writes cannot interleave.
    bootstrap_lock: Mutex<()>,
}

impl<E> RpcClient<E, JsonCodec>
where
    E: HttpExecutor,
{
    pub fn new(configuration: HostConfiguration, http_executor: E) -> Self {
        Self::with_codec(configuration, http_executor, JsonCodec)
    }
}

impl<E, C> RpcClient<E, C>
where
    E: HttpExecutor,
    C: RpcCodec,
{
    pub fn with_codec(configuration: HostConfiguration, http_executor: E, codec: C) -> Self {
        let configuration = Arc::new(configuration);

        Self {
            request_executor: RequestExecutor::new(configuration.clone(), http_executor, codec),
            configuration,
            session_store: RpcSessionStore::new(),
            bootstrap_lock: Mutex::new(()),
        }
    }

    pub fn host_configuration(&self) -> &HostConfiguration {
        &self.configuration
    }

    pub fn session_store(&self) -> &RpcSessionStore {
        &self.session_store
    }

    /// Snapshot of the headers accumulated by previous session bootstraps.
    pub fn session_headers(&self) -> HeaderSet {
        self.session_store.snapshot()
    }

    /// Executes `command` using exactly the supplied headers.
    ///
    /// If the server rejects the first attempt with an unexpected status, a
    /// session bootstrap runs and the command is retried once with `headers`
    /// merged with the refreshed session headers. A failure of that retry is
    /// wrapped in `RpcError::RetryFailed`.
    pub async fn execute<Cmd>(&self, command: &mut Cmd, headers: &HeaderSet) -> Result<(), RpcError>
    where
        Cmd: RpcCommand,
    {
        match self.execute_once(command, headers.clone()).await {
            Err(RpcError::InvalidResponseStatus { expected, actual }) => {
                trace!(
                    method = command.method(),
                    tag = command.tag(),
                    expected,
                    actual,
                    "Failed to execute command. Refreshing session and trying again"
                );

                self.refresh_session().await?;

                let mut retry_headers = headers.clone();
                retry_headers.extend(self.session_store.snapshot());

                self.execute_once(command, retry_headers)
                    .await
                    .map_err(|e| RpcError::RetryFailed(Box::new(e)))
            }
            result => result,
        }
    }

    /// Executes `command` with the client's stored session headers.
    ///
    /// This is the usual entry point: the first call on a fresh client goes out
    /// without a session token, gets rejected, bootstraps and retries; later
    /// calls reuse the stored token.
    pub async fn execute_with_session<Cmd>(&self, command: &mut Cmd) -> Result<(), RpcError>
    where
        Cmd: RpcCommand,
    {
        let headers = self.session_store.snapshot();
        self.execute(command, &headers).await
    }

    /// Calls `method` with `arguments` and returns the typed response.
    ///
    /// A fresh tag is generated for the call.
    pub async fn call<T, V>(&self, method: &str, arguments: T) -> Result<RpcResponse<V>, RpcError>
    where
        T: Serialize + Clone + Send + Sync,
        V: DeserializeOwned + Send,
    {
        let mut command = TypedRpcCommand::<T, V>::new(method, arguments, next_tag());
        self.execute_with_session(&mut command).await?;

        // A successful execution always delivers a response.
        command.into_response().ok_or(RpcError::MissingResponse)
    }

    /// Obtains a fresh session token from the host and stores it.
    ///
    /// The bare request carries basic auth when credentials are configured,
    /// and the same `Authorization` value is kept in the session store for
    /// later calls. Bootstrap is never retried.
    pub async fn refresh_session(&self) -> Result<(), RpcError> {
        let _guard = self.bootstrap_lock.lock().await;

        let authorization = self.configuration.basic_auth_header();

        let mut headers = HeaderSet::new();
        if let Some(authorization) = &authorization {
            headers.insert(AUTHORIZATION_HEADER.to_string(), authorization.clone());
        }

        let response = self
            .request_executor
            .post_bare(headers)
            .await
            .map_err(RpcError::Bootstrap)?;

        let session_id = response
            .header(SESSION_ID_HEADER)
            .ok_or(RpcError::MissingSessionId {
                header: SESSION_ID_HEADER,
            })?;

        trace!(session_id, "Received session id");
        debug!(status = response.status, "Stored new session id");
        self.session_store.insert(SESSION_ID_HEADER, session_id);

        if let Some(authorization) = authorization {
            self.session_store.insert(AUTHORIZATION_HEADER, authorization);
        }

        Ok(())
    }

    async fn execute_once<Cmd>(&self, command: &mut Cmd, headers: HeaderSet) -> Result<(), RpcError>
    where
        Cmd: RpcCommand,
    {
        let request = command.build_request();
        trace!(method = %request.method, tag = request.tag, "Sending RPC request");

        // Phase one: the envelope is decoded generically because the argument
        // shape is only known through the command.
        let envelope: RpcResponse<Value> = self
            .request_executor
            .execute(&request, headers, STATUS_OK)
            .await?;

        if envelope.tag != command.tag() {
            warn!(
                method = command.method(),
                expected = command.tag(),
                actual = envelope.tag,
                "Invalid response tag"
            );
            return Err(RpcError::TagMismatch {
                expected: command.tag(),
                actual: envelope.tag,
            });
        }

        // Phase two: re-encode the generic arguments and decode them as the
        // command's declared type.
        let RpcResponse {
            result,
            arguments,
            tag,
        } = envelope;
        let arguments = match arguments {
            Value::Null => Value::Object(Map::new()),
            arguments => arguments,
        };
        let codec = self.request_executor.codec();
        let arguments: Cmd::Response = codec.decode(&codec.encode(&arguments)?)?;

        let response = RpcResponse {
            result,
            arguments,
            tag,
        };
        let failure = (!response.is_success()).then(|| response.result.clone());

        command.set_response(response);

        match failure {
            None => Ok(()),
            Some(result) => {
                debug!(method = command.method(), tag, result = %result, "RPC command failed");
                Err(RpcError::CommandFailed {
                    method: command.method().to_string(),
                    tag,
                    result,
                })
            }
        }
    }
}
