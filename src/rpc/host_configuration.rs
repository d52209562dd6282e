use crate::utils::basic_auth_encoding;
use std::fmt;
use url::Url;

/// Describes the RPC endpoint and the optional basic-auth credentials used to
/// reach it.
///
/// The configuration is immutable once handed to an `RpcClient`.
#[derive(Clone, PartialEq, Eq)]
pub struct HostConfiguration {
    host: Url,
    username: Option<String>,
    password: Option<String>,
}

impl HostConfiguration {
    pub fn new(host: Url) -> Self {
        Self {
            host,
            username: None,
            password: None,
        }
    }

    pub fn with_credentials(
        self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.with_username(username).with_password(password)
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn host(&self) -> &Url {
        &self.host
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Returns `true` if either the username or the password is non-empty.
    ///
    /// When only one half is configured the other is sent as an empty string.
    pub fn has_credentials(&self) -> bool {
        let non_empty = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());
        non_empty(&self.username) || non_empty(&self.password)
    }

    /// The `Authorization` header value for this host, if credentials are configured.
    pub fn basic_auth_header(&self) -> Option<String> {
        if !self.has_credentials() {
            return None;
        }

        Some(basic_auth_encoding(
            self.username().unwrap_or_default(),
            self.password().unwrap_or_default(),
        ))
    }
}

impl fmt::Debug for HostConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostConfiguration")
            .field("host", &self.host.as_str())
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
