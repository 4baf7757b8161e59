use std::time::Duration;

use log::{debug, warn};
use parking_lot::Mutex;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};

pub const DEFAULT_USER_AGENT: &str = concat!("globodns-client/", env!("CARGO_PKG_VERSION"));
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

const JSON: &str = "application/json";

/// Credentials and identity sent with every request.
struct Session {
    token: Option<String>,
    user_agent: String,
}

/// HTTP client for the GloboDNS API.
///
/// The token and user agent live behind a single mutex, so one client can be
/// shared between tasks and reconfigured through `&self`.
pub struct GloboDnsClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Option<Duration>,
    session: Mutex<Session>,
}

impl GloboDnsClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    pub fn with_http_client(client: reqwest::Client, base_url: &str) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/');
        if base_url.is_empty() {
            return Err(Error::EmptyBaseUrl);
        }
        Url::parse(base_url)?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            timeout: None,
            session: Mutex::new(Session {
                token: None,
                user_agent: DEFAULT_USER_AGENT.to_string(),
            }),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Self::new(&config.base_url)?;
        if let Some(token) = &config.api_token {
            client.set_token(token.as_str());
        }
        if let Some(user_agent) = &config.user_agent {
            client.set_user_agent(user_agent.as_str());
        }
        Ok(match config.timeout_secs {
            Some(secs) => client.with_timeout(Duration::from_secs(secs)),
            None => client,
        })
    }

    /// Deadline applied to each outbound request, page fetches included.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sets the token sent as `X-Auth-Token`. An empty token disables the header.
    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        self.session.lock().token = (!token.is_empty()).then_some(token);
    }

    pub fn token(&self) -> Option<String> {
        self.session.lock().token.clone()
    }

    pub fn set_user_agent(&self, user_agent: impl Into<String>) {
        self.session.lock().user_agent = user_agent.into();
    }

    pub fn user_agent(&self) -> String {
        self.session.lock().user_agent.clone()
    }

    pub(crate) fn make_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Prepares a request with the standard headers attached.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let bodiless = method == Method::GET || method == Method::HEAD;
        let mut builder = self
            .client
            .request(method, self.make_url(path))
            .header(ACCEPT, JSON);

        if !bodiless {
            builder = builder.header(CONTENT_TYPE, JSON);
        }

        {
            let session = self.session.lock();
            builder = builder.header(USER_AGENT, session.user_agent.as_str());
            if let Some(token) = &session.token {
                builder = builder.header(AUTH_TOKEN_HEADER, token.as_str());
            }
        }

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
    }

    /// Executes the request; anything outside 2xx becomes [`Error::UnexpectedStatus`].
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        debug!("{} {}", method, url);

        let response = self.client.execute(request).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await?;
        warn!("{} {} returned {}", method, url, status);
        Err(Error::UnexpectedStatus {
            status: status.as_u16(),
            body,
        })
    }

    /// Like [`send`](Self::send), then decodes the JSON body into `T`.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let body = self.send(builder).await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
