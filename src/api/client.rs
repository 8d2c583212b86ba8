use super::error::ApiError;
use super::transport::{HttpRequest, HttpTransport, Method, UreqTransport};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Per-request options; the defaults describe a bodiless GET.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_string(body)?);
        Ok(self)
    }
}

/// Successful response body: parsed JSON when the server said so, raw text
/// otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    Json(T),
    Text(String),
}

impl<T> Payload<T> {
    pub fn into_json(self) -> Result<T, ApiError> {
        match self {
            Payload::Json(value) => Ok(value),
            Payload::Text(text) => Err(ApiError::UnexpectedText(text)),
        }
    }
}

/// REST client for the matching backend.
///
/// The client holds no credentials. Callers pass the current token with each
/// call so the header always reflects the live session.
pub struct ApiClient {
    base_url: String,
    transport: Box<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, Box::new(UreqTransport::new()))
    }

    pub fn with_transport(base_url: &str, transport: Box<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Perform one request against `path`.
    ///
    /// `Content-Type: application/json` is sent unless the options override
    /// it, and `Authorization: Bearer <token>` whenever `token` is non-empty.
    pub fn request<T: DeserializeOwned>(
        &self,
        token: Option<&str>,
        path: &str,
        options: RequestOptions,
    ) -> Result<Payload<T>, ApiError> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        for (name, value) in options.headers {
            set_header(&mut headers, name, value);
        }
        let token = token.filter(|t| !t.is_empty());
        if let Some(token) = token {
            set_header(
                &mut headers,
                "Authorization".to_string(),
                format!("Bearer {}", token),
            );
        }

        let request = HttpRequest {
            method: options.method,
            url: self.url(path),
            headers,
            body: options.body,
        };
        tracing::debug!(
            method = request.method.as_str(),
            url = %request.url,
            authorized = token.is_some(),
            "api request"
        );

        let response = self.transport.send(&request)?;
        tracing::debug!(status = response.status, url = %request.url, "api response");

        if !response.is_success() {
            return Err(ApiError::from_status(response.status, &response.body));
        }

        if response.is_json() {
            Ok(Payload::Json(serde_json::from_str(&response.body)?))
        } else {
            Ok(Payload::Text(response.body))
        }
    }

    /// Bind a token for a group of endpoint calls.
    pub fn authed<'a>(&'a self, token: Option<&'a str>) -> Authed<'a> {
        Authed {
            client: self,
            token,
        }
    }
}

fn set_header(headers: &mut Vec<(String, String)>, name: String, value: String) {
    match headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&name)) {
        Some(slot) => *slot = (name, value),
        None => headers.push((name, value)),
    }
}

/// A client paired with the token of the current session
#[derive(Clone, Copy)]
pub struct Authed<'a> {
    client: &'a ApiClient,
    token: Option<&'a str>,
}

impl Authed<'_> {
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.client
            .request(self.token, path, RequestOptions::new(Method::Get))?
            .into_json()
    }

    pub fn send<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let options = RequestOptions::new(method).json(body)?;
        self.client.request(self.token, path, options)?.into_json()
    }

    pub fn raw<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Payload<T>, ApiError> {
        self.client.request(self.token, path, options)
    }
}
