//! HTTP transport seam. The client builds an [`HttpRequest`], a transport
//! performs it once and reports whatever status came back.

use super::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

#[cfg(test)]
impl HttpRequest {
    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.to_lowercase().contains("application/json"))
    }
}

/// Performs a single HTTP exchange. Non-2xx statuses are responses, not
/// errors; only failures to get any response are `Err`.
pub trait HttpTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self {
            agent: ureq::Agent::new(),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut req = self.agent.request(request.method.as_str(), &request.url);
        for (name, value) in &request.headers {
            req = req.set(name, value);
        }

        let resp = match &request.body {
            Some(body) => req.send_string(body),
            None => req.call(),
        };

        match resp {
            Ok(r) => {
                let status = r.status();
                let content_type = r.header("content-type").map(str::to_string);
                let body = r
                    .into_string()
                    .map_err(|e| ApiError::Transport(format!("failed to read body: {}", e)))?;
                Ok(HttpResponse {
                    status,
                    content_type,
                    body,
                })
            }
            Err(ureq::Error::Status(code, r)) => {
                let content_type = r.header("content-type").map(str::to_string);
                // An unreadable error body degrades to the generic status message
                let body = r.into_string().unwrap_or_default();
                Ok(HttpResponse {
                    status: code,
                    content_type,
                    body,
                })
            }
            Err(e) => Err(ApiError::Transport(e.to_string())),
        }
    }
}
