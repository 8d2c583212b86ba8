//! Account endpoints: authentication and the user's own profile.

use super::client::{ApiClient, Authed, RequestOptions};
use super::error::ApiError;
use super::transport::Method;
use crate::session::User;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Identity and credential issued by a successful login or registration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

pub struct AuthApi<'a>(Authed<'a>);

pub struct UsersApi<'a>(Authed<'a>);

impl ApiClient {
    pub fn auth<'a>(&'a self, token: Option<&'a str>) -> AuthApi<'a> {
        AuthApi(self.authed(token))
    }

    pub fn users<'a>(&'a self, token: Option<&'a str>) -> UsersApi<'a> {
        UsersApi(self.authed(token))
    }
}

impl AuthApi<'_> {
    pub fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.0.send(Method::Post, "/api/auth/login", credentials)
    }

    pub fn register(&self, registration: &Registration) -> Result<AuthResponse, ApiError> {
        self.0.send(Method::Post, "/api/auth/register", registration)
    }

    /// Any 2xx counts as success, whatever the body.
    pub fn logout(&self) -> Result<(), ApiError> {
        match self
            .0
            .raw::<IgnoredAny>("/api/auth/logout", RequestOptions::new(Method::Post))
        {
            Ok(_) | Err(ApiError::Decode(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }
}

impl UsersApi<'_> {
    pub fn profile(&self) -> Result<User, ApiError> {
        self.0.get("/api/users/profile")
    }

    pub fn update_profile(&self, user: &User) -> Result<User, ApiError> {
        self.0.send(Method::Put, "/api/users/profile", user)
    }
}
