//! Like submission and lookup. The backend keys likes by numeric user id,
//! so ids are validated before anything is sent.

use super::client::{ApiClient, Authed};
use super::error::ApiError;
use super::transport::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: i64,
    pub user_id: i64,
    pub liked_user_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeCheck {
    pub has_liked: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LikeRequest {
    user_id: i64,
    liked_user_id: i64,
}

fn numeric_id(id: &str) -> Result<i64, ApiError> {
    id.trim()
        .parse()
        .map_err(|_| ApiError::InvalidId(id.to_string()))
}

pub struct LikesApi<'a>(Authed<'a>);

impl ApiClient {
    pub fn likes<'a>(&'a self, token: Option<&'a str>) -> LikesApi<'a> {
        LikesApi(self.authed(token))
    }
}

impl LikesApi<'_> {
    pub fn like(&self, user_id: &str, liked_user_id: &str) -> Result<Like, ApiError> {
        let body = LikeRequest {
            user_id: numeric_id(user_id)?,
            liked_user_id: numeric_id(liked_user_id)?,
        };
        self.0.send(Method::Post, "/api/likes", &body)
    }

    pub fn has_liked(&self, user_id: &str, liked_user_id: &str) -> Result<bool, ApiError> {
        let path = format!(
            "/api/likes/check?userId={}&likedUserId={}",
            numeric_id(user_id)?,
            numeric_id(liked_user_id)?
        );
        let check: LikeCheck = self.0.get(&path)?;
        Ok(check.has_liked)
    }

    pub fn user_likes(&self, user_id: &str) -> Result<Vec<Like>, ApiError> {
        self.0
            .get(&format!("/api/likes/user/{}", numeric_id(user_id)?))
    }
}
