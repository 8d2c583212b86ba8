//! Match retrieval. Scores and labels come from the backend and are only
//! displayed here.

use super::client::{ApiClient, Authed};
use super::error::ApiError;
use super::likes::Like;
use crate::session::string_or_number;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoommateMatch {
    #[serde(deserialize_with = "string_or_number")]
    pub candidate_id: String,
    pub score: f64,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub risk_flags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    /// Client-side decoration; may lag behind the server until reconciled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_liked: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HousingMatch {
    #[serde(deserialize_with = "string_or_number")]
    pub logement_id: String,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub concerns: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse<M> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_model_response: Option<String>,
    #[serde(default)]
    pub matches: Vec<M>,
}

pub type RoommateMatchResponse = MatchResponse<RoommateMatch>;
pub type HousingMatchResponse = MatchResponse<HousingMatch>;

pub struct MatchesApi<'a>(Authed<'a>);

impl ApiClient {
    pub fn matches<'a>(&'a self, token: Option<&'a str>) -> MatchesApi<'a> {
        MatchesApi(self.authed(token))
    }
}

impl MatchesApi<'_> {
    pub fn roommates(&self, user_id: &str) -> Result<RoommateMatchResponse, ApiError> {
        self.0.get(&format!("/api/match/roommates/{}", user_id))
    }

    pub fn housing(&self, user_id: &str) -> Result<HousingMatchResponse, ApiError> {
        self.0.get(&format!("/api/match/housing/{}", user_id))
    }
}

/// Overwrite `is_liked` on every candidate from the user's like list.
/// Candidates whose id is not numeric are never considered liked.
pub fn decorate_likes(matches: &mut [RoommateMatch], likes: &[Like]) {
    let liked: HashSet<i64> = likes.iter().map(|l| l.liked_user_id).collect();
    for m in matches {
        let is_liked = m
            .candidate_id
            .trim()
            .parse::<i64>()
            .is_ok_and(|id| liked.contains(&id));
        m.is_liked = Some(is_liked);
    }
}
