//! Roommate and housing preference endpoints.

use super::client::{ApiClient, Authed};
use super::error::ApiError;
use super::transport::Method;
use serde::{Deserialize, Serialize};

/// What the user wants in a roommate
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoommatePreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pets: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_schedule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Spoken languages; the backend spells the field `langages`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub langages: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoking: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// What the user wants in a place to live
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HousingPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub furnished: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

pub struct PreferencesApi<'a>(Authed<'a>);

impl ApiClient {
    pub fn preferences<'a>(&'a self, token: Option<&'a str>) -> PreferencesApi<'a> {
        PreferencesApi(self.authed(token))
    }
}

fn roommate_path(user_id: &str) -> String {
    format!("/api/preferences/colocataires/{}", user_id)
}

fn housing_path(user_id: &str) -> String {
    format!("/api/preferences/logement/{}", user_id)
}

impl PreferencesApi<'_> {
    pub fn get_roommate(&self, user_id: &str) -> Result<RoommatePreferences, ApiError> {
        self.0.get(&roommate_path(user_id))
    }

    pub fn save_roommate(
        &self,
        user_id: &str,
        prefs: &RoommatePreferences,
    ) -> Result<RoommatePreferences, ApiError> {
        self.0.send(Method::Put, &roommate_path(user_id), prefs)
    }

    pub fn get_housing(&self, user_id: &str) -> Result<HousingPreferences, ApiError> {
        self.0.get(&housing_path(user_id))
    }

    pub fn save_housing(
        &self,
        user_id: &str,
        prefs: &HousingPreferences,
    ) -> Result<HousingPreferences, ApiError> {
        self.0.send(Method::Put, &housing_path(user_id), prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::fake::FakeTransport;

    #[test]
    fn test_get_roommate_preferences() {
        let (t, log) = FakeTransport::new();
        let t = t.json(
            200,
            r#"{"id":3,"pets":true,"sleepSchedule":"early","socialLevel":4,"langages":"fr,ar"}"#,
        );
        let api = ApiClient::with_transport("http://api.test", Box::new(t));

        let prefs = api.preferences(Some("tok")).get_roommate("42").unwrap();
        assert_eq!(prefs.id, Some(3));
        assert_eq!(prefs.sleep_schedule.as_deref(), Some("early"));
        assert_eq!(prefs.social_level, Some(4));
        assert!(prefs.smoking.is_none());

        let req = &log.borrow()[0];
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.url, "http://api.test/api/preferences/colocataires/42");
        assert!(req.body.is_none());
    }

    #[test]
    fn test_save_housing_preferences_puts_camel_case_body() {
        let (t, log) = FakeTransport::new();
        let t = t.json(200, r#"{"id":9,"budget":550.0,"rooms":2}"#);
        let api = ApiClient::with_transport("http://api.test", Box::new(t));

        let prefs = HousingPreferences {
            budget: Some(550.0),
            rooms: Some(2),
            ..HousingPreferences::default()
        };
        let saved = api.preferences(None).save_housing("42", &prefs).unwrap();
        assert_eq!(saved.id, Some(9));

        let req = &log.borrow()[0];
        assert_eq!(req.method, Method::Put);
        assert_eq!(req.url, "http://api.test/api/preferences/logement/42");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "budget": 550.0, "rooms": 2 }));
    }

    #[test]
    fn test_save_roommate_preferences_path() {
        let (t, log) = FakeTransport::new();
        let api = ApiClient::with_transport("http://api.test", Box::new(t.json(200, "{}")));
        let prefs = RoommatePreferences {
            work_style: Some("remote".to_string()),
            ..RoommatePreferences::default()
        };
        api.preferences(None).save_roommate("7", &prefs).unwrap();
        let req = &log.borrow()[0];
        assert_eq!(req.url, "http://api.test/api/preferences/colocataires/7");
        assert!(req.body.as_deref().unwrap().contains("\"workStyle\":\"remote\""));
    }
}
