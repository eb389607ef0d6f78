use chrono::NaiveDate;
use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    ApiError, AuthCheckResponse, ClientConfig, CreateMemberRequest, CreateMemberResponse,
    ExcludeEndResponse, GmailAuthUrlResponse, GmailStatusResponse, LeaveMemberRequest,
    ManagerRequest, ManagerResponse, Member, MemberId, MemberStatus, PasswordRequest,
    SettlementRequest, SettlementResponse, StatusUpdateRequest, StatusUpdateResponse,
    SuccessResponse, UpdateMemberRequest, WeekDetail,
};

use crate::services::logging::Logger;

#[derive(Debug, Clone, Copy)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    fn builder(self, url: &str) -> RequestBuilder {
        match self {
            Verb::Get => Request::get(url),
            Verb::Post => Request::post(url),
            Verb::Put => Request::put(url),
            Verb::Delete => Request::delete(url),
        }
    }
}

/// API client for the Corgi Check backend.
///
/// Every call resolves to the decoded response body or an [`ApiError`]
/// carrying the backend's `detail` message when it sent one.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_base_url(config.api_base_url.clone())
    }

    /// Create a client with a custom base URL, e.g. "http://localhost:8000/api"
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ---- status ----

    /// Statuses of all active members for a week, the current week when `None`
    pub async fn get_current_statuses(&self, week_start: Option<NaiveDate>) -> Result<Vec<MemberStatus>, ApiError> {
        let path = match week_start {
            Some(week_start) => format!("/status/current?week_start={}", week_start.format("%Y-%m-%d")),
            None => "/status/current".to_string(),
        };
        self.send(Verb::Get, &path).await
    }

    pub async fn update_status(
        &self,
        member_id: MemberId,
        request: &StatusUpdateRequest,
    ) -> Result<StatusUpdateResponse, ApiError> {
        self.send_json(Verb::Put, &format!("/status/{}", member_id), request).await
    }

    /// Last week of the exclusion run that covers `week_start`
    pub async fn get_exclude_end(
        &self,
        member_id: MemberId,
        week_start: NaiveDate,
    ) -> Result<ExcludeEndResponse, ApiError> {
        let path = format!(
            "/status/{}/exclude-end?week_start={}",
            member_id,
            week_start.format("%Y-%m-%d")
        );
        self.send(Verb::Get, &path).await
    }

    // ---- gmail & settlement ----

    pub async fn get_gmail_status(&self) -> Result<GmailStatusResponse, ApiError> {
        self.send(Verb::Get, "/admin/gmail/status").await
    }

    pub async fn get_gmail_auth_url(&self) -> Result<GmailAuthUrlResponse, ApiError> {
        self.send(Verb::Get, "/admin/gmail/auth-url").await
    }

    pub async fn run_settlement(&self, week_start: NaiveDate) -> Result<SettlementResponse, ApiError> {
        self.send_json(Verb::Post, "/admin/settlement", &SettlementRequest { week_start })
            .await
    }

    pub async fn run_mid_settlement(&self, week_start: NaiveDate) -> Result<SettlementResponse, ApiError> {
        self.send_json(Verb::Post, "/admin/mid-settlement", &SettlementRequest { week_start })
            .await
    }

    // ---- auth & admin ----

    pub async fn check_auth(&self) -> Result<AuthCheckResponse, ApiError> {
        self.send(Verb::Get, "/auth/check").await
    }

    pub async fn login(&self, password: &str) -> Result<SuccessResponse, ApiError> {
        let request = PasswordRequest {
            password: password.to_string(),
        };
        self.send_json(Verb::Post, "/auth/login", &request).await
    }

    pub async fn set_password(&self, password: &str) -> Result<SuccessResponse, ApiError> {
        let request = PasswordRequest {
            password: password.to_string(),
        };
        self.send_json(Verb::Post, "/admin/password", &request).await
    }

    pub async fn get_manager(&self) -> Result<ManagerResponse, ApiError> {
        self.send(Verb::Get, "/admin/manager").await
    }

    pub async fn set_manager(&self, name: &str) -> Result<SuccessResponse, ApiError> {
        let request = ManagerRequest {
            name: name.to_string(),
        };
        self.send_json(Verb::Put, "/admin/manager", &request).await
    }

    // ---- members ----

    pub async fn get_members(&self, include_left: bool) -> Result<Vec<Member>, ApiError> {
        self.send(Verb::Get, &format!("/members?include_left={}", include_left))
            .await
    }

    pub async fn create_member(&self, request: &CreateMemberRequest) -> Result<CreateMemberResponse, ApiError> {
        self.send_json(Verb::Post, "/members", request).await
    }

    pub async fn update_member(
        &self,
        member_id: MemberId,
        request: &UpdateMemberRequest,
    ) -> Result<SuccessResponse, ApiError> {
        self.send_json(Verb::Put, &format!("/members/{}", member_id), request)
            .await
    }

    pub async fn leave_member(
        &self,
        member_id: MemberId,
        request: &LeaveMemberRequest,
    ) -> Result<SuccessResponse, ApiError> {
        self.send_json(Verb::Put, &format!("/members/{}/leave", member_id), request)
            .await
    }

    pub async fn return_member(&self, member_id: MemberId) -> Result<SuccessResponse, ApiError> {
        self.send(Verb::Put, &format!("/members/{}/return", member_id))
            .await
    }

    pub async fn delete_member(&self, member_id: MemberId) -> Result<SuccessResponse, ApiError> {
        self.send(Verb::Delete, &format!("/members/{}", member_id))
            .await
    }

    // ---- history ----

    /// Settled week identifiers, newest first
    pub async fn get_history_weeks(&self) -> Result<Vec<String>, ApiError> {
        self.send(Verb::Get, "/history/weeks").await
    }

    pub async fn get_week_detail(&self, week_label: &str) -> Result<WeekDetail, ApiError> {
        self.send(Verb::Get, &format!("/history/{}", week_label)).await
    }

    async fn send<T: DeserializeOwned>(&self, verb: Verb, path: &str) -> Result<T, ApiError> {
        let response = verb
            .builder(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(verb, path, response).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        verb: Verb,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = verb
            .builder(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(verb, path, response).await
    }

    async fn decode<T: DeserializeOwned>(verb: Verb, path: &str, response: Response) -> Result<T, ApiError> {
        if response.ok() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ApiError::InvalidResponse(e.to_string()));
        }

        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_response(status, &status_text, &body);
        Logger::warn_with_component("api", &format!("{:?} {} failed: {}", verb, path, error));
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_base_url_from_config() {
        let client = ApiClient::new(&ClientConfig::default());
        assert_eq!(client.base_url(), "/api");
        assert_eq!(client.url("/status/current"), "/api/status/current");
    }

    #[wasm_bindgen_test]
    fn test_trailing_slash_is_trimmed() {
        let client = ApiClient::with_base_url("http://localhost:8000/api/".to_string());
        assert_eq!(client.url("/members"), "http://localhost:8000/api/members");
    }
}
