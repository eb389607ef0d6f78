use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod error;
pub mod exclusion;
pub mod history;
pub mod roster;
pub mod week;
pub mod window;

pub use error::{ApiError, ReconcileError, WeekError};
pub use exclusion::{CommitAttempt, ExclusionPhase, ExclusionReconciler, MergeOutcome, PendingEdit, RefreshTicket};
pub use week::{WeekId, WeekLocale, WeekOption};
pub use window::{FutureWeeksStore, MemoryFutureWeeksStore, WeekWindowSettings};

/// Member IDs are database row IDs on the backend
pub type MemberId = i64;

/// Weekly attendance status of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    /// Checked in for the week
    Injeung,
    /// Excused for a reason and a span of weeks
    Exclude,
    /// Missed the week and owes a fine
    Fine,
    /// Older records only; not offered when editing
    Penalty,
}

impl AttendanceStatus {
    /// Statuses offered in the status selector
    pub const SELECTABLE: [AttendanceStatus; 3] = [
        AttendanceStatus::Injeung,
        AttendanceStatus::Exclude,
        AttendanceStatus::Fine,
    ];

    /// Wire value, as used in the `status` field
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Injeung => "injeung",
            AttendanceStatus::Exclude => "exclude",
            AttendanceStatus::Fine => "fine",
            AttendanceStatus::Penalty => "penalty",
        }
    }

    /// Parse a wire value coming from a form control
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "injeung" => Some(AttendanceStatus::Injeung),
            "exclude" => Some(AttendanceStatus::Exclude),
            "fine" => Some(AttendanceStatus::Fine),
            "penalty" => Some(AttendanceStatus::Penalty),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Injeung => "인증",
            AttendanceStatus::Exclude => "제외",
            AttendanceStatus::Fine => "벌금",
            AttendanceStatus::Penalty => "벌점",
        }
    }
}

/// Reason a member is excused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExcludeReason {
    Illness,
    Travel,
    Business,
    Injury,
    Surgery,
    /// Free-text reason stored in `exclude_reason_detail`
    Custom,
}

impl ExcludeReason {
    pub const ALL: [ExcludeReason; 6] = [
        ExcludeReason::Illness,
        ExcludeReason::Travel,
        ExcludeReason::Business,
        ExcludeReason::Injury,
        ExcludeReason::Surgery,
        ExcludeReason::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExcludeReason::Illness => "illness",
            ExcludeReason::Travel => "travel",
            ExcludeReason::Business => "business",
            ExcludeReason::Injury => "injury",
            ExcludeReason::Surgery => "surgery",
            ExcludeReason::Custom => "custom",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        ExcludeReason::ALL.into_iter().find(|r| r.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExcludeReason::Illness => "질병",
            ExcludeReason::Travel => "여행",
            ExcludeReason::Business => "출장",
            ExcludeReason::Injury => "부상",
            ExcludeReason::Surgery => "수술",
            ExcludeReason::Custom => "직접쓰기",
        }
    }

    /// Label shown next to a member: the free text for custom reasons
    pub fn display_with_detail(&self, detail: Option<&str>) -> String {
        match (self, detail) {
            (ExcludeReason::Custom, Some(detail)) if !detail.trim().is_empty() => detail.trim().to_string(),
            _ => self.label().to_string(),
        }
    }
}

/// One row of `GET /status/current`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberStatus {
    pub id: MemberId,
    pub name: String,
    /// Birth year as stored by the backend, e.g. "1994"
    pub birth_date: Option<String>,
    pub status: AttendanceStatus,
    pub exclude_reason: Option<ExcludeReason>,
    pub exclude_reason_detail: Option<String>,
    /// Backend week identifier, e.g. "2026-W06"
    pub week_label: String,
    /// Human readable week, e.g. "26년 2월 2일(월) 주"
    pub week_display: String,
    /// Last week of the exclusion, when the backend already knows it
    #[serde(default)]
    pub exclude_end_label: Option<WeekId>,
}

/// Body of `PUT /status/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: AttendanceStatus,
    pub exclude_reason: Option<ExcludeReason>,
    pub exclude_reason_detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consecutive_weeks: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_start: Option<NaiveDate>,
}

/// Updated record returned by `PUT /status/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdateResponse {
    pub status: AttendanceStatus,
    #[serde(default)]
    pub exclude_reason: Option<ExcludeReason>,
    #[serde(default)]
    pub exclude_reason_detail: Option<String>,
    /// Authoritative last week of the exclusion, recomputed by the backend
    #[serde(default)]
    pub exclude_end_label: Option<WeekId>,
}

/// Response of `GET /status/{id}/exclude-end`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcludeEndResponse {
    pub last_week_label: Option<WeekId>,
}

/// Generic `{ "success": true }` acknowledgement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthCheckResponse {
    /// Whether an admin password has been set
    pub exists: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordRequest {
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerResponse {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GmailStatusResponse {
    pub connected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GmailAuthUrlResponse {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `POST /admin/settlement` and `POST /admin/mid-settlement`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementRequest {
    /// Monday of the week to settle
    pub week_start: NaiveDate,
}

/// Settlement result; the backend reports soft failures in `error`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementResponse {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl SettlementResponse {
    /// The summary text, or the backend's error message
    pub fn into_summary(self) -> Result<String, String> {
        match self.error {
            Some(error) if !error.is_empty() => Err(error),
            _ => Ok(self.summary.unwrap_or_default()),
        }
    }
}

/// Member record from `GET /members`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub birth_date: Option<String>,
    pub is_active: bool,
    pub left_date: Option<String>,
    pub left_reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMemberRequest {
    pub name: String,
    pub birth_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMemberResponse {
    pub id: MemberId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateMemberRequest {
    pub name: Option<String>,
    pub birth_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveMemberRequest {
    /// YYYY-MM-DD
    pub left_date: String,
    pub left_reason: String,
}

/// One member's row in a settled week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub name: String,
    pub birth_date: Option<String>,
    pub status: AttendanceStatus,
    pub exclude_reason: Option<ExcludeReason>,
    pub exclude_reason_detail: Option<String>,
}

/// Response of `GET /history/{week_label}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekDetail {
    pub week_label: String,
    pub summary_text: Option<String>,
    pub members: Vec<HistoryEntry>,
}

/// Client-side configuration, passed explicitly to the pieces that need it.
/// Missing fields take their default when deserializing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix for every backend path
    pub api_base_url: String,
    /// Weeks offered before (and including) the current one
    pub past_weeks: u32,
    /// Floor for the persisted number of future weeks
    pub min_future_weeks: u32,
    /// Largest span offered when excluding a member
    pub max_exclude_weeks: u32,
    pub locale: WeekLocale,
    pub message_duration_ms: u32,
    pub toast_duration_ms: u32,
    pub enable_debug_logging: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            past_weeks: 16,
            min_future_weeks: 4,
            max_exclude_weeks: 12,
            locale: WeekLocale::Korean,
            message_duration_ms: 3000,
            toast_duration_ms: 1500,
            enable_debug_logging: false,
        }
    }
}

impl ClientConfig {
    /// Span lengths offered in the exclusion selector
    pub fn exclude_span_choices(&self) -> Vec<u32> {
        (1..=self.max_exclude_weeks.max(1)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_status_deserialize() {
        let json = r#"{
            "id": 7,
            "name": "김용진",
            "birth_date": "1994",
            "status": "exclude",
            "exclude_reason": "custom",
            "exclude_reason_detail": "이사",
            "week_label": "2026-W06",
            "week_display": "26년 2월 2일(월) 주"
        }"#;
        let status: MemberStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.id, 7);
        assert_eq!(status.status, AttendanceStatus::Exclude);
        assert_eq!(status.exclude_reason, Some(ExcludeReason::Custom));
        assert_eq!(status.exclude_end_label, None);
    }

    #[test]
    fn test_member_status_rejects_unknown_status() {
        let json = r#"{"id":1,"name":"a","birth_date":null,"status":"sleeping",
            "exclude_reason":null,"exclude_reason_detail":null,
            "week_label":"2026-W06","week_display":""}"#;
        assert!(serde_json::from_str::<MemberStatus>(json).is_err());
    }

    #[test]
    fn test_status_update_request_serialization() {
        let request = StatusUpdateRequest {
            status: AttendanceStatus::Exclude,
            exclude_reason: Some(ExcludeReason::Travel),
            exclude_reason_detail: None,
            consecutive_weeks: Some(3),
            week_start: NaiveDate::from_ymd_opt(2026, 2, 2),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "status": "exclude",
                "exclude_reason": "travel",
                "exclude_reason_detail": null,
                "consecutive_weeks": 3,
                "week_start": "2026-02-02"
            })
        );

        // Plain status changes send explicit nulls and no span
        let request = StatusUpdateRequest {
            status: AttendanceStatus::Fine,
            exclude_reason: None,
            exclude_reason_detail: None,
            consecutive_weeks: None,
            week_start: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "status": "fine",
                "exclude_reason": null,
                "exclude_reason_detail": null
            })
        );
    }

    #[test]
    fn test_status_update_response_validates_end_label() {
        let ok: StatusUpdateResponse =
            serde_json::from_str(r#"{"status":"exclude","exclude_end_label":"2026-W08"}"#).unwrap();
        assert_eq!(ok.exclude_end_label.map(|w| w.to_string()), Some("2026-W08".to_string()));

        let bad = serde_json::from_str::<StatusUpdateResponse>(
            r#"{"status":"exclude","exclude_end_label":"next month"}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_settlement_response_into_summary() {
        let ok = SettlementResponse {
            summary: Some("집계 기간: ...".to_string()),
            error: None,
        };
        assert_eq!(ok.into_summary(), Ok("집계 기간: ...".to_string()));

        let failed: SettlementResponse = serde_json::from_str(r#"{"error":"Gmail not connected"}"#).unwrap();
        assert_eq!(failed.into_summary(), Err("Gmail not connected".to_string()));
    }

    #[test]
    fn test_status_values_round_trip_through_forms() {
        for status in AttendanceStatus::SELECTABLE {
            assert_eq!(AttendanceStatus::from_value(status.as_str()), Some(status));
        }
        for reason in ExcludeReason::ALL {
            assert_eq!(ExcludeReason::from_value(reason.as_str()), Some(reason));
        }
        assert_eq!(ExcludeReason::from_value(""), None);
    }

    #[test]
    fn test_reason_display_with_detail() {
        assert_eq!(ExcludeReason::Travel.display_with_detail(Some("ignored")), "여행");
        assert_eq!(ExcludeReason::Custom.display_with_detail(Some(" 이사 ")), "이사");
        assert_eq!(ExcludeReason::Custom.display_with_detail(None), "직접쓰기");
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "/api");
        assert_eq!(config.past_weeks, 16);
        assert_eq!(config.min_future_weeks, 4);
        assert_eq!(config.exclude_span_choices().len(), 12);
    }

    #[test]
    fn test_client_config_partial_json() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"api_base_url":"http://localhost:8000/api","locale":"english"}"#).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8000/api");
        assert_eq!(config.locale, WeekLocale::English);
        assert_eq!(config.past_weeks, 16);
        assert!(!config.enable_debug_logging);
    }
}
