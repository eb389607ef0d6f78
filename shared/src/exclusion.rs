//! Exclusion state reconciliation.
//!
//! The status page juggles three sources of truth for a member's exclusion:
//! the last `/status/current` snapshot, a reason the user has picked but not
//! yet committed, and the record the backend returns after `PUT /status/{id}`.
//! [`ExclusionReconciler`] owns that bookkeeping.
//!
//! Per member it tracks an [`ExclusionPhase`]:
//!
//! ```text
//!   Idle ──choose_reason──▶ ReasonChosen ──begin_commit──▶ Committing
//!    ▲                                                        │
//!    └──────────── complete_commit / fail_commit ◀────────────┘
//! ```
//!
//! Only server-confirmed end weeks are ever written to the end-week map, so a
//! failed request can never leave a guessed value behind.

use std::collections::HashMap;

use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::error::{ApiError, ReconcileError};
use crate::week::{monday_to_display_label, WeekId, WeekLocale};
use crate::{
    AttendanceStatus, ExcludeEndResponse, ExcludeReason, MemberId, MemberStatus, StatusUpdateRequest,
    StatusUpdateResponse,
};

/// Reason staged locally before the span length is chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEdit {
    pub reason: ExcludeReason,
    /// Free text, only kept for custom reasons
    pub detail: Option<String>,
}

impl PendingEdit {
    pub fn new(reason: ExcludeReason, detail: Option<String>) -> Self {
        let detail = match reason {
            ExcludeReason::Custom => detail
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            _ => None,
        };
        Self { reason, detail }
    }
}

/// An exclusion request that has been sent and not yet answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitAttempt {
    pub consecutive_weeks: u32,
    pub week_start: NaiveDate,
    pub reason: ExcludeReason,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExclusionPhase {
    #[default]
    Idle,
    ReasonChosen(PendingEdit),
    Committing(CommitAttempt),
}

static IDLE: ExclusionPhase = ExclusionPhase::Idle;

/// Tag for a full-list refresh, used to drop responses that arrive after the
/// user has already asked for another week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    seq: u64,
    week_start: Option<NaiveDate>,
}

impl RefreshTicket {
    pub fn week_start(&self) -> Option<NaiveDate> {
        self.week_start
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The snapshot was merged. Excluded members whose end week the backend
    /// did not include are listed so the caller can ask `/exclude-end`.
    Applied { needs_lookup: Vec<MemberId> },
    /// A newer refresh has been issued since this one
    Stale,
}

/// Member → last known exclusion week, plus per-member edit phases
#[derive(Debug, Clone, Default)]
pub struct ExclusionReconciler {
    end_weeks: HashMap<MemberId, WeekId>,
    phases: HashMap<MemberId, ExclusionPhase>,
    refresh_seq: u64,
    viewed_week: Option<NaiveDate>,
    locale: WeekLocale,
}

impl ExclusionReconciler {
    pub fn new(locale: WeekLocale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    pub fn phase(&self, member: MemberId) -> &ExclusionPhase {
        self.phases.get(&member).unwrap_or(&IDLE)
    }

    pub fn pending(&self, member: MemberId) -> Option<&PendingEdit> {
        match self.phase(member) {
            ExclusionPhase::ReasonChosen(edit) => Some(edit),
            _ => None,
        }
    }

    pub fn is_committing(&self, member: MemberId) -> bool {
        matches!(self.phase(member), ExclusionPhase::Committing(_))
    }

    pub fn end_week(&self, member: MemberId) -> Option<WeekId> {
        self.end_weeks.get(&member).copied()
    }

    /// "3월 2일(월) 주까지" style label for the member's last excluded week
    pub fn end_week_display(&self, member: MemberId) -> Option<String> {
        self.end_week(member).map(|week| end_week_label(week, self.locale))
    }

    /// Stage a reason picked in the selector. Nothing is sent yet.
    ///
    /// Returns `false` while an update for the member is in flight.
    pub fn choose_reason(&mut self, member: MemberId, reason: ExcludeReason, detail: Option<String>) -> bool {
        if self.is_committing(member) {
            warn!("⏳ EXCLUSION: reason for member {} ignored, update in flight", member);
            return false;
        }
        let edit = PendingEdit::new(reason, detail);
        debug!("📝 EXCLUSION: member {} staged {:?}", member, edit);
        self.phases.insert(member, ExclusionPhase::ReasonChosen(edit));
        true
    }

    /// Drop a staged reason without sending anything
    pub fn discard_pending(&mut self, member: MemberId) {
        if matches!(self.phase(member), ExclusionPhase::ReasonChosen(_)) {
            self.phases.remove(&member);
        }
    }

    /// Build the exclusion request fired by a span-length selection.
    ///
    /// The staged reason wins; without one the reason from the last snapshot
    /// is reused. The staged edit is consumed here whatever the request's
    /// outcome turns out to be.
    pub fn begin_commit(
        &mut self,
        member: &MemberStatus,
        consecutive_weeks: u32,
        week_start: NaiveDate,
    ) -> Result<StatusUpdateRequest, ReconcileError> {
        if consecutive_weeks == 0 {
            return Err(ReconcileError::InvalidSpan);
        }

        let staged = match self.phase(member.id) {
            ExclusionPhase::Committing(_) => return Err(ReconcileError::CommitInFlight),
            ExclusionPhase::ReasonChosen(edit) => Some(edit.clone()),
            ExclusionPhase::Idle => None,
        };
        let edit = staged
            .or_else(|| {
                member
                    .exclude_reason
                    .map(|reason| PendingEdit::new(reason, member.exclude_reason_detail.clone()))
            })
            .ok_or(ReconcileError::MissingReason)?;

        let attempt = CommitAttempt {
            consecutive_weeks,
            week_start,
            reason: edit.reason,
            detail: edit.detail,
        };
        info!(
            "📤 EXCLUSION: member {} excluding {} week(s) from {} ({})",
            member.id,
            consecutive_weeks,
            week_start,
            attempt.reason.as_str()
        );

        let request = StatusUpdateRequest {
            status: AttendanceStatus::Exclude,
            exclude_reason: Some(attempt.reason),
            exclude_reason_detail: attempt.detail.clone(),
            consecutive_weeks: Some(consecutive_weeks),
            week_start: Some(week_start),
        };
        self.phases.insert(member.id, ExclusionPhase::Committing(attempt));
        Ok(request)
    }

    /// Apply the backend's answer to an exclusion request and return the
    /// confirmation shown to the user.
    pub fn complete_commit(&mut self, member: MemberId, name: &str, response: &StatusUpdateResponse) -> String {
        let attempt = match self.phases.remove(&member) {
            Some(ExclusionPhase::Committing(attempt)) => Some(attempt),
            _ => None,
        };
        self.store_end_week(member, response.exclude_end_label);

        let reason = attempt
            .as_ref()
            .map(|a| a.reason.display_with_detail(a.detail.as_deref()))
            .or_else(|| {
                response
                    .exclude_reason
                    .map(|r| r.display_with_detail(response.exclude_reason_detail.as_deref()))
            })
            .unwrap_or_else(|| AttendanceStatus::Exclude.label().to_string());

        let mut message = match attempt {
            Some(attempt) => format!("{} {}주 제외 ({})", name, attempt.consecutive_weeks, reason),
            None => format!("{} 제외 ({})", name, reason),
        };
        if let Some(end) = response.exclude_end_label {
            message.push_str(&format!(" · {}", end_week_label(end, self.locale)));
        }
        info!("✅ EXCLUSION: {}", message);
        message
    }

    /// Forget the in-flight attempt after a failed request and return the
    /// error shown to the user. The end-week map is left as it was.
    pub fn fail_commit(&mut self, member: MemberId, name: &str, error: &ApiError) -> String {
        self.phases.remove(&member);
        warn!("❌ EXCLUSION: update for member {} failed: {}", member, error);
        format!("{} 상태 변경 실패: {}", name, error.user_message())
    }

    /// Request for a plain status change from the status selector.
    ///
    /// Leaving `exclude` clears reason and detail; any staged reason is
    /// dropped either way. `week_start` targets the week on screen.
    pub fn status_change_request(
        &mut self,
        member: &MemberStatus,
        status: AttendanceStatus,
        week_start: Option<NaiveDate>,
    ) -> StatusUpdateRequest {
        self.discard_pending(member.id);
        let (exclude_reason, exclude_reason_detail) = if status == AttendanceStatus::Exclude {
            (member.exclude_reason, member.exclude_reason_detail.clone())
        } else {
            (None, None)
        };
        StatusUpdateRequest {
            status,
            exclude_reason,
            exclude_reason_detail,
            consecutive_weeks: None,
            week_start,
        }
    }

    /// Apply the backend's answer to a plain status change
    pub fn complete_status_change(&mut self, member: MemberId, response: &StatusUpdateResponse) {
        if response.status == AttendanceStatus::Exclude {
            if let Some(end) = response.exclude_end_label {
                self.end_weeks.insert(member, end);
            }
        } else if self.end_weeks.remove(&member).is_some() {
            debug!("🧹 EXCLUSION: member {} no longer excluded, end week cleared", member);
        }
    }

    /// Record the week now on screen
    pub fn view_week(&mut self, week_start: NaiveDate) {
        self.viewed_week = Some(week_start);
    }

    /// Week to reload once a status update answers.
    ///
    /// The request carried `requested`, but the selector may have moved on
    /// while it was in flight. The week on screen wins.
    pub fn refresh_target(&self, requested: NaiveDate) -> NaiveDate {
        self.viewed_week.unwrap_or(requested)
    }

    /// Tag a new full-list refresh. Older tickets become stale.
    pub fn begin_refresh(&mut self, week_start: Option<NaiveDate>) -> RefreshTicket {
        self.refresh_seq += 1;
        if week_start.is_some() {
            self.viewed_week = week_start;
        }
        RefreshTicket {
            seq: self.refresh_seq,
            week_start,
        }
    }

    /// Whether no refresh has been issued since `ticket`
    pub fn is_current(&self, ticket: &RefreshTicket) -> bool {
        ticket.seq == self.refresh_seq
    }

    /// Merge a `/status/current` snapshot fetched under `ticket`
    pub fn merge_refresh(&mut self, ticket: &RefreshTicket, statuses: &[MemberStatus]) -> MergeOutcome {
        if !self.is_current(ticket) {
            debug!(
                "🗑️ EXCLUSION: dropping refresh #{} for {:?}, #{} is current",
                ticket.seq, ticket.week_start, self.refresh_seq
            );
            return MergeOutcome::Stale;
        }
        MergeOutcome::Applied {
            needs_lookup: self.merge(statuses),
        }
    }

    /// Merge a snapshot into the end-week map.
    ///
    /// Members reported as excluded overwrite their entry. Everyone else keeps
    /// whatever an earlier snapshot recorded: a member excluded in a later
    /// week is not excluded in the week on screen, and the page still shows
    /// how long the exclusion runs. Merging the same snapshot twice yields
    /// the same map.
    pub fn merge(&mut self, statuses: &[MemberStatus]) -> Vec<MemberId> {
        let mut needs_lookup = Vec::new();
        for status in statuses.iter().filter(|s| s.status == AttendanceStatus::Exclude) {
            match status.exclude_end_label {
                Some(end) => {
                    self.end_weeks.insert(status.id, end);
                }
                None => needs_lookup.push(status.id),
            }
        }
        debug!(
            "🔀 EXCLUSION: merged {} statuses, {} end weeks known, {} to look up",
            statuses.len(),
            self.end_weeks.len(),
            needs_lookup.len()
        );
        needs_lookup
    }

    /// Store the answer of `GET /status/{id}/exclude-end`
    pub fn apply_exclude_end(&mut self, member: MemberId, response: &ExcludeEndResponse) {
        if let Some(end) = response.last_week_label {
            self.end_weeks.insert(member, end);
        }
    }

    fn store_end_week(&mut self, member: MemberId, end: Option<WeekId>) {
        match end {
            Some(end) => {
                self.end_weeks.insert(member, end);
            }
            None => {
                self.end_weeks.remove(&member);
            }
        }
    }
}

fn end_week_label(week: WeekId, locale: WeekLocale) -> String {
    let label = monday_to_display_label(week.monday(), locale);
    match locale {
        WeekLocale::Korean => format!("{} 주까지", label),
        WeekLocale::English => format!("through week of {}", label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week(id: &str) -> WeekId {
        id.parse().unwrap()
    }

    fn member(id: MemberId, status: AttendanceStatus) -> MemberStatus {
        MemberStatus {
            id,
            name: format!("member{}", id),
            birth_date: Some("1994".to_string()),
            status,
            exclude_reason: None,
            exclude_reason_detail: None,
            week_label: "2026-W05".to_string(),
            week_display: String::new(),
            exclude_end_label: None,
        }
    }

    fn excluded(id: MemberId, end: &str) -> MemberStatus {
        MemberStatus {
            exclude_reason: Some(ExcludeReason::Travel),
            exclude_end_label: Some(week(end)),
            ..member(id, AttendanceStatus::Exclude)
        }
    }

    fn exclude_response(end: Option<&str>) -> StatusUpdateResponse {
        StatusUpdateResponse {
            status: AttendanceStatus::Exclude,
            exclude_reason: Some(ExcludeReason::Injury),
            exclude_reason_detail: None,
            exclude_end_label: end.map(week),
        }
    }

    #[test]
    fn test_retains_end_week_across_weeks() {
        let mut reconciler = ExclusionReconciler::new(WeekLocale::Korean);

        let ticket = reconciler.begin_refresh(NaiveDate::from_ymd_opt(2026, 1, 26));
        let outcome = reconciler.merge_refresh(&ticket, &[excluded(1, "2026-W10"), member(2, AttendanceStatus::Fine)]);
        assert_eq!(outcome, MergeOutcome::Applied { needs_lookup: vec![] });
        assert_eq!(reconciler.end_week(1), Some(week("2026-W10")));

        // Viewing W6, member 1 checked in that week
        let ticket = reconciler.begin_refresh(NaiveDate::from_ymd_opt(2026, 2, 2));
        reconciler.merge_refresh(&ticket, &[member(1, AttendanceStatus::Injeung), member(2, AttendanceStatus::Fine)]);
        assert_eq!(reconciler.end_week(1), Some(week("2026-W10")));
        assert_eq!(reconciler.end_week(2), None);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let snapshot = vec![
            excluded(1, "2026-W10"),
            member(2, AttendanceStatus::Exclude),
            member(3, AttendanceStatus::Injeung),
        ];
        let mut reconciler = ExclusionReconciler::new(WeekLocale::Korean);
        let first = reconciler.merge(&snapshot);
        let after_first = reconciler.end_weeks.clone();
        let second = reconciler.merge(&snapshot);

        assert_eq!(first, vec![2]);
        assert_eq!(first, second);
        assert_eq!(after_first, reconciler.end_weeks);
    }

    #[test]
    fn test_fresh_snapshot_overwrites_excluded_members() {
        let mut reconciler = ExclusionReconciler::new(WeekLocale::Korean);
        reconciler.merge(&[excluded(1, "2026-W10")]);
        reconciler.merge(&[excluded(1, "2026-W08")]);
        assert_eq!(reconciler.end_week(1), Some(week("2026-W08")));
    }

    #[test]
    fn test_stale_refresh_is_dropped() {
        let mut reconciler = ExclusionReconciler::new(WeekLocale::Korean);
        let old = reconciler.begin_refresh(NaiveDate::from_ymd_opt(2026, 1, 26));
        let current = reconciler.begin_refresh(NaiveDate::from_ymd_opt(2026, 2, 2));

        assert_eq!(reconciler.merge_refresh(&old, &[excluded(1, "2026-W10")]), MergeOutcome::Stale);
        assert_eq!(reconciler.end_week(1), None);

        assert!(matches!(
            reconciler.merge_refresh(&current, &[excluded(1, "2026-W09")]),
            MergeOutcome::Applied { .. }
        ));
        assert_eq!(reconciler.end_week(1), Some(week("2026-W09")));
        assert_eq!(current.week_start(), NaiveDate::from_ymd_opt(2026, 2, 2));
    }

    #[test]
    fn test_commit_replaces_guess_with_server_value() {
        let mut reconciler = ExclusionReconciler::new(WeekLocale::Korean);
        let start = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
        let m = excluded(1, "2026-W06");
        reconciler.merge(&[m.clone()]);

        assert!(reconciler.choose_reason(1, ExcludeReason::Injury, Some("ignored".to_string())));
        assert_eq!(
            reconciler.pending(1),
            Some(&PendingEdit {
                reason: ExcludeReason::Injury,
                detail: None
            })
        );

        let request = reconciler.begin_commit(&m, 3, start).unwrap();
        assert_eq!(request.status, AttendanceStatus::Exclude);
        assert_eq!(request.exclude_reason, Some(ExcludeReason::Injury));
        assert_eq!(request.consecutive_weeks, Some(3));
        assert_eq!(request.week_start, Some(start));
        assert_eq!(reconciler.pending(1), None);
        assert!(reconciler.is_committing(1));
        // Nothing optimistic is written while the request is in flight
        assert_eq!(reconciler.end_week(1), Some(week("2026-W06")));

        let message = reconciler.complete_commit(1, "장영범", &exclude_response(Some("2026-W08")));
        assert_eq!(reconciler.end_week(1), Some(week("2026-W08")));
        assert_eq!(reconciler.phase(1), &ExclusionPhase::Idle);
        assert_eq!(message, "장영범 3주 제외 (부상) · 2월 16일(월) 주까지");
    }

    #[test]
    fn test_commit_without_staged_reason_uses_snapshot() {
        let mut reconciler = ExclusionReconciler::new(WeekLocale::Korean);
        let start = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
        let m = MemberStatus {
            exclude_reason: Some(ExcludeReason::Custom),
            exclude_reason_detail: Some("이사".to_string()),
            ..member(4, AttendanceStatus::Exclude)
        };

        let request = reconciler.begin_commit(&m, 2, start).unwrap();
        assert_eq!(request.exclude_reason, Some(ExcludeReason::Custom));
        assert_eq!(request.exclude_reason_detail, Some("이사".to_string()));
    }

    #[test]
    fn test_commit_requires_reason_and_span() {
        let mut reconciler = ExclusionReconciler::new(WeekLocale::Korean);
        let start = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
        let m = member(1, AttendanceStatus::Exclude);

        assert_eq!(reconciler.begin_commit(&m, 2, start), Err(ReconcileError::MissingReason));

        reconciler.choose_reason(1, ExcludeReason::Illness, None);
        assert_eq!(reconciler.begin_commit(&m, 0, start), Err(ReconcileError::InvalidSpan));
        // An invalid span sends nothing, so the staged reason survives
        assert!(reconciler.pending(1).is_some());

        reconciler.begin_commit(&m, 1, start).unwrap();
        assert_eq!(reconciler.begin_commit(&m, 1, start), Err(ReconcileError::CommitInFlight));
        assert!(!reconciler.choose_reason(1, ExcludeReason::Travel, None));
    }

    #[test]
    fn test_failed_commit_leaves_end_week_untouched() {
        let mut reconciler = ExclusionReconciler::new(WeekLocale::Korean);
        let start = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
        let m = excluded(1, "2026-W10");
        reconciler.merge(&[m.clone()]);

        reconciler.choose_reason(1, ExcludeReason::Surgery, None);
        reconciler.begin_commit(&m, 4, start).unwrap();

        let error = ApiError::from_response(400, "Bad Request", r#"{"detail":"week_start must be a Monday"}"#);
        let message = reconciler.fail_commit(1, "김용진", &error);

        assert_eq!(reconciler.end_week(1), Some(week("2026-W10")));
        assert_eq!(reconciler.phase(1), &ExclusionPhase::Idle);
        assert!(message.contains("week_start must be a Monday"));
        assert!(message.starts_with("김용진"));
    }

    #[test]
    fn test_failed_first_commit_stores_nothing() {
        let mut reconciler = ExclusionReconciler::new(WeekLocale::Korean);
        let m = member(5, AttendanceStatus::Exclude);
        reconciler.choose_reason(5, ExcludeReason::Travel, None);
        reconciler
            .begin_commit(&m, 2, NaiveDate::from_ymd_opt(2026, 2, 2).unwrap())
            .unwrap();
        reconciler.fail_commit(5, "m", &ApiError::Network("offline".to_string()));
        assert_eq!(reconciler.end_week(5), None);
        assert_eq!(reconciler.pending(5), None);
    }

    #[test]
    fn test_status_change_away_from_exclude_clears_end_week() {
        let mut reconciler = ExclusionReconciler::new(WeekLocale::Korean);
        let m = excluded(1, "2026-W10");
        reconciler.merge(&[m.clone()]);
        reconciler.choose_reason(1, ExcludeReason::Travel, None);

        let request = reconciler.status_change_request(&m, AttendanceStatus::Injeung, None);
        assert_eq!(request.exclude_reason, None);
        assert_eq!(request.exclude_reason_detail, None);
        assert_eq!(request.consecutive_weeks, None);
        assert_eq!(reconciler.pending(1), None);

        reconciler.complete_status_change(
            1,
            &StatusUpdateResponse {
                status: AttendanceStatus::Injeung,
                exclude_reason: None,
                exclude_reason_detail: None,
                exclude_end_label: None,
            },
        );
        assert_eq!(reconciler.end_week(1), None);
    }

    #[test]
    fn test_status_change_to_exclude_keeps_known_reason() {
        let mut reconciler = ExclusionReconciler::new(WeekLocale::Korean);
        let m = MemberStatus {
            exclude_reason: Some(ExcludeReason::Business),
            ..member(3, AttendanceStatus::Fine)
        };
        let request = reconciler.status_change_request(&m, AttendanceStatus::Exclude, Some(NaiveDate::from_ymd_opt(2026, 2, 9).unwrap()));
        assert_eq!(request.week_start, NaiveDate::from_ymd_opt(2026, 2, 9));
        assert_eq!(request.status, AttendanceStatus::Exclude);
        assert_eq!(request.exclude_reason, Some(ExcludeReason::Business));
    }

    #[test]
    fn test_exclude_end_lookup() {
        let mut reconciler = ExclusionReconciler::new(WeekLocale::English);
        let needs = reconciler.merge(&[member(9, AttendanceStatus::Exclude)]);
        assert_eq!(needs, vec![9]);

        reconciler.apply_exclude_end(9, &ExcludeEndResponse { last_week_label: None });
        assert_eq!(reconciler.end_week(9), None);

        reconciler.apply_exclude_end(
            9,
            &ExcludeEndResponse {
                last_week_label: Some(week("2026-W10")),
            },
        );
        assert_eq!(
            reconciler.end_week_display(9),
            Some("through week of Mar 2 (Mon)".to_string())
        );
    }

    #[test]
    fn test_late_update_refreshes_the_week_on_screen() {
        let mut reconciler = ExclusionReconciler::new(WeekLocale::Korean);
        let w5 = NaiveDate::from_ymd_opt(2026, 1, 26).unwrap();
        let w6 = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();

        reconciler.begin_refresh(Some(w5));
        // update sent for W5, then the selector moves to W6
        reconciler.view_week(w6);
        let w6_ticket = reconciler.begin_refresh(Some(w6));

        let target = reconciler.refresh_target(w5);
        assert_eq!(target, w6);
        let follow_up = reconciler.begin_refresh(Some(target));
        assert_eq!(follow_up.week_start(), Some(w6));

        assert_eq!(
            reconciler.merge_refresh(&w6_ticket, &[member(1, AttendanceStatus::Fine)]),
            MergeOutcome::Stale
        );
        assert_eq!(
            reconciler.merge_refresh(&follow_up, &[excluded(1, "2026-W08")]),
            MergeOutcome::Applied { needs_lookup: vec![] }
        );
    }

    #[test]
    fn test_refresh_target_defaults_to_requested_week() {
        let reconciler = ExclusionReconciler::new(WeekLocale::Korean);
        let w5 = NaiveDate::from_ymd_opt(2026, 1, 26).unwrap();
        assert_eq!(reconciler.refresh_target(w5), w5);
    }

    #[test]
    fn test_ticket_stops_being_current_after_newer_refresh() {
        let mut reconciler = ExclusionReconciler::new(WeekLocale::Korean);
        let first = reconciler.begin_refresh(NaiveDate::from_ymd_opt(2026, 1, 26));
        assert!(reconciler.is_current(&first));

        let second = reconciler.begin_refresh(NaiveDate::from_ymd_opt(2026, 2, 2));
        assert!(!reconciler.is_current(&first));
        assert!(reconciler.is_current(&second));
    }

}
