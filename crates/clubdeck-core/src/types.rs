//! Core domain types shared across all ClubDeck crates.
//!
//! These model the shapes a real deployment would load from its backend.
//! In the demo they are populated exclusively from [`crate::fixtures`] and
//! treated as opaque, already-valid input: views filter them by role and by
//! simple date/status predicates, nothing more.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Staff presence indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnlineStatus {
    Online,
    Away,
    Offline,
}

/// Response a staff member gave to an assigned shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftResponse {
    Pending,
    Accepted,
    Declined,
    RescheduleRequested,
}

impl ShiftResponse {
    pub fn label(self) -> &'static str {
        match self {
            ShiftResponse::Pending => "Pending",
            ShiftResponse::Accepted => "Accepted",
            ShiftResponse::Declined => "Declined",
            ShiftResponse::RescheduleRequested => "Reschedule",
        }
    }
}

/// Lifecycle status of an event or schedule entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Draft,
    Scheduled,
    Confirmed,
    Live,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub fn label(self) -> &'static str {
        match self {
            EventStatus::Draft => "Draft",
            EventStatus::Scheduled => "Scheduled",
            EventStatus::Confirmed => "Confirmed",
            EventStatus::Live => "Live",
            EventStatus::Completed => "Completed",
            EventStatus::Cancelled => "Cancelled",
        }
    }
}

/// A staff roster entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub display_name: String,
    pub grid_name: String,
    pub role: Role,
    pub online_status: OnlineStatus,
    pub joined_date: NaiveDate,
    pub hours_this_week: u32,
    pub tips_this_week: u32,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    pub bio: String,
}

/// A club event with its DJ/host assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubEvent {
    pub id: String,
    pub name: String,
    pub description: String,
    pub genre: String,
    pub date: NaiveDate,
    /// "22:00"-style wall-clock times; an end before the start wraps past
    /// midnight.
    pub start_time: String,
    pub end_time: String,
    pub dj_name: Option<String>,
    pub dj_response: Option<ShiftResponse>,
    pub host_name: Option<String>,
    pub host_response: Option<ShiftResponse>,
    pub is_recurring: bool,
    pub status: EventStatus,
}

/// Which jar a tip landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipCategory {
    Club,
    Host,
    Dj,
}

/// A single tip transaction (amounts in L$).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipRecord {
    pub id: String,
    /// Minutes before "now" the tip landed (fixtures are relative so the
    /// feed always reads fresh).
    pub minutes_ago: u32,
    pub amount: u32,
    pub tipper_name: String,
    pub recipient_name: String,
    pub category: TipCategory,
    pub source: String,
}

/// Quick stats for the dashboard header tiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub staff_online: u32,
    pub total_staff: u32,
    pub tonight_revenue: u32,
    pub weekly_revenue: u32,
    pub upcoming_events: u32,
    pub current_guests: u32,
    pub max_capacity: u32,
    pub avg_spend_per_guest: u32,
    pub tips_club: u32,
    pub tips_host: u32,
    pub tips_dj: u32,
    pub group_members_joined: u32,
    pub group_members_online: u32,
    pub new_members_this_event: u32,
}

impl DashboardStats {
    /// Current floor capacity as a 0-100 percentage.
    pub fn capacity_pct(&self) -> u32 {
        if self.max_capacity == 0 {
            return 0;
        }
        (self.current_guests * 100 + self.max_capacity / 2) / self.max_capacity
    }
}

/// One sample of the tonight's tip history series (vibe graph).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipSample {
    pub time: String,
    pub club: u32,
    pub dj: u32,
    pub host: u32,
}

/// DJ booth snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DjBooth {
    pub dj_name: String,
    pub genre: String,
    pub current_track: String,
    pub tips_this_session: u32,
    pub is_live: bool,
    pub stream_url: String,
}

/// Host station snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostStation {
    pub host_name: String,
    pub on_break: bool,
    pub guests_greeted: u32,
}

/// Category tag on a staff-feed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedKind {
    Alert,
    Message,
    System,
}

/// Staff feed entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffFeedMessage {
    pub id: String,
    pub kind: FeedKind,
    pub message: String,
    pub minutes_ago: u32,
}

/// A guest visit row for the activity panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestVisit {
    pub id: String,
    pub name: String,
    pub duration_minutes: u32,
    pub is_new_member: bool,
}

/// One week of the revenue trend series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueWeek {
    pub week: String,
    pub revenue: u32,
    pub expenses: u32,
    pub tips_club: u32,
    pub tips_dj: u32,
    pub tips_host: u32,
}

/// One hour of the peak-hours analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeakHour {
    pub hour: String,
    pub guests: u32,
    pub tips: u32,
}

/// Per-event return-on-investment row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRoi {
    pub event: String,
    pub revenue: u32,
    pub cost: u32,
    pub attendees: u32,
    pub roi: f32,
}

/// Kind of action recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    EventCreated,
    EventUpdated,
    EventDeleted,
    StaffCreated,
    StaffUpdated,
    RosterPosted,
    AvailabilitySet,
    TipReceived,
    Login,
    SettingsChanged,
    NotificationSent,
}

impl AuditAction {
    pub fn label(self) -> &'static str {
        match self {
            AuditAction::EventCreated => "Event Created",
            AuditAction::EventUpdated => "Event Updated",
            AuditAction::EventDeleted => "Event Deleted",
            AuditAction::StaffCreated => "Staff Created",
            AuditAction::StaffUpdated => "Staff Updated",
            AuditAction::RosterPosted => "Roster Posted",
            AuditAction::AvailabilitySet => "Availability Set",
            AuditAction::TipReceived => "Tip Received",
            AuditAction::Login => "Login",
            AuditAction::SettingsChanged => "Settings Changed",
            AuditAction::NotificationSent => "Notification Sent",
        }
    }
}

/// A single audit-log line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: String,
    pub action: AuditAction,
    pub actor_name: String,
    pub target_name: Option<String>,
    pub details: String,
    pub minutes_ago: u32,
}

/// A shift assignment shown on a DJ's or host's own dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyShift {
    pub event_name: String,
    pub date_label: String,
    pub time: String,
    pub response: ShiftResponse,
}

/// A DJ/host pairing proposed by the smart roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulePairing {
    pub id: String,
    pub event_name: String,
    pub date: NaiveDate,
    pub dj_name: String,
    pub host_name: String,
}

/// A card in the feature carousel.
#[derive(Debug, Clone)]
pub struct FeatureCard {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

/// One section of the full pricing breakdown overlay.
#[derive(Debug, Clone)]
pub struct PricingSection {
    pub title: &'static str,
    pub items: &'static [&'static str],
}
