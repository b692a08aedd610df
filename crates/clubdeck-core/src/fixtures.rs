//! Demo dataset.
//!
//! Everything the dashboard shows comes from here. Dates are generated
//! relative to "today" so the schedule always reads current; timestamps are
//! stored as minutes-ago offsets for the same reason. None of this is
//! validated downstream — the views treat it as already-valid input.

use chrono::{Duration, Local, NaiveDate};

use crate::role::Role;
use crate::types::{
    AuditAction, AuditEntry, ClubEvent, DashboardStats, DjBooth, EventRoi, EventStatus,
    FeatureCard, FeedKind, GuestVisit, HostStation, MyShift, OnlineStatus, PeakHour,
    PricingSection, RevenueWeek, SchedulePairing, ShiftResponse, StaffFeedMessage, StaffMember,
    TipCategory, TipRecord, TipSample,
};

/// Today's date in the local timezone; the anchor for every relative date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn date_in(days: i64) -> NaiveDate {
    today() + Duration::days(days)
}

fn staff(
    id: &str,
    display_name: &str,
    grid_name: &str,
    role: Role,
    online_status: OnlineStatus,
    joined: (i32, u32, u32),
    hours_this_week: u32,
    tips_this_week: u32,
    specialties: &[&str],
    rating: Option<f32>,
    bio: &str,
) -> StaffMember {
    StaffMember {
        id: id.to_string(),
        display_name: display_name.to_string(),
        grid_name: grid_name.to_string(),
        role,
        online_status,
        joined_date: NaiveDate::from_ymd_opt(joined.0, joined.1, joined.2)
            .unwrap_or_else(|| today()),
        hours_this_week,
        tips_this_week,
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        rating,
        bio: bio.to_string(),
    }
}

/// The staff roster.
pub fn staff_roster() -> Vec<StaffMember> {
    vec![
        staff(
            "staff-001",
            "Nova",
            "NovaStar Resident",
            Role::Owner,
            OnlineStatus::Online,
            (2023, 1, 15),
            28,
            0,
            &[],
            None,
            "Owner & Founder — built this place from scratch",
        ),
        staff(
            "staff-002",
            "Zane",
            "Zaneth Resident",
            Role::GeneralManager,
            OnlineStatus::Online,
            (2023, 3, 10),
            32,
            0,
            &[],
            None,
            "General Manager & Systems Architect",
        ),
        staff(
            "staff-003",
            "DJ Apex",
            "Apex Resident",
            Role::Dj,
            OnlineStatus::Online,
            (2023, 6, 20),
            12,
            4200,
            &["Techno", "House", "Synthwave"],
            Some(4.8),
            "Resident DJ — spinning since 2019",
        ),
        staff(
            "staff-004",
            "DJ Caspian",
            "Caspian Resident",
            Role::Dj,
            OnlineStatus::Offline,
            (2024, 1, 10),
            8,
            2800,
            &["Deep House", "Chill", "Lo-Fi"],
            Some(4.5),
            "Night shift vibes specialist",
        ),
        staff(
            "staff-005",
            "Remi",
            "Remi Resident",
            Role::Host,
            OnlineStatus::Online,
            (2023, 9, 12),
            18,
            3100,
            &[],
            Some(4.9),
            "Head Host — the life of the party",
        ),
        staff(
            "staff-006",
            "Ivy",
            "Ivy Lace",
            Role::Host,
            OnlineStatus::Away,
            (2024, 3, 5),
            10,
            1500,
            &[],
            Some(4.3),
            "Guest greeter & VIP concierge",
        ),
        staff(
            "staff-007",
            "Lyra",
            "Lyra Noir",
            Role::Manager,
            OnlineStatus::Online,
            (2023, 11, 1),
            22,
            0,
            &[],
            None,
            "Floor manager & schedule coordinator",
        ),
        staff(
            "staff-008",
            "Orion",
            "Orion Vantara",
            Role::Owner,
            OnlineStatus::Offline,
            (2022, 5, 10),
            14,
            0,
            &[],
            None,
            "Co-Owner",
        ),
        staff(
            "staff-009",
            "Vera",
            "Vera Billig",
            Role::Owner,
            OnlineStatus::Online,
            (2022, 8, 22),
            20,
            0,
            &[],
            None,
            "Co-Owner",
        ),
        staff(
            "staff-010",
            "Echo",
            "Echo Veil",
            Role::Manager,
            OnlineStatus::Online,
            (2024, 1, 5),
            24,
            0,
            &[],
            None,
            "Events manager",
        ),
        staff(
            "staff-011",
            "Mira",
            "Mira Spire",
            Role::Host,
            OnlineStatus::Offline,
            (2023, 11, 15),
            16,
            1200,
            &[],
            Some(4.6),
            "Fashion consultant & Host",
        ),
        staff(
            "staff-012",
            "DJ Sable",
            "Sable Resident",
            Role::Dj,
            OnlineStatus::Offline,
            (2024, 2, 1),
            6,
            1500,
            &["EDM", "Dubstep"],
            Some(4.8),
            "Weekend heavy bass",
        ),
        staff(
            "staff-013",
            "Soleil",
            "Soleil Resident",
            Role::Host,
            OnlineStatus::Online,
            (2023, 12, 10),
            12,
            2100,
            &[],
            Some(4.9),
            "VIP Host",
        ),
    ]
}

/// Upcoming events with their DJ/host assignments.
pub fn events() -> Vec<ClubEvent> {
    vec![
        ClubEvent {
            id: "event-001".to_string(),
            name: "Neon Nights".to_string(),
            description: "The ultimate synthwave experience. Glow sticks, laser shows, and non-stop beats.".to_string(),
            genre: "Synthwave / Techno".to_string(),
            date: date_in(0),
            start_time: "20:00".to_string(),
            end_time: "02:00".to_string(),
            dj_name: Some("DJ Apex".to_string()),
            dj_response: Some(ShiftResponse::Accepted),
            host_name: Some("Remi".to_string()),
            host_response: Some(ShiftResponse::Accepted),
            is_recurring: true,
            status: EventStatus::Confirmed,
        },
        ClubEvent {
            id: "event-002".to_string(),
            name: "Ladies Night".to_string(),
            description: "Free drinks for the first hour. VIP access included.".to_string(),
            genre: "House / Deep House".to_string(),
            date: date_in(2),
            start_time: "21:00".to_string(),
            end_time: "03:00".to_string(),
            dj_name: Some("DJ Apex".to_string()),
            dj_response: Some(ShiftResponse::Pending),
            host_name: Some("Remi".to_string()),
            host_response: Some(ShiftResponse::RescheduleRequested),
            is_recurring: true,
            status: EventStatus::Scheduled,
        },
        ClubEvent {
            id: "event-003".to_string(),
            name: "Lo-Fi Lounge".to_string(),
            description: "Chill beats, ambience, and smooth conversations.".to_string(),
            genre: "Lo-Fi / Chill".to_string(),
            date: date_in(3),
            start_time: "22:00".to_string(),
            end_time: "04:00".to_string(),
            dj_name: Some("DJ Caspian".to_string()),
            dj_response: Some(ShiftResponse::Pending),
            host_name: Some("Ivy".to_string()),
            host_response: Some(ShiftResponse::Declined),
            is_recurring: false,
            status: EventStatus::Draft,
        },
    ]
}

/// Shifts shown to a DJ or host on their own dashboard.
pub fn my_shifts() -> Vec<MyShift> {
    vec![
        MyShift {
            event_name: "Neon Nights Weekender".to_string(),
            date_label: "Today".to_string(),
            time: "20:00 - 22:00".to_string(),
            response: ShiftResponse::Pending,
        },
        MyShift {
            event_name: "Sunset Chill".to_string(),
            date_label: "Tomorrow".to_string(),
            time: "18:00 - 20:00".to_string(),
            response: ShiftResponse::Accepted,
        },
        MyShift {
            event_name: "Cyberpunk Rave".to_string(),
            date_label: "Saturday".to_string(),
            time: "22:00 - 00:00".to_string(),
            response: ShiftResponse::RescheduleRequested,
        },
    ]
}

/// DJ/host pairings proposed by the smart roster (manager view).
pub fn pairings() -> Vec<SchedulePairing> {
    vec![
        SchedulePairing {
            id: "pair-001".to_string(),
            event_name: "Techno Tuesday".to_string(),
            date: date_in(4),
            dj_name: "DJ Apex".to_string(),
            host_name: "Remi".to_string(),
        },
        SchedulePairing {
            id: "pair-002".to_string(),
            event_name: "Chill Friday".to_string(),
            date: date_in(5),
            dj_name: "DJ Apex".to_string(),
            host_name: "Ivy".to_string(),
        },
        SchedulePairing {
            id: "pair-003".to_string(),
            event_name: "Weekend Rave".to_string(),
            date: date_in(6),
            dj_name: "DJ Caspian".to_string(),
            host_name: "Ivy".to_string(),
        },
    ]
}

/// The live tip feed, newest first.
pub fn tips() -> Vec<TipRecord> {
    fn tip(
        id: &str,
        minutes_ago: u32,
        amount: u32,
        tipper: &str,
        recipient: &str,
        category: TipCategory,
        source: &str,
    ) -> TipRecord {
        TipRecord {
            id: id.to_string(),
            minutes_ago,
            amount,
            tipper_name: tipper.to_string(),
            recipient_name: recipient.to_string(),
            category,
            source: source.to_string(),
        }
    }
    vec![
        tip("tip-001", 5, 500, "CoolCat42", "DJ Apex", TipCategory::Dj, "DG-T 100s DJ Jar"),
        tip("tip-002", 10, 200, "NightOwl88", "Remi", TipCategory::Host, "DG-T 100s Host Jar"),
        tip("tip-003", 15, 1000, "VIPKing", "Club", TipCategory::Club, "DG-T 200 Club Jar"),
        tip("tip-004", 20, 300, "DancerFan", "DJ Apex", TipCategory::Dj, "DG-T 100s DJ Jar"),
        tip("tip-005", 30, 150, "WanderlustSL", "Remi", TipCategory::Host, "DG-T 100s Host Jar"),
        tip("tip-006", 40, 750, "HighRoller99", "Club", TipCategory::Club, "DG-T 200 Club Jar"),
    ]
}

/// Dashboard quick stats.
pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        staff_online: 4,
        total_staff: 7,
        tonight_revenue: 12_500,
        weekly_revenue: 48_200,
        upcoming_events: 3,
        current_guests: 34,
        max_capacity: 60,
        avg_spend_per_guest: 85,
        tips_club: 4800,
        tips_host: 3450,
        tips_dj: 4250,
        group_members_joined: 22,
        group_members_online: 8,
        new_members_this_event: 5,
    }
}

/// Tonight's tip history (vibe graph series).
pub fn tip_history() -> Vec<TipSample> {
    [
        ("20:00", 200, 100, 50),
        ("20:30", 350, 200, 100),
        ("21:00", 800, 450, 200),
        ("21:30", 1200, 750, 350),
        ("22:00", 2200, 1200, 500),
        ("22:30", 3100, 1800, 800),
        ("23:00", 4500, 2500, 1100),
        ("23:30", 5200, 3100, 1400),
        ("00:00", 5800, 3600, 1700),
        ("00:30", 6100, 3800, 1900),
        ("01:00", 6300, 3900, 2000),
    ]
    .into_iter()
    .map(|(time, club, dj, host)| TipSample {
        time: time.to_string(),
        club,
        dj,
        host,
    })
    .collect()
}

pub fn dj_booth() -> DjBooth {
    DjBooth {
        dj_name: "DJ Apex".to_string(),
        genre: "Techno / House".to_string(),
        current_track: "\"Neon Drift\" – Synthwave".to_string(),
        tips_this_session: 4200,
        is_live: true,
        stream_url: "http://sin.lightmanstreams.com:10040".to_string(),
    }
}

pub fn host_station() -> HostStation {
    HostStation {
        host_name: "Remi".to_string(),
        on_break: false,
        guests_greeted: 27,
    }
}

/// The staff feed, newest first.
pub fn staff_feed() -> Vec<StaffFeedMessage> {
    fn feed(id: &str, kind: FeedKind, message: &str, minutes_ago: u32) -> StaffFeedMessage {
        StaffFeedMessage {
            id: id.to_string(),
            kind,
            message: message.to_string(),
            minutes_ago,
        }
    }
    vec![
        feed("feed-001", FeedKind::Alert, "Club at 57% capacity", 10),
        feed("feed-002", FeedKind::Message, "DJ Apex: switching to Synthwave set next", 12),
        feed("feed-003", FeedKind::System, "5 new group members joined this event", 15),
        feed("feed-004", FeedKind::Alert, "Tip jar total passed L$10,000 tonight", 20),
        feed("feed-005", FeedKind::Message, "Remi: new guest needs orientation", 22),
        feed("feed-006", FeedKind::System, "Sploder payout: L$500 distributed", 25),
    ]
}

/// Recent guest visits for the activity panel.
pub fn guest_visits() -> Vec<GuestVisit> {
    fn guest(id: &str, name: &str, duration_minutes: u32, is_new_member: bool) -> GuestVisit {
        GuestVisit {
            id: id.to_string(),
            name: name.to_string(),
            duration_minutes,
            is_new_member,
        }
    }
    vec![
        guest("guest-001", "NightOwl88", 45, false),
        guest("guest-002", "CyberPunk42", 38, true),
        guest("guest-003", "VIPKing", 65, false),
        guest("guest-004", "GlowStickGirl", 22, true),
        guest("guest-005", "BassDropper", 18, true),
        guest("guest-006", "WanderlustSL", 80, false),
        guest("guest-007", "DancerFan", 55, false),
        guest("guest-008", "NeonRider", 12, true),
        guest("guest-009", "HighRoller99", 70, false),
        guest("guest-010", "StarDust77", 15, true),
    ]
}

/// Week-over-week revenue trend (analytics).
pub fn revenue_trend() -> Vec<RevenueWeek> {
    [
        ("Jan W1", 28_000, 3200, 12_000, 10_000, 6000),
        ("Jan W2", 32_000, 2800, 14_000, 11_000, 7000),
        ("Jan W3", 35_000, 4100, 15_000, 12_000, 8000),
        ("Jan W4", 29_000, 3500, 13_000, 9500, 6500),
        ("Feb W1", 41_000, 3800, 18_000, 14_000, 9000),
        ("Feb W2", 48_200, 3350, 21_000, 16_000, 11_200),
    ]
    .into_iter()
    .map(|(week, revenue, expenses, tips_club, tips_dj, tips_host)| RevenueWeek {
        week: week.to_string(),
        revenue,
        expenses,
        tips_club,
        tips_dj,
        tips_host,
    })
    .collect()
}

/// Peak-hours analysis (analytics).
pub fn peak_hours() -> Vec<PeakHour> {
    [
        ("18:00", 8, 200),
        ("19:00", 15, 800),
        ("20:00", 28, 2200),
        ("21:00", 42, 4500),
        ("22:00", 55, 6800),
        ("23:00", 58, 7200),
        ("00:00", 52, 5800),
        ("01:00", 38, 3500),
        ("02:00", 20, 1200),
        ("03:00", 8, 400),
    ]
    .into_iter()
    .map(|(hour, guests, tips)| PeakHour {
        hour: hour.to_string(),
        guests,
        tips,
    })
    .collect()
}

/// Event return-on-investment table (analytics).
pub fn event_roi() -> Vec<EventRoi> {
    [
        ("Neon Nights", 12_500, 800, 48, 14.6),
        ("Ladies Night", 9800, 550, 55, 16.8),
        ("Lo-Fi Lounge", 6200, 400, 32, 14.5),
        ("Techno Tuesday", 8400, 600, 40, 13.0),
        ("Weekend Rave", 15_000, 1200, 58, 11.5),
    ]
    .into_iter()
    .map(|(event, revenue, cost, attendees, roi)| EventRoi {
        event: event.to_string(),
        revenue,
        cost,
        attendees,
        roi,
    })
    .collect()
}

/// The audit trail, newest first.
pub fn audit_log() -> Vec<AuditEntry> {
    fn entry(
        id: &str,
        action: AuditAction,
        actor: &str,
        target: Option<&str>,
        details: &str,
        minutes_ago: u32,
    ) -> AuditEntry {
        AuditEntry {
            id: id.to_string(),
            action,
            actor_name: actor.to_string(),
            target_name: target.map(|t| t.to_string()),
            details: details.to_string(),
            minutes_ago,
        }
    }
    vec![
        entry("log-001", AuditAction::TipReceived, "System", Some("DJ Apex"), "L$ 500 tipped.", 5),
        entry("log-002", AuditAction::StaffUpdated, "Nova", Some("Ivy"), "Promoted to Host status", 15),
        entry("log-003", AuditAction::EventCreated, "Zane", Some("Neon Nights"), "Scheduled for 20:00 tonight", 35),
        entry("log-004", AuditAction::RosterPosted, "Lyra", None, "Posted weekly roster to Discord.", 45),
        entry("log-005", AuditAction::Login, "Orion", None, "Admin login via dashboard.", 120),
        entry("log-006", AuditAction::AvailabilitySet, "DJ Caspian", None, "Marked available for Saturday 22:00.", 180),
        entry("log-007", AuditAction::SettingsChanged, "Vera", None, "Updated Discord webhook URL.", 300),
        entry("log-008", AuditAction::NotificationSent, "System", Some("DJ Apex"), "Shift reminder sent via Discord.", 480),
        entry("log-009", AuditAction::EventDeleted, "Nova", Some("Lo-Fi Chill"), "Canceled due to scheduling conflict.", 720),
        entry("log-010", AuditAction::StaffCreated, "Zane", Some("DJ Sable"), "New account provisioned.", 1440),
    ]
}

/// The feature carousel cards.
pub const FEATURES: &[FeatureCard] = &[
    FeatureCard {
        title: "Smart Auto-Roster",
        subtitle: "Your Scheduling Is Done",
        description: "The Rostering Engine reads your staff's availability and builds a conflict-free shift calendar in seconds. No double bookings. No forgotten slots.",
    },
    FeatureCard {
        title: "Real-Time Tip Tracking",
        subtitle: "Every L$ accounted for",
        description: "See exactly how much your club, DJs, and Hosts earned — live, tonight. Every tip captured the moment it lands. No more 2AM payout reconstruction.",
    },
    FeatureCard {
        title: "Staff Presence Tracking",
        subtitle: "Dashboard & Discord activity",
        description: "Know who is active on the dashboard or in your Discord — and who went quiet mid-shift. Heartbeat engine tracks web presence in real time.",
    },
    FeatureCard {
        title: "Role-Based Access",
        subtitle: "Right people, right data",
        description: "Owners see everything. DJs and Hosts see only their own shifts and tips. Fully automatic — no one stumbles into financials or management settings.",
    },
    FeatureCard {
        title: "Zero-Loss Architecture",
        subtitle: "Two databases, zero gaps",
        description: "Fast reads for the live dashboard, strict storage for every transaction. Even during grid lag spikes, your money data is never lost.",
    },
    FeatureCard {
        title: "Fraud Protection",
        subtitle: "Cryptographic verification",
        description: "Every data packet from the grid is cryptographically verified. No fake tips, no spoofed traffic, no griefers messing with your numbers.",
    },
    FeatureCard {
        title: "Works on Any Phone",
        subtitle: "No app needed",
        description: "DJs and Hosts confirm shifts, check schedules, and request changes from their phone. One tap. Less missed confirmations, less chasing.",
    },
    FeatureCard {
        title: "Web-Based Hiring",
        subtitle: "No notecards required",
        description: "Candidates apply via a web form — timezone, voice, specialties — and the application posts to a role-restricted channel in your Discord server.",
    },
    FeatureCard {
        title: "Crowd & Revenue Analytics",
        subtitle: "Know what's working",
        description: "Track peak hours, top DJs, best event themes — plus crowd behaviour: when guests arrive, how long they stay, which nights draw big spenders.",
    },
];

/// The pricing breakdown overlay sections.
pub const PRICING_SECTIONS: &[PricingSection] = &[
    PricingSection {
        title: "Smart Auto-Rostering",
        items: &[
            "Staff availability in, conflict-free weekly schedule out — no spreadsheets",
            "Matches DJs to the right night; a techno DJ won't land in a jazz lounge set",
            "Keeps shift distribution fair across the roster",
            "Discord ping the moment a shift is confirmed — one tap to accept",
        ],
    },
    PricingSection {
        title: "Revenue & Crowd Intelligence",
        items: &[
            "Every tip from every jar on the dashboard the instant it lands",
            "Live leaderboard of tonight's top earners",
            "When guests arrive, how long they stay, which events draw spenders",
            "Week-over-week trends to double down on what fills the floor",
        ],
    },
    PricingSection {
        title: "Know Who's Active, Right Now",
        items: &[
            "Dashboard and Discord presence at a glance, updated live",
            "Heartbeat checks confirm genuine activity, not a forgotten tab",
            "Disconnections detected instantly — no ghost online statuses",
            "Managers get a live staff map: working, quiet, away and for how long",
        ],
    },
    PricingSection {
        title: "Everyone Sees the Right Things",
        items: &[
            "Owners see everything; DJs and Hosts only their own shifts and earnings",
            "Not just hidden buttons — data access itself is scoped per role",
            "Five permission tiers, each carefully scoped",
        ],
    },
    PricingSection {
        title: "Your Money Is Never Lost",
        items: &[
            "Fast store for live dashboards, strict store for financial records",
            "Every transaction stored with bank-grade reliability",
            "Tip jars hold data locally through lag spikes and retry until confirmed",
        ],
    },
    PricingSection {
        title: "Protected From Griefers & Fraud",
        items: &[
            "Every in-world packet cryptographically verified",
            "Malformed or unverified requests rejected at the door",
            "Built-in rate limiting stops script flooding",
        ],
    },
    PricingSection {
        title: "Works on Any Phone, No App Needed",
        items: &[
            "Any smartphone browser — nothing to install",
            "One tap to submit availability, confirm a shift, flag a conflict",
            "Instant notifications when the roster drops or a shift changes",
        ],
    },
    PricingSection {
        title: "Hiring Made Simple",
        items: &[
            "Clean web form: grid name, timezone, voice, genres, experience",
            "Applications post to a private hiring channel in your Discord",
            "Approve from Discord and the account is set up automatically",
        ],
    },
    PricingSection {
        title: "AI-Powered Event Planning (Optional)",
        items: &[
            "Past revenue data in, highest-earning lineup recommendation out",
            "Vibe Match suggests the DJ-Host combos that perform together",
        ],
    },
    PricingSection {
        title: "Automatic Discord Notifications",
        items: &[
            "Roster published → notification to your roster channel",
            "Shift starting in an hour → auto-reminder pings the role",
            "New job application → instant alert in your management channel",
        ],
    },
];
