use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::fake;

pub const EVENT_PERSONAL_CARE: &str = "Personal Care";
pub const CHARGING_METHOD_FREE: &str = "free";
pub const MAX_RECORDS_PER_DAY: usize = 3;
pub const INSTRUCTION_SENTENCES: usize = 5;

/// Last second of a day window, relative to its midnight.
const DAY_END_OFFSET_SECS: i64 = 23 * 3600 + 59 * 60 + 59;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    #[serde(rename = "Schedule.Status.pendingToAccept")]
    PendingToAccept,
    #[serde(rename = "Schedule.Status.rejected")]
    Rejected,
    #[serde(rename = "Schedule.Status.pendingToStart")]
    PendingToStart,
    #[serde(rename = "Schedule.Status.checkedin")]
    CheckedIn,
    #[serde(rename = "Schedule.Status.checkedout")]
    CheckedOut,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::PendingToAccept,
        Status::Rejected,
        Status::PendingToStart,
        Status::CheckedIn,
        Status::CheckedOut,
    ];

    /// Display label shown next to the status in the client.
    pub fn label(self) -> &'static str {
        match self {
            Status::PendingToAccept => "PENDING",
            Status::Rejected => "Rejected",
            Status::PendingToStart => "Pending start",
            Status::CheckedIn => "Checked in",
            Status::CheckedOut => "Finished",
        }
    }

    pub fn shift_flag(self) -> ShiftFlag {
        match self {
            Status::PendingToAccept => ShiftFlag::Pending,
            Status::Rejected => ShiftFlag::Reject,
            Status::PendingToStart | Status::CheckedIn | Status::CheckedOut => ShiftFlag::Accept,
        }
    }

    pub fn action_flags(self) -> ActionFlags {
        match self {
            Status::PendingToAccept => ActionFlags {
                can_accept: true,
                can_reject: true,
                ..ActionFlags::NONE
            },
            Status::PendingToStart => ActionFlags {
                can_check_in: true,
                ..ActionFlags::NONE
            },
            Status::CheckedIn => ActionFlags {
                can_check_out: true,
                ..ActionFlags::NONE
            },
            Status::Rejected | Status::CheckedOut => ActionFlags::NONE,
        }
    }

    /// Whether the visit has been started, i.e. a check-in time exists.
    pub fn is_started(self) -> bool {
        matches!(self, Status::CheckedIn | Status::CheckedOut)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShiftFlag {
    Pending,
    Reject,
    Accept,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActionFlags {
    pub can_accept: bool,
    pub can_reject: bool,
    pub can_check_in: bool,
    pub can_check_out: bool,
}

impl ActionFlags {
    pub const NONE: ActionFlags = ActionFlags {
        can_accept: false,
        can_reject: false,
        can_check_in: false,
        can_check_out: false,
    };
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Person {
    pub name: String,
    pub id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Client {
    pub name: String,
    pub id: String,
    pub charging_method: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Area {
    pub name: String,
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleRecord {
    pub event: &'static str,
    pub carer: Person,
    pub customer: Person,
    pub client: Client,
    pub area: Area,
    pub start_utc: NaiveDateTime,
    pub end_utc: NaiveDateTime,
    pub id: String,
    pub status: Status,
    pub status_str: &'static str,
    pub carer_project_id: String,
    pub customer_project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkin_date_time_utc: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_date_time_utc: Option<NaiveDateTime>,
    pub shift_flag: ShiftFlag,
    #[serde(flatten)]
    pub actions: ActionFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// Inclusive `[00:00:00, 23:59:59]` window of `day`.
pub fn day_window(day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = day.and_time(NaiveTime::MIN);
    (start, start + Duration::seconds(DAY_END_OFFSET_SECS))
}

/// Uniform instant in `[from, to]` at one-second resolution. Collapses to
/// `from` when the range is empty.
pub fn instant_between<R: Rng + ?Sized>(
    rng: &mut R,
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> NaiveDateTime {
    let span = (to - from).num_seconds();
    if span <= 0 {
        return from;
    }
    from + Duration::seconds(rng.gen_range(0..=span))
}

/// Every whole day in `[start, end)`.
pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d < end)
}

fn person<R: Rng + ?Sized>(rng: &mut R) -> Person {
    Person {
        name: fake::name(rng),
        id: fake::uuid4(rng),
        user_id: fake::uuid4(rng),
    }
}

/// One synthetic record on `day` with a fixed `status`.
pub fn record_with_status<R: Rng + ?Sized>(
    rng: &mut R,
    day: NaiveDate,
    status: Status,
) -> ScheduleRecord {
    let (day_start, day_end) = day_window(day);
    let start_utc = instant_between(rng, day_start, day_end);
    let end_utc = instant_between(rng, start_utc, day_end);

    let carer = person(rng);
    let customer = person(rng);
    let client = Client {
        name: fake::name(rng),
        id: fake::uuid4(rng),
        charging_method: CHARGING_METHOD_FREE,
    };
    let area = Area {
        name: fake::name(rng),
        id: fake::uuid4(rng),
    };
    let id = fake::uuid4(rng);
    let carer_project_id = fake::uuid4(rng);
    let customer_project_id = fake::uuid4(rng);

    let mut checkin_date_time_utc = None;
    let mut checkout_date_time_utc = None;
    // The checkout branch sits behind the broader started check, so a
    // checked-out record only ever carries a check-in time.
    if status.is_started() {
        checkin_date_time_utc = Some(instant_between(rng, start_utc, end_utc));
    } else if status == Status::CheckedOut {
        checkout_date_time_utc = Some(instant_between(rng, start_utc, end_utc));
    }

    ScheduleRecord {
        event: EVENT_PERSONAL_CARE,
        carer,
        customer,
        client,
        area,
        start_utc,
        end_utc,
        id,
        status,
        status_str: status.label(),
        carer_project_id,
        customer_project_id,
        checkin_date_time_utc,
        checkout_date_time_utc,
        shift_flag: status.shift_flag(),
        actions: status.action_flags(),
        instructions: None,
    }
}

pub fn generate_schedule<R: Rng + ?Sized>(rng: &mut R, day: NaiveDate) -> ScheduleRecord {
    let status = Status::ALL
        .choose(rng)
        .copied()
        .unwrap_or(Status::PendingToAccept);
    tracing::debug!(%day, ?status, "generating schedule record");
    record_with_status(rng, day, status)
}

/// Records for every day in `[start, end)`, 0 to 3 per day, in day order.
/// A missing `end` covers `start` only.
pub fn schedule_list<R: Rng + ?Sized>(
    rng: &mut R,
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> Vec<ScheduleRecord> {
    let end = end.or_else(|| start.succ_opt()).unwrap_or(start);
    tracing::debug!(%start, %end, "generating schedule list");

    let mut out = Vec::new();
    for day in days_in_range(start, end) {
        let count = rng.gen_range(0..=MAX_RECORDS_PER_DAY);
        for _ in 0..count {
            out.push(generate_schedule(rng, day));
        }
    }
    out
}

/// A fresh record on `today` wearing the caller's `id`, with instructions.
/// Nothing is looked up; earlier list results are never referenced.
pub fn schedule_detail<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate, id: &str) -> ScheduleRecord {
    let mut item = generate_schedule(rng, today);
    item.id = id.to_string();
    item.instructions = Some(fake::paragraph(rng, INSTRUCTION_SENTENCES));
    item
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{BTreeMap, HashSet};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
    }

    #[test]
    fn days_in_range_covers_exact_day_count() {
        let cases = [
            (d(2024, 1, 1), d(2024, 1, 1)),
            (d(2024, 1, 1), d(2024, 1, 2)),
            (d(2024, 2, 27), d(2024, 3, 2)),
            (d(2023, 12, 30), d(2024, 1, 14)),
        ];
        for (start, end) in cases {
            let days: Vec<NaiveDate> = days_in_range(start, end).collect();
            assert_eq!(days.len() as i64, (end - start).num_days());
            assert!(days.windows(2).all(|w| w[1] == w[0].succ_opt().unwrap()));
            assert!(!days.contains(&end));
        }
        assert_eq!(days_in_range(d(2024, 1, 5), d(2024, 1, 1)).count(), 0);
    }

    #[test]
    fn list_without_end_covers_start_day_only() {
        let mut rng = StdRng::seed_from_u64(11);
        let start = d(2024, 6, 10);
        for _ in 0..50 {
            let items = schedule_list(&mut rng, start, None);
            assert!(items.len() <= MAX_RECORDS_PER_DAY);
            assert!(items.iter().all(|r| r.start_utc.date() == start));
        }
    }

    #[test]
    fn list_is_in_day_order_with_at_most_three_per_day() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = d(2024, 1, 1);
        let end = d(2025, 1, 1);
        let items = schedule_list(&mut rng, start, Some(end));

        let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for r in &items {
            *per_day.entry(r.start_utc.date()).or_default() += 1;
        }
        assert!(per_day.values().all(|c| *c <= MAX_RECORDS_PER_DAY));
        assert!(per_day.keys().all(|day| *day >= start && *day < end));
        assert!(items
            .windows(2)
            .all(|w| w[0].start_utc.date() <= w[1].start_utc.date()));

        let observed: HashSet<usize> = days_in_range(start, end)
            .map(|day| per_day.get(&day).copied().unwrap_or(0))
            .collect();
        assert_eq!(observed, (0..=MAX_RECORDS_PER_DAY).collect::<HashSet<_>>());
    }

    #[test]
    fn start_and_end_stay_inside_day_window() {
        let mut rng = StdRng::seed_from_u64(5);
        let day = d(2024, 3, 31);
        let (lo, hi) = day_window(day);
        assert_eq!(lo.to_string(), "2024-03-31 00:00:00");
        assert_eq!(hi.to_string(), "2024-03-31 23:59:59");
        for _ in 0..500 {
            let r = generate_schedule(&mut rng, day);
            assert!(lo <= r.start_utc);
            assert!(r.start_utc <= r.end_utc);
            assert!(r.end_utc <= hi);
            if let Some(checkin) = r.checkin_date_time_utc {
                assert!(r.start_utc <= checkin && checkin <= r.end_utc);
            }
        }
    }

    #[test]
    fn status_table_drives_flags() {
        let expected = [
            (Status::PendingToAccept, "PENDING", ShiftFlag::Pending, [true, true, false, false]),
            (Status::Rejected, "Rejected", ShiftFlag::Reject, [false, false, false, false]),
            (Status::PendingToStart, "Pending start", ShiftFlag::Accept, [false, false, true, false]),
            (Status::CheckedIn, "Checked in", ShiftFlag::Accept, [false, false, false, true]),
            (Status::CheckedOut, "Finished", ShiftFlag::Accept, [false, false, false, false]),
        ];
        let mut rng = StdRng::seed_from_u64(9);
        for (status, label, flag, [accept, reject, check_in, check_out]) in expected {
            let r = record_with_status(&mut rng, d(2024, 5, 1), status);
            assert_eq!(r.status_str, label);
            assert_eq!(r.shift_flag, flag);
            assert_eq!(
                r.actions,
                ActionFlags {
                    can_accept: accept,
                    can_reject: reject,
                    can_check_in: check_in,
                    can_check_out: check_out,
                },
                "{status:?}"
            );
        }
    }

    #[test]
    fn checkin_only_for_started_and_checkout_never_set() {
        let mut rng = StdRng::seed_from_u64(21);
        for status in Status::ALL {
            for _ in 0..20 {
                let r = record_with_status(&mut rng, d(2024, 8, 15), status);
                assert_eq!(
                    r.checkin_date_time_utc.is_some(),
                    matches!(status, Status::CheckedIn | Status::CheckedOut),
                    "{status:?}"
                );
                assert!(r.checkout_date_time_utc.is_none(), "{status:?}");
            }
        }
    }

    #[test]
    fn every_status_is_drawn() {
        let mut rng = StdRng::seed_from_u64(77);
        let seen: HashSet<Status> = (0..200)
            .map(|_| generate_schedule(&mut rng, d(2024, 1, 1)).status)
            .collect();
        assert_eq!(seen.len(), Status::ALL.len());
    }

    #[test]
    fn statuses_are_drawn_evenly() {
        let mut rng = StdRng::seed_from_u64(2024);
        let draws = 5000;
        let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
        for _ in 0..draws {
            *counts
                .entry(generate_schedule(&mut rng, d(2024, 1, 1)).status_str)
                .or_default() += 1;
        }
        assert_eq!(counts.len(), Status::ALL.len());
        for (label, n) in counts {
            // 20% expected per status.
            assert!((750..=1250).contains(&n), "{label}: {n}/{draws}");
        }
    }

    #[test]
    fn records_per_day_are_drawn_evenly() {
        let mut rng = StdRng::seed_from_u64(2025);
        let start = d(2000, 1, 1);
        let end = start + Duration::days(5000);
        let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for r in schedule_list(&mut rng, start, Some(end)) {
            *per_day.entry(r.start_utc.date()).or_default() += 1;
        }
        let mut buckets = [0usize; MAX_RECORDS_PER_DAY + 1];
        for day in days_in_range(start, end) {
            buckets[per_day.get(&day).copied().unwrap_or(0)] += 1;
        }
        for (count, days) in buckets.iter().enumerate() {
            // 25% expected per count.
            assert!((1000..=1500).contains(days), "{count} records: {days}/5000 days");
        }
    }

    #[test]
    fn detail_uses_requested_id_and_today() {
        let mut rng = StdRng::seed_from_u64(3);
        let today = d(2026, 10, 16);
        let r = schedule_detail(&mut rng, today, "visit-123");
        assert_eq!(r.id, "visit-123");
        assert_eq!(r.start_utc.date(), today);
        let instructions = r.instructions.expect("instructions");
        assert_eq!(instructions.matches('.').count(), INSTRUCTION_SENTENCES);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = schedule_list(&mut StdRng::seed_from_u64(8), d(2024, 1, 1), Some(d(2024, 1, 8)));
        let b = schedule_list(&mut StdRng::seed_from_u64(8), d(2024, 1, 1), Some(d(2024, 1, 8)));
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }

    #[test]
    fn record_serializes_with_client_field_names() {
        let mut rng = StdRng::seed_from_u64(1);
        let r = record_with_status(&mut rng, d(2024, 2, 29), Status::PendingToStart);
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["Event"], "Personal Care");
        assert_eq!(v["Status"], "Schedule.Status.pendingToStart");
        assert_eq!(v["StatusStr"], "Pending start");
        assert_eq!(v["ShiftFlag"], "Accept");
        assert_eq!(v["CanCheckIn"], true);
        assert_eq!(v["CanCheckOut"], false);
        assert_eq!(v["Client"]["ChargingMethod"], "free");
        assert!(v["Carer"]["UserId"].is_string());
        assert!(v["Area"]["Name"].is_string());
        assert!(v["StartUtc"].as_str().unwrap().starts_with("2024-02-29T"));
        assert!(v.get("CheckinDateTimeUtc").is_none());
        assert!(v.get("CheckoutDateTimeUtc").is_none());
        assert!(v.get("Instructions").is_none());
    }
}
