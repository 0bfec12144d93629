//! Keeps only slots that are open now or open within the lookahead window.
//!
//! Slot times arrive as `HH:MM:SS` with no date; they are read as campus-local
//! times on the same day as `now`.

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};
use watclassroom::{BuildingAvailability, RoomAvailability, TimeInterval};

const SLOT_TIME_FORMAT: &str = "%H:%M:%S";

/// Drop slots that are neither ongoing nor starting within `lookahead`, then
/// drop rooms and buildings left with nothing.
#[must_use]
pub fn filter_by_time(availability: BuildingAvailability, now: NaiveDateTime, lookahead: TimeDelta) -> BuildingAvailability {
    let cutoff = now + lookahead;

    let filtered: BuildingAvailability = availability
        .into_iter()
        .filter_map(|(building_code, rooms)| {
            let rooms: RoomAvailability = rooms
                .into_iter()
                .filter_map(|(room_code, slots)| {
                    let kept: Vec<TimeInterval> = slots
                        .into_iter()
                        .filter(|slot| slot_is_relevant(slot, now, cutoff))
                        .collect();
                    (!kept.is_empty()).then_some((room_code, kept))
                })
                .collect();
            (!rooms.is_empty()).then_some((building_code, rooms))
        })
        .collect();

    tracing::info!(count = filtered.len(), "filtered buildings with upcoming or ongoing slots");
    filtered
}

/// Ongoing (`start <= now <= end`) or starting in `[now, cutoff]`.
fn slot_is_relevant(slot: &TimeInterval, now: NaiveDateTime, cutoff: NaiveDateTime) -> bool {
    let (Some(start), Some(end)) = (slot_time(&slot.start, now), slot_time(&slot.end, now)) else {
        tracing::warn!(start = %slot.start, end = %slot.end, "dropping slot with unparseable time");
        return false;
    };
    (start <= now && now <= end) || (now <= start && start <= cutoff)
}

fn slot_time(raw: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let time = NaiveTime::parse_from_str(raw, SLOT_TIME_FORMAT).ok()?;
    Some(now.date().and_time(time))
}

#[cfg(test)]
#[path = "schedule_test.rs"]
mod tests;
