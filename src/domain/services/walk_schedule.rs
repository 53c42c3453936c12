//! Walk slot rules.
//!
//! A walk must start inside the daily walking window and on a half-hour
//! boundary. These checks need no storage access and run before the
//! walker availability lookup.

use chrono::{NaiveDateTime, NaiveTime, Timelike};

/// Earliest allowed start of a walk.
pub const EARLIEST_WALK: NaiveTime = match NaiveTime::from_hms_opt(7, 0, 0) {
    Some(t) => t,
    None => panic!("invalid walking window start"),
};

/// Latest allowed start of a walk. 23:00:00 itself is bookable.
pub const LATEST_WALK: NaiveTime = match NaiveTime::from_hms_opt(23, 0, 0) {
    Some(t) => t,
    None => panic!("invalid walking window end"),
};

/// Minutes past the hour a walk may start at.
pub const SLOT_MINUTES: [u32; 2] = [0, 30];

/// Reason a walk time cannot be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleViolation {
    #[error("Walk time must be between 7:00 and 23:00")]
    OutsideWalkingHours,

    #[error("Walk time must start at the beginning or middle of an hour")]
    MisalignedSlot,
}

impl ScheduleViolation {
    /// Short label used for metrics and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleViolation::OutsideWalkingHours => "outside_walking_hours",
            ScheduleViolation::MisalignedSlot => "misaligned_slot",
        }
    }
}

/// Domain service for walk slot validation.
pub struct WalkSchedule;

impl WalkSchedule {
    /// Check a requested walk time against the slot rules.
    ///
    /// The walking window is checked first, so 06:15 reports
    /// `OutsideWalkingHours` rather than `MisalignedSlot`.
    pub fn check_slot(walk_time: NaiveDateTime) -> Result<(), ScheduleViolation> {
        let clock = walk_time.time();
        if clock < EARLIEST_WALK || clock > LATEST_WALK {
            return Err(ScheduleViolation::OutsideWalkingHours);
        }

        if !SLOT_MINUTES.contains(&clock.minute()) {
            return Err(ScheduleViolation::MisalignedSlot);
        }

        Ok(())
    }
}
