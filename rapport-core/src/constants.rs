/// Reminder window used when an event has no `reminder_days` of its own.
pub const DEFAULT_REMINDER_DAYS: u32 = 7;

/// Listings emphasise events whose next occurrence is at most this many days away.
pub const HIGHLIGHT_DAYS: i64 = 7;
