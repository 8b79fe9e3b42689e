use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;
use thiserror::Error;

use crate::scheduler::TaskId;

static REMINDER_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-2][0-9]:[0-5][0-9]$").expect("valid regex"));

static APPOINTMENT_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2} [APap][Mm]$").expect("valid regex"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("'{0}' is not in HH:MM format")]
    BadReminderFormat(String),

    #[error("'{0}' is not in HH:MM AM/PM format")]
    BadAppointmentFormat(String),

    #[error("'{0}' is not a valid time of day")]
    OutOfRange(String),
}

/// Parse a 24-hour `HH:MM` reminder time.
pub fn parse_reminder_time(input: &str) -> Result<NaiveTime, TimeParseError> {
    let input = input.trim();
    if !REMINDER_TIME.is_match(input) {
        return Err(TimeParseError::BadReminderFormat(input.into()));
    }
    NaiveTime::parse_from_str(input, "%H:%M")
        .map_err(|_| TimeParseError::OutOfRange(input.into()))
}

/// Parse a 12-hour `HH:MM AM/PM` appointment time.
pub fn parse_appointment_time(input: &str) -> Result<NaiveTime, TimeParseError> {
    let input = input.trim();
    if !APPOINTMENT_TIME.is_match(input) {
        return Err(TimeParseError::BadAppointmentFormat(input.into()));
    }
    NaiveTime::parse_from_str(&input.to_ascii_uppercase(), "%I:%M %p")
        .map_err(|_| TimeParseError::OutOfRange(input.into()))
}

/// A single-shot medicine reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicineReminder {
    pub task_id: TaskId,
    pub medicine: String,
    pub time: NaiveTime,
}

/// A single-shot doctor appointment notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorAppointment {
    pub task_id: TaskId,
    pub doctor: String,
    /// The time as the patient typed it, e.g. "03:30 PM".
    pub time_text: String,
    pub time: NaiveTime,
}
