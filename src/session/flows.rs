//! Guided multi-step prompts. Each flow is a small state machine fed one
//! line at a time; invalid answers re-ask the same question.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;

use super::messages;
use crate::models::{
    parse_appointment_time, parse_reminder_time, Gender, HealthAnswers, Level, YesNo,
};

static VALID_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z ]+$").expect("valid regex"));

/// Oldest age accepted by the health check.
pub const MAX_AGE: u32 = 150;

/// Result of feeding one answer to a flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    /// Ask this next.
    Ask(String),
    /// Answer rejected; show this and wait for another.
    Retry(String),
    /// Flow finished.
    Done(T),
}

// ═══════════════════════════════════════════
// Name capture
// ═══════════════════════════════════════════

/// Letters and spaces only, not blank.
pub fn validate_name(input: &str) -> Option<String> {
    let name = input.trim();
    if !name.is_empty() && VALID_NAME.is_match(name) {
        Some(name.to_string())
    } else {
        None
    }
}

pub fn name_step(input: &str) -> Step<String> {
    match validate_name(input) {
        Some(name) => Step::Done(name),
        None => Step::Retry(messages::reprompt(
            messages::INVALID_NAME,
            messages::NAME_PROMPT,
        )),
    }
}

// ═══════════════════════════════════════════
// Health check
// ═══════════════════════════════════════════

/// Which confirmation to show when the check completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMode {
    New,
    Update,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Question {
    DayNote,
    Fever,
    Cough,
    Fatigue,
    DifficultyBreathing,
    Age,
    Gender,
    BloodPressure,
    Cholesterol,
}

impl Question {
    fn prompt(self) -> &'static str {
        match self {
            Self::DayNote => "How did your day go?",
            Self::Fever => "Do you have any Fever? (yes/no)",
            Self::Cough => "Do you have any Cough? (yes/no)",
            Self::Fatigue => "Do you have any Fatigue? (yes/no)",
            Self::DifficultyBreathing => "Do you have any Difficulty Breathing? (yes/no)",
            Self::Age => "What is your Age? (Answer)",
            Self::Gender => "What is your Gender? (male/female)",
            Self::BloodPressure => "What is your Blood Pressure? (low | normal | high)",
            Self::Cholesterol => "What is your Cholesterol Level? (low | normal | high)",
        }
    }

    fn next(self) -> Option<Self> {
        Some(match self {
            Self::DayNote => Self::Fever,
            Self::Fever => Self::Cough,
            Self::Cough => Self::Fatigue,
            Self::Fatigue => Self::DifficultyBreathing,
            Self::DifficultyBreathing => Self::Age,
            Self::Age => Self::Gender,
            Self::Gender => Self::BloodPressure,
            Self::BloodPressure => Self::Cholesterol,
            Self::Cholesterol => return None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct HealthCheckFlow {
    pub patient: String,
    pub mode: CheckMode,
    question: Question,
    answers: HealthAnswers,
}

impl HealthCheckFlow {
    pub fn new(patient: impl Into<String>, mode: CheckMode) -> Self {
        Self {
            patient: patient.into(),
            mode,
            question: Question::DayNote,
            answers: HealthAnswers::default(),
        }
    }

    /// Text that opens the flow.
    pub fn opening(&self) -> String {
        format!("{}\n{}", messages::HEALTH_CHECK_INTRO, self.question.prompt())
    }

    pub fn prompt(&self) -> &'static str {
        self.question.prompt()
    }

    pub fn answer(&mut self, input: &str) -> Step<HealthAnswers> {
        let input = input.trim();
        if let Err(warning) = self.record(input) {
            return Step::Retry(messages::reprompt(warning, self.question.prompt()));
        }
        match self.question.next() {
            Some(next) => {
                self.question = next;
                Step::Ask(next.prompt().to_string())
            }
            None => Step::Done(std::mem::take(&mut self.answers)),
        }
    }

    fn record(&mut self, input: &str) -> Result<(), &'static str> {
        let a = &mut self.answers;
        match self.question {
            Question::DayNote => a.day_note = input.to_string(),
            Question::Fever => a.fever = yes_no(input)?,
            Question::Cough => a.cough = yes_no(input)?,
            Question::Fatigue => a.fatigue = yes_no(input)?,
            Question::DifficultyBreathing => a.difficulty_breathing = yes_no(input)?,
            Question::Age => {
                a.age = input
                    .parse::<u32>()
                    .ok()
                    .filter(|age| *age <= MAX_AGE)
                    .ok_or(messages::INVALID_NUMBER)?
            }
            Question::Gender => {
                a.gender = Gender::from_str(input)
                    .map_err(|_| messages::INVALID_GENDER)?
                    .as_str()
                    .to_string()
            }
            Question::BloodPressure => {
                a.blood_pressure = level(
                    input,
                    "Please enter only 'low' or 'normal' or 'high' for blood pressure",
                )?
            }
            Question::Cholesterol => {
                a.cholesterol = level(
                    input,
                    "Please enter only 'low' or 'normal' or 'high' for cholesterol level",
                )?
            }
        }
        Ok(())
    }
}

fn yes_no(input: &str) -> Result<String, &'static str> {
    YesNo::from_str(input)
        .map(|v| v.as_str().to_string())
        .map_err(|_| messages::INVALID_YES_NO)
}

fn level(input: &str, warning: &'static str) -> Result<String, &'static str> {
    Level::from_str(input)
        .map(|v| v.as_str().to_string())
        .map_err(|_| warning)
}

// ═══════════════════════════════════════════
// Medicine reminder / doctor appointment
// ═══════════════════════════════════════════

/// What a completed reminder or appointment flow produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Booking {
    Medicine { medicine: String, time: NaiveTime },
    Appointment { doctor: String, time_text: String, time: NaiveTime },
    /// Time was malformed; nothing is scheduled.
    Rejected(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingKind {
    Medicine,
    Appointment,
}

#[derive(Debug, Clone)]
pub struct BookingFlow {
    kind: BookingKind,
    /// Medicine or doctor name once given.
    subject: Option<String>,
}

impl BookingFlow {
    pub fn new(kind: BookingKind) -> Self {
        Self {
            kind,
            subject: None,
        }
    }

    pub fn opening(&self) -> &'static str {
        match self.kind {
            BookingKind::Medicine => messages::MEDICINE_PROMPT,
            BookingKind::Appointment => messages::DOCTOR_PROMPT,
        }
    }

    pub fn answer(&mut self, input: &str) -> Step<Booking> {
        let input = input.trim();
        let Some(subject) = self.subject.clone() else {
            if input.is_empty() {
                let (warning, prompt) = match self.kind {
                    BookingKind::Medicine => (messages::MEDICINE_REQUIRED, messages::MEDICINE_PROMPT),
                    BookingKind::Appointment => (messages::DOCTOR_REQUIRED, messages::DOCTOR_PROMPT),
                };
                return Step::Retry(messages::reprompt(warning, prompt));
            }
            self.subject = Some(input.to_string());
            return Step::Ask(
                match self.kind {
                    BookingKind::Medicine => messages::REMINDER_TIME_PROMPT,
                    BookingKind::Appointment => messages::APPOINTMENT_TIME_PROMPT,
                }
                .to_string(),
            );
        };

        Step::Done(match self.kind {
            BookingKind::Medicine => match parse_reminder_time(input) {
                Ok(time) => Booking::Medicine {
                    medicine: subject,
                    time,
                },
                Err(_) => Booking::Rejected(messages::INVALID_REMINDER_TIME),
            },
            BookingKind::Appointment => match parse_appointment_time(input) {
                Ok(time) => Booking::Appointment {
                    doctor: subject,
                    time_text: input.to_string(),
                    time,
                },
                Err(_) => Booking::Rejected(messages::INVALID_APPOINTMENT_TIME),
            },
        })
    }
}
