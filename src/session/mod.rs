//! Conversation state machine for a single patient session.
//!
//! One `Session` owns everything a chat needs: the logged-in name, any
//! guided flow in progress, pending reminders and appointments, and the
//! process-wide collaborators (chatbot, advice, predictor, reports).
//! Every call to `handle` is synchronous; the shell drives it from one
//! thread and polls `due_notifications` for fired reminders.
//!
//! Routing order for a line of input:
//! 1. a guided flow in progress consumes it (`cancel` aborts the flow)
//! 2. "login" anywhere in the message starts name capture
//! 3. anonymous: the pattern chatbot answers, except that a bare "exit" or
//!    "close" ends the session, since a terminal has no window to close
//! 4. logged in: the first matching rule of `commands::COMMAND_TABLE`
//!
//! Cancelling name capture logs the current patient out, even when the
//! capture was started by someone already logged in.

pub mod commands;
pub mod flows;
pub mod messages;

use chrono::NaiveDateTime;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::advice::AdviceStore;
use crate::chatbot::PatternChatbot;
use crate::config::AppConfig;
use crate::models::{
    DoctorAppointment, HealthAnswers, MedicineReminder, PatientFeatures, PatientRecord,
};
use crate::predictor::{PredictorError, SharedPredictor};
use crate::report::{ReportError, ReportStore};
use crate::scheduler::{next_occurrence, Clock, Scheduler, SystemClock, TaskId};

pub use commands::Command;
use flows::{Booking, BookingFlow, BookingKind, CheckMode, HealthCheckFlow, Step};

const CANCEL_WORD: &str = "cancel";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Prediction failed: {0}")]
    Predictor(#[from] PredictorError),
    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

/// What to show the user after one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// The user asked to close the application.
    pub exit: bool,
}

impl Reply {
    fn say(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: false,
        }
    }

    fn close(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: true,
        }
    }
}

/// A fired reminder or appointment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Medicine { medicine: String },
    Appointment { doctor: String },
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Medicine { .. } => "Medicine Reminder",
            Self::Appointment { .. } => "Appointment Reminder",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Medicine { medicine } => messages::medicine_notice(medicine),
            Self::Appointment { doctor } => messages::appointment_notice(doctor),
        }
    }
}

#[derive(Debug)]
enum Flow {
    Name,
    HealthCheck(HealthCheckFlow),
    Booking(BookingFlow),
}

/// Collaborators a session is built from.
pub struct SessionDeps {
    pub chatbot: PatternChatbot,
    pub advice: AdviceStore,
    pub predictor: SharedPredictor,
    pub reports: ReportStore,
    pub clock: Box<dyn Clock>,
    pub rng: StdRng,
}

pub struct Session {
    chatbot: PatternChatbot,
    advice: AdviceStore,
    predictor: SharedPredictor,
    reports: ReportStore,
    clock: Box<dyn Clock>,
    rng: StdRng,
    patient: Option<String>,
    flow: Option<Flow>,
    reminders: Vec<MedicineReminder>,
    appointments: Vec<DoctorAppointment>,
    scheduler: Scheduler<Notice>,
}

impl Session {
    pub fn new(deps: SessionDeps) -> Self {
        Self {
            chatbot: deps.chatbot,
            advice: deps.advice,
            predictor: deps.predictor,
            reports: deps.reports,
            clock: deps.clock,
            rng: deps.rng,
            patient: None,
            flow: None,
            reminders: Vec::new(),
            appointments: Vec::new(),
            scheduler: Scheduler::new(),
        }
    }

    /// Build a live session from configuration. Loads the advice file and
    /// trains the predictor up front; failures become startup warnings
    /// for the transcript instead of aborting.
    pub fn from_config(config: &AppConfig) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();

        let (advice, advice_warning) = AdviceStore::load_or_empty(&config.advice_path);
        warnings.extend(advice_warning);

        let predictor = SharedPredictor::new(&config.dataset_path);
        if let Err(e) = predictor.get() {
            tracing::warn!(path = %config.dataset_path.display(), error = %e, "Predictor training failed");
            warnings.push(format!("Disease predictor is unavailable: {e}"));
        }

        let session = Self::new(SessionDeps {
            chatbot: PatternChatbot::default(),
            advice,
            predictor,
            reports: ReportStore::new(&config.reports_dir),
            clock: Box::new(SystemClock),
            rng: StdRng::from_entropy(),
        });
        (session, warnings)
    }

    pub fn patient_name(&self) -> Option<&str> {
        self.patient.as_deref()
    }

    pub fn reminders(&self) -> &[MedicineReminder] {
        &self.reminders
    }

    pub fn appointments(&self) -> &[DoctorAppointment] {
        &self.appointments
    }

    pub fn predictor(&self) -> &SharedPredictor {
        &self.predictor
    }

    pub fn in_flow(&self) -> bool {
        self.flow.is_some()
    }

    /// Process one line of user input. Blank input outside a flow is
    /// ignored and yields `None`.
    pub fn handle(&mut self, input: &str) -> Option<Reply> {
        let raw = input.trim();

        if let Some(flow) = self.flow.take() {
            return Some(self.continue_flow(flow, raw));
        }
        if raw.is_empty() {
            return None;
        }

        let message = raw.to_lowercase();
        if message.contains("login") {
            self.flow = Some(Flow::Name);
            return Some(Reply::say(messages::NAME_PROMPT));
        }

        if self.patient.is_none() {
            if matches!(message.as_str(), "exit" | "close") {
                return Some(Reply::close(messages::CLOSING));
            }
            return Some(Reply::say(self.chatbot.respond(&message, &mut self.rng)));
        }

        Some(match commands::detect(&message) {
            Some(command) => self.run_command(command),
            None => Reply::say(messages::NOT_UNDERSTOOD),
        })
    }

    /// Run a post-login command directly, bypassing text detection.
    pub fn run_command(&mut self, command: Command) -> Reply {
        let Some(name) = self.patient.clone() else {
            return Reply::say(messages::LOGIN_REQUIRED);
        };

        match command {
            Command::ViewReport => match self.reports.read(&name) {
                Ok(Some(report)) => Reply::say(messages::health_report(&report)),
                Ok(None) => Reply::say(messages::NO_REPORT),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read health report");
                    Reply::say(messages::report_unreadable(&e.to_string()))
                }
            },
            Command::HealthCheck => self.start_health_check(name, CheckMode::New),
            Command::UpdateHealthCheck => self.start_health_check(name, CheckMode::Update),
            Command::DailyAdvice => {
                Reply::say(messages::daily_advice(&self.advice.get_random(&mut self.rng)))
            }
            Command::MedicineReminder => self.start_booking(BookingKind::Medicine),
            Command::DoctorAppointment => self.start_booking(BookingKind::Appointment),
            Command::Exit => Reply::close(messages::CLOSING),
        }
    }

    // ═══════════════════════════════════════════
    // Guided flows
    // ═══════════════════════════════════════════

    fn start_health_check(&mut self, name: String, mode: CheckMode) -> Reply {
        let flow = HealthCheckFlow::new(name, mode);
        let text = flow.opening();
        self.flow = Some(Flow::HealthCheck(flow));
        Reply::say(text)
    }

    fn start_booking(&mut self, kind: BookingKind) -> Reply {
        let flow = BookingFlow::new(kind);
        let text = flow.opening();
        self.flow = Some(Flow::Booking(flow));
        Reply::say(text)
    }

    fn continue_flow(&mut self, flow: Flow, raw: &str) -> Reply {
        if raw.eq_ignore_ascii_case(CANCEL_WORD) {
            return match flow {
                Flow::Name => {
                    self.patient = None;
                    Reply::say(messages::LOGIN_REQUIRED)
                }
                _ => Reply::say(messages::CANCELLED),
            };
        }

        match flow {
            Flow::Name => match flows::name_step(raw) {
                Step::Done(name) => self.login(name),
                Step::Ask(text) | Step::Retry(text) => {
                    self.flow = Some(Flow::Name);
                    Reply::say(text)
                }
            },
            Flow::HealthCheck(mut check) => match check.answer(raw) {
                Step::Done(answers) => self.finish_health_check(check, answers),
                Step::Ask(text) | Step::Retry(text) => {
                    self.flow = Some(Flow::HealthCheck(check));
                    Reply::say(text)
                }
            },
            Flow::Booking(mut booking) => match booking.answer(raw) {
                Step::Done(result) => self.book(result),
                Step::Ask(text) | Step::Retry(text) => {
                    self.flow = Some(Flow::Booking(booking));
                    Reply::say(text)
                }
            },
        }
    }

    fn login(&mut self, name: String) -> Reply {
        let returning = self.reports.exists(&name);
        tracing::info!(returning, "Patient logged in");
        let text = if returning {
            messages::welcome_back(&name)
        } else {
            messages::first_visit(&name)
        };
        self.patient = Some(name);
        Reply::say(text)
    }

    fn finish_health_check(&mut self, check: HealthCheckFlow, answers: HealthAnswers) -> Reply {
        match self.save_health_check(check.patient, answers) {
            Ok(record) => {
                tracing::info!(disease = %record.prediction.disease, "Health check recorded");
                Reply::say(match check.mode {
                    CheckMode::New => messages::health_recorded(),
                    CheckMode::Update => messages::health_updated(),
                })
            }
            Err(e) => {
                tracing::error!(error = %e, "Health check failed");
                Reply::say(messages::health_check_failed(&e.to_string()))
            }
        }
    }

    /// Predict from the answers and overwrite the patient's report.
    fn save_health_check(
        &self,
        name: String,
        answers: HealthAnswers,
    ) -> Result<PatientRecord, SessionError> {
        let predictor = self.predictor.get()?;
        let prediction = predictor.predict(&PatientFeatures::from_answers(&answers))?;
        let record = PatientRecord {
            name,
            answers,
            prediction,
            recorded_at: self.clock.now(),
        };
        self.reports.write(&record)?;
        Ok(record)
    }

    fn book(&mut self, booking: Booking) -> Reply {
        let now = self.clock.now();
        match booking {
            Booking::Medicine { medicine, time } => {
                let fire_at = next_occurrence(now, time);
                let task_id = self.scheduler.schedule_at(
                    fire_at,
                    Notice::Medicine {
                        medicine: medicine.clone(),
                    },
                );
                tracing::info!(task = %task_id, %fire_at, "Medicine reminder scheduled");
                self.reminders.push(MedicineReminder {
                    task_id,
                    medicine,
                    time,
                });
                Reply::say(messages::reminder_set())
            }
            Booking::Appointment {
                doctor,
                time_text,
                time,
            } => {
                let fire_at = next_occurrence(now, time);
                let task_id = self.scheduler.schedule_at(
                    fire_at,
                    Notice::Appointment {
                        doctor: doctor.clone(),
                    },
                );
                tracing::info!(task = %task_id, %fire_at, "Doctor appointment scheduled");
                self.appointments.push(DoctorAppointment {
                    task_id,
                    doctor,
                    time_text,
                    time,
                });
                Reply::say(messages::appointment_set())
            }
            Booking::Rejected(warning) => {
                tracing::debug!("Booking rejected: malformed time");
                Reply::say(warning)
            }
        }
    }

    // ═══════════════════════════════════════════
    // Notifications
    // ═══════════════════════════════════════════

    /// Pop every reminder and appointment whose time has come.
    pub fn due_notifications(&mut self) -> Vec<Notice> {
        let due = self.scheduler.pop_due(self.clock.now());
        for task in &due {
            tracing::info!(task = %task.id, kind = task.payload.title(), "Notification fired");
            self.forget(task.id);
        }
        due.into_iter().map(|task| task.payload).collect()
    }

    /// When the next notification is due, if any is pending.
    pub fn next_notification_at(&self) -> Option<NaiveDateTime> {
        self.scheduler.next_fire_time()
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Drop a pending reminder or appointment before it fires.
    pub fn cancel_scheduled(&mut self, id: TaskId) -> bool {
        let cancelled = self.scheduler.cancel(id);
        if cancelled {
            tracing::info!(task = %id, "Notification cancelled");
            self.forget(id);
        }
        cancelled
    }

    fn forget(&mut self, id: TaskId) {
        self.reminders.retain(|r| r.task_id != id);
        self.appointments.retain(|a| a.task_id != id);
    }
}
