//! Fixed reply texts.

pub const GREETING: &str =
    "Hi! I am Your Virtual AI Doctor, What can I help you with today? You can type 'login' for Medical Assistant 🧑‍⚕️";

pub const OPTIONS_RETURNING: &str = "(Options: view health report, update health check, daily medical advice, medicine reminder, doctor appointment, exit)";
pub const OPTIONS_NEW: &str =
    "(Options: health check, daily medical advice, medicine reminder, doctor appointment, exit)";

pub const NAME_PROMPT: &str = "Please enter your name:";
pub const INVALID_NAME: &str = "Please enter a valid name without numbers or special characters.";
pub const LOGIN_REQUIRED: &str = "Please enter your name to log in.";

pub const NO_REPORT: &str = "No health report found. Please complete a health check first before viewing your health report.\nType 'health check' to get started.";
pub const NOT_UNDERSTOOD: &str = "I'm sorry, I didn't understand that. Could you try rephrasing?";
pub const CLOSING: &str = "Closing the application. Have a great day! 👋";
pub const CANCELLED: &str = "Okay, I've stopped that.";

pub const HEALTH_CHECK_INTRO: &str =
    "Let's start your health check (type 'cancel' at any time to stop).";
pub const INVALID_YES_NO: &str = "Please enter 'yes' or 'no'.";
pub const INVALID_NUMBER: &str = "Please enter a valid number.";
pub const INVALID_GENDER: &str = "Please enter 'male' or 'female'.";

pub const MEDICINE_PROMPT: &str = "Enter the name of the medicine 💊:";
pub const MEDICINE_REQUIRED: &str = "Please enter a medicine name.";
pub const REMINDER_TIME_PROMPT: &str = "Enter the reminder time (HH:MM)⏰:";
pub const INVALID_REMINDER_TIME: &str =
    "Please enter a valid time in HH:MM format. The reminder was not set.";

pub const DOCTOR_PROMPT: &str = "Enter the doctor name 👨‍⚕️:";
pub const DOCTOR_REQUIRED: &str = "Please enter the doctor's name.";
pub const APPOINTMENT_TIME_PROMPT: &str = "Enter the appointment time (HH:MM AM/PM)⏰:";
pub const INVALID_APPOINTMENT_TIME: &str =
    "Please enter a valid time in HH:MM AM/PM format. The appointment was not scheduled.";

pub fn welcome_back(name: &str) -> String {
    format!("Welcome back, {name}!\nWhat would you like to do today?\n{OPTIONS_RETURNING}")
}

pub fn first_visit(name: &str) -> String {
    format!("Hello {name}, it seems you're new here.\nWhat would you like to explore today?\n{OPTIONS_NEW}")
}

pub fn health_recorded() -> String {
    format!("Thank you for providing your details. Your health data has been recorded 😊.\nExplore more options:\n{OPTIONS_RETURNING}")
}

pub fn health_updated() -> String {
    format!("Your health check details have been updated 😊.\nWhat would you like to do next?\n{OPTIONS_RETURNING}")
}

pub fn reminder_set() -> String {
    format!("Medicine reminder has been set 👍.\nWhat would you like to do next?\n{OPTIONS_RETURNING}")
}

pub fn appointment_set() -> String {
    format!("Doctor appointment has been scheduled 👍.\nWhat would you like to do next?\n{OPTIONS_RETURNING}")
}

pub fn health_report(report: &str) -> String {
    format!("Here is your health report:\n\n{report}")
}

pub fn daily_advice(advice: &str) -> String {
    format!("Here's a piece of medical advice for you:\n\n{advice}")
}

/// A warning followed by the question being asked again.
pub fn reprompt(warning: &str, prompt: &str) -> String {
    format!("{warning}\n{prompt}")
}

pub fn health_check_failed(error: &str) -> String {
    format!("Sorry, I could not complete your health check: {error}\nPlease try again later.")
}

pub fn report_unreadable(error: &str) -> String {
    format!("Sorry, I could not open your health report: {error}")
}

pub fn medicine_notice(medicine: &str) -> String {
    format!("Time to take your medicine: {medicine}")
}

pub fn appointment_notice(doctor: &str) -> String {
    format!("You have an appointment with Dr. {doctor}.")
}
