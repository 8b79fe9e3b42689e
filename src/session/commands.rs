//! Post-login commands, detected by substring in the lowercased message.
//!
//! `COMMAND_TABLE` is evaluated top to bottom and the first rule with a
//! matching trigger wins. Because "health check" is listed before
//! "update health check" and is a substring of it, the update rule is
//! never selected from free text: both phrases start the same health
//! check and end with the "recorded" confirmation. The update rule stays
//! in the table so the priority is visible and the command remains
//! reachable through `Session::run_command`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ViewReport,
    HealthCheck,
    UpdateHealthCheck,
    DailyAdvice,
    MedicineReminder,
    DoctorAppointment,
    Exit,
}

#[derive(Debug, Clone, Copy)]
pub struct CommandRule {
    pub command: Command,
    pub triggers: &'static [&'static str],
}

pub const COMMAND_TABLE: &[CommandRule] = &[
    CommandRule {
        command: Command::ViewReport,
        triggers: &["view health report"],
    },
    CommandRule {
        command: Command::HealthCheck,
        triggers: &["health check"],
    },
    CommandRule {
        command: Command::UpdateHealthCheck,
        triggers: &["update health check"],
    },
    CommandRule {
        command: Command::DailyAdvice,
        triggers: &["daily medical advice"],
    },
    CommandRule {
        command: Command::MedicineReminder,
        triggers: &["medicine reminder"],
    },
    CommandRule {
        command: Command::DoctorAppointment,
        triggers: &["doctor appointment"],
    },
    CommandRule {
        command: Command::Exit,
        triggers: &["exit", "close"],
    },
];

impl CommandRule {
    pub fn matches(&self, message: &str) -> bool {
        self.triggers.iter().any(|t| message.contains(t))
    }
}

/// First command whose trigger appears in `message` (already lowercased).
pub fn detect(message: &str) -> Option<Command> {
    COMMAND_TABLE
        .iter()
        .find(|rule| rule.matches(message))
        .map(|rule| rule.command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_command() {
        assert_eq!(detect("view health report"), Some(Command::ViewReport));
        assert_eq!(detect("health check"), Some(Command::HealthCheck));
        assert_eq!(detect("daily medical advice"), Some(Command::DailyAdvice));
        assert_eq!(detect("set a medicine reminder"), Some(Command::MedicineReminder));
        assert_eq!(detect("book doctor appointment please"), Some(Command::DoctorAppointment));
        assert_eq!(detect("exit"), Some(Command::Exit));
        assert_eq!(detect("close the app"), Some(Command::Exit));
    }

    #[test]
    fn update_health_check_is_shadowed() {
        assert_eq!(detect("update health check"), Some(Command::HealthCheck));
    }

    #[test]
    fn view_report_outranks_exit() {
        assert_eq!(detect("view health report then exit"), Some(Command::ViewReport));
    }

    #[test]
    fn substring_match_inside_words() {
        // "closet" contains "close"
        assert_eq!(detect("my closet"), Some(Command::Exit));
    }

    #[test]
    fn unknown_message() {
        assert_eq!(detect("hello"), None);
        assert_eq!(detect("health report"), None);
    }
}
