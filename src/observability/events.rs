//! Observable form events
//!
//! Every log line the crate emits names one of these.

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    ConfigLoaded,

    // Local persistence
    /// Previous form snapshot restored
    FormRestored,
    /// Stored snapshot unreadable; starting fresh
    FormRestoreFailed,
    FormSaved,
    FormSaveFailed,
    /// Submitted form could not be removed from disk
    FormClearFailed,
    /// Answers, facts and inspector data cleared
    FormReset,

    // Checklist
    FactChanged,
    /// Stale answers dropped after a fact change
    AnswersPruned,
    AnswerRecorded,
    AnswerCleared,
    AnswerRejected,
    InspectorUpdated,
    ChecklistComplete,

    // Export
    ReportRendered,
    SubmissionAttempted,
    SubmissionFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::FormRestored => "FORM_RESTORED",
            Event::FormRestoreFailed => "FORM_RESTORE_FAILED",
            Event::FormSaved => "FORM_SAVED",
            Event::FormSaveFailed => "FORM_SAVE_FAILED",
            Event::FormClearFailed => "FORM_CLEAR_FAILED",
            Event::FormReset => "FORM_RESET",
            Event::FactChanged => "FACT_CHANGED",
            Event::AnswersPruned => "ANSWERS_PRUNED",
            Event::AnswerRecorded => "ANSWER_RECORDED",
            Event::AnswerCleared => "ANSWER_CLEARED",
            Event::AnswerRejected => "ANSWER_REJECTED",
            Event::InspectorUpdated => "INSPECTOR_UPDATED",
            Event::ChecklistComplete => "CHECKLIST_COMPLETE",
            Event::ReportRendered => "REPORT_RENDERED",
            Event::SubmissionAttempted => "SUBMISSION_ATTEMPTED",
            Event::SubmissionFailed => "SUBMISSION_FAILED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::FormRestoreFailed
            | Event::FormSaveFailed
            | Event::FormClearFailed
            | Event::SubmissionFailed => Severity::Error,
            Event::AnswerRejected => Severity::Warn,
            Event::FormSaved | Event::AnswerRecorded | Event::InspectorUpdated => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
