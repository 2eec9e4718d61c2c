//! CLI command implementations
//!
//! Each command loads the config, restores the saved form, applies one
//! change, saves the form again and returns the response data. A saved
//! form that cannot be read is logged and replaced by a blank one.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};

use crate::catalog::{Catalog, Choice, SpecialFlag};
use crate::form::{FormController, FormError, InspectorField};
use crate::observability::{log_event_with_fields, Event, Logger};
use crate::report::{report_file_name, Report};
use crate::resolver::{CheckOutcome, Fact};
use crate::store::FormStore;
use crate::submit::{HttpSubmitter, OutboxSubmitter, SubmissionReceipt};

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};

/// Loaded config, store and restored form
struct Session {
    config: Config,
    store: FormStore,
    form: FormController<'static>,
}

impl Session {
    fn open(config_path: &Path) -> CliResult<Self> {
        let config = load_config(config_path)?;
        let store = FormStore::in_dir(config.data_path());
        let catalog = Catalog::builtin();

        let form = match store.load() {
            Ok(Some(snapshot)) => {
                let form = FormController::from_snapshot(catalog, snapshot);
                let answers = form.snapshot().answers.len().to_string();
                log_event_with_fields(Event::FormRestored, &[("answers", answers.as_str())]);
                form
            }
            Ok(None) => FormController::new(catalog),
            Err(e) => {
                log_event_with_fields(
                    Event::FormRestoreFailed,
                    &[("code", e.code().code()), ("error", e.message())],
                );
                FormController::new(catalog)
            }
        };

        Ok(Self {
            config,
            store,
            form,
        })
    }

    fn save(&self) -> CliResult<()> {
        match self.store.save(self.form.snapshot()) {
            Ok(()) => {
                let path = self.store.path().display().to_string();
                log_event_with_fields(Event::FormSaved, &[("path", path.as_str())]);
                Ok(())
            }
            Err(e) => {
                log_event_with_fields(
                    Event::FormSaveFailed,
                    &[("code", e.code().code()), ("error", e.message())],
                );
                Err(e.into())
            }
        }
    }

    /// Removes the saved form after a submission; a failure is logged,
    /// not returned, since the submission itself already happened.
    fn discard(&self) -> bool {
        match self.store.clear() {
            Ok(()) => true,
            Err(e) => {
                log_event_with_fields(
                    Event::FormClearFailed,
                    &[("code", e.code().code()), ("error", e.message())],
                );
                false
            }
        }
    }
}

fn load_config(config_path: &Path) -> CliResult<Config> {
    let config = Config::load(config_path)?;
    Logger::set_min_severity(config.severity()?);

    let path = config_path.display().to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("data_dir", config.data_dir.as_str()), ("path", path.as_str())],
    );
    Ok(config)
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run one command and print its response
pub fn run_command(cmd: Command) -> CliResult<()> {
    let result = match cmd {
        Command::Catalog { config } => catalog(&config),
        Command::Show { config } => show(&config),
        Command::SetFact {
            config,
            fact,
            value,
        } => set_fact(&config, &fact, &value),
        Command::Answer {
            config,
            key,
            outcome,
            clear,
        } => {
            if clear {
                clear_answer(&config, &key)
            } else {
                answer(&config, &key, outcome.as_deref().unwrap_or_default())
            }
        }
        Command::Inspector {
            config,
            field,
            value,
        } => inspector(&config, &field, &value),
        Command::Next { config, after } => next(&config, after),
        Command::Report { config, out } => report(&config, out.as_deref()),
        Command::Submit { config, yes } => submit(&config, yes),
        Command::Reset { config, yes } => reset(&config, yes),
    };

    match result {
        Ok(data) => write_response(data),
        Err(e) => {
            write_error(e.code_str(), e.message())?;
            Err(e)
        }
    }
}

/// The full catalog in display order
pub fn catalog(config_path: &Path) -> CliResult<Value> {
    load_config(config_path)?;
    let items: Vec<_> = Catalog::builtin().iter().collect();
    let classifications: Vec<Value> = [SpecialFlag::HazardPlan, SpecialFlag::SafetyPlan]
        .iter()
        .map(|flag| {
            json!({
                "flag": flag,
                "label": flag.label(),
                "qualifying_works": flag.qualifying_works(),
            })
        })
        .collect();

    Ok(json!({
        "items": serde_json::to_value(items)?,
        "special_constructions": classifications,
    }))
}

/// Saved form, active checklist and status
pub fn show(config_path: &Path) -> CliResult<Value> {
    let session = Session::open(config_path)?;
    let form = &session.form;
    let snapshot = form.snapshot();

    let active: Vec<Value> = form
        .active()
        .iter()
        .map(|entry| {
            let sub_items: Vec<&str> = entry.sub_items.iter().map(|s| s.title.as_str()).collect();
            let answers: serde_json::Map<String, Value> = entry
                .answer_keys()
                .into_iter()
                .filter_map(|key| {
                    snapshot
                        .answers
                        .get(&key)
                        .map(|outcome| (key, Value::from(outcome.label())))
                })
                .collect();
            json!({
                "key": entry.key(),
                "sub_items": sub_items,
                "answers": answers,
            })
        })
        .collect();

    Ok(json!({
        "status": form.status(),
        "facts": snapshot.facts,
        "inspector": snapshot.inspector,
        "active": active,
    }))
}

pub fn set_fact(config_path: &Path, fact: &str, value: &str) -> CliResult<Value> {
    let fact: Fact = fact.parse().map_err(FormError::UnknownFact)?;

    let mut session = Session::open(config_path)?;
    let change = session.form.set_fact(fact, value);
    session.save()?;

    Ok(json!({
        "change": change,
        "status": session.form.status(),
    }))
}

pub fn answer(config_path: &Path, key: &str, outcome: &str) -> CliResult<Value> {
    let outcome =
        CheckOutcome::parse(outcome).ok_or_else(|| FormError::UnknownOutcome(outcome.to_string()))?;

    let mut session = Session::open(config_path)?;
    let progress = session.form.record_answer(key, outcome)?;
    session.save()?;

    Ok(json!({
        "key": key,
        "outcome": outcome.label(),
        "progress": progress,
        "checklist_complete": session.form.status().checklist_complete,
    }))
}

/// Removes a recorded outcome; clearing an unanswered key is not an error
pub fn clear_answer(config_path: &Path, key: &str) -> CliResult<Value> {
    let mut session = Session::open(config_path)?;
    let cleared = session.form.clear_answer(key);
    session.save()?;

    let status = session.form.status();
    Ok(json!({
        "key": key,
        "cleared": cleared,
        "progress": status.progress,
        "checklist_complete": status.checklist_complete,
    }))
}

pub fn inspector(config_path: &Path, field: &str, value: &str) -> CliResult<Value> {
    let field: InspectorField = field.parse().map_err(FormError::UnknownField)?;

    let mut session = Session::open(config_path)?;
    session.form.set_inspector(field, value)?;
    session.save()?;

    let info = &session.form.snapshot().inspector;
    Ok(json!({
        "field": field.field_name(),
        "value": info.display(field),
        "inspector_complete": info.is_complete(),
    }))
}

/// Next incomplete item after `after`, `null` when none remain
pub fn next(config_path: &Path, after: Option<usize>) -> CliResult<Value> {
    let session = Session::open(config_path)?;
    let cursor = session.form.next_incomplete_after(after);
    Ok(json!({ "cursor": cursor }))
}

/// Renders the report, writing it to `<out>/<file name>` when given
pub fn report(config_path: &Path, out: Option<&Path>) -> CliResult<Value> {
    let session = Session::open(config_path)?;
    let snapshot = session.form.snapshot();
    let report = Report::build(session.form.catalog(), snapshot);

    let rows = report.rows.len().to_string();
    log_event_with_fields(Event::ReportRendered, &[("rows", rows.as_str())]);

    match out {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let path = dir.join(report_file_name(&snapshot.inspector.project_name));
            fs::write(&path, &report.text)?;
            Ok(json!({
                "path": path.display().to_string(),
                "rows": report.rows,
                "summary": report.summary,
            }))
        }
        None => Ok(serde_json::to_value(&report)?),
    }
}

pub fn submit(config_path: &Path, yes: bool) -> CliResult<Value> {
    if !yes {
        return Err(CliError::confirmation_required("submit"));
    }

    let mut session = Session::open(config_path)?;
    let (receipt, destination) = if session.config.endpoint.is_empty() {
        let submitter = OutboxSubmitter::new(session.config.outbox_path());
        let receipt = session.form.submit(&submitter)?;
        (receipt, submitter.path().display().to_string())
    } else {
        let submitter =
            HttpSubmitter::new(session.config.endpoint.as_str()).map_err(FormError::from)?;
        let receipt = session.form.submit(&submitter)?;
        (receipt, submitter.endpoint().to_string())
    };

    Ok(submitted(&session, receipt, destination))
}

fn submitted(session: &Session, receipt: SubmissionReceipt, destination: String) -> Value {
    let store_cleared = session.discard();
    json!({
        "receipt": receipt,
        "destination": destination,
        "store_cleared": store_cleared,
    })
}

pub fn reset(config_path: &Path, yes: bool) -> CliResult<Value> {
    if !yes {
        return Err(CliError::confirmation_required("reset"));
    }

    let mut session = Session::open(config_path)?;
    session.form.reset();
    session.store.clear()?;

    Ok(json!({ "reset": true }))
}
