use crate::core::form::{RecordForm, ValidatedRecord};
use crate::core::repository::EventRepository;
use crate::errors::AppResult;
use crate::store::audit;
use crate::ui::messages::{success, warning};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate the form, append the record and persist the table.
    ///
    /// Returns the validated record so the caller can report on it.
    pub fn apply(repo: &mut EventRepository, form: &RecordForm) -> AppResult<ValidatedRecord> {
        let validated = form.validate()?;

        if validated.is_reversed() {
            warning(format!(
                "Start {} is after finish {}: the event is stored as-is and drawn as a reversed bar.",
                validated.record.start, validated.record.finish
            ));
        }

        let rows = repo.append(validated.record.clone())?.len();

        let kind = if validated.is_milestone() {
            "Milestone"
        } else {
            "Event"
        };
        let target = if validated.record.sole.is_empty() {
            "(no identity)".to_string()
        } else {
            validated.record.sole.clone()
        };

        success(format!(
            "{kind} added for '{target}' ({} → {}); the store now holds {rows} event(s).",
            validated.record.start, validated.record.finish
        ));

        audit::ttlog_quiet(
            repo.store().path(),
            "add",
            &target,
            &format!(
                "{} {}..{} {}",
                kind, validated.record.start, validated.record.finish, validated.record.event
            ),
        );

        Ok(validated)
    }
}
