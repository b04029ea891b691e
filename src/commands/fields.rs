use clap::{Arg, ArgMatches, Command};

use super::prompt::prompt_with_default;
use crate::error::ClubResult;
use crate::forms::{FieldSpec, FormFields};

/// One `--key <VALUE>` flag per form field.
pub fn with_field_args(mut command: Command, fields: &'static [FieldSpec]) -> Command {
    for field in fields {
        let help = if field.hint.is_empty() {
            field.label.to_string()
        } else {
            format!("{} ({})", field.label, field.hint)
        };
        command = command.arg(Arg::new(field.key).long(field.key).help(help));
    }
    command
}

/// Copy any field flags onto the form. Returns whether at least one was given.
pub fn apply_flags<F: FormFields>(form: &mut F, matches: &ArgMatches) -> bool {
    let mut any = false;
    for (index, field) in form.fields().iter().enumerate() {
        if let Some(value) = matches.get_one::<String>(field.key) {
            form.set_value(index, value.clone());
            any = true;
        }
    }
    any
}

/// Ask for every field in order, offering the current value as default.
pub fn prompt_fields<F: FormFields>(form: &mut F) -> ClubResult<()> {
    for (index, field) in form.fields().iter().enumerate() {
        let label = match (field.required, field.hint.is_empty()) {
            (true, true) => format!("{} *", field.label),
            (true, false) => format!("{} * ({})", field.label, field.hint),
            (false, true) => field.label.to_string(),
            (false, false) => format!("{} ({})", field.label, field.hint),
        };
        let answer = prompt_with_default(&label, form.value(index))?;
        form.set_value(index, answer);
    }
    Ok(())
}
