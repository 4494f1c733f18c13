use gavel_core::domain::vehicle::vehicle_type_options;

use crate::commands::CommandResult;

pub fn run() -> CommandResult {
    match serde_json::to_string_pretty(&vehicle_type_options()) {
        Ok(output) => CommandResult { exit_code: 0, output },
        Err(error) => CommandResult::failure("vehicle-types", "serialization", error.to_string(), 5),
    }
}
