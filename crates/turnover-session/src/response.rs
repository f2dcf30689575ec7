//! Prompt texts and response builders for each wizard step.

use turnover_core::fields;
use turnover_core::record::SalesRecord;

use super::types::{KeyboardAction, StepResponse, CANCEL_LABEL, START_COMMAND};

pub(super) fn date_prompt() -> StepResponse {
    StepResponse::with_options(
        "\u{1F4C5} Enter the date (or press 'Today'):",
        vec![fields::today()],
    )
}

pub(super) fn date_error() -> StepResponse {
    StepResponse::reply("\u{274C} Invalid date. Use YYYY/MM/DD:")
}

pub(super) fn company_prompt() -> StepResponse {
    StepResponse::with_options(
        "\u{1F3E2} Enter Company Name (partial name is OK):",
        vec![CANCEL_LABEL.to_string()],
    )
}

pub(super) fn company_error() -> StepResponse {
    StepResponse::reply("\u{274C} No brand found. Try again or type 'Cancel'.")
}

pub(super) fn company_options(options: Vec<String>) -> StepResponse {
    StepResponse::with_options("\u{1F914} Choose from the suggestions or type more:", options)
}

pub(super) fn checks_prompt() -> StepResponse {
    StepResponse {
        keyboard: KeyboardAction::Remove,
        ..StepResponse::reply("\u{1F4E6} Enter the number of Sold Checks:")
    }
}

pub(super) fn count_error() -> StepResponse {
    StepResponse::reply("\u{274C} Must be a number:")
}

pub(super) fn total_prompt() -> StepResponse {
    StepResponse::reply("\u{1F4B0} Enter the Total price:")
}

pub(super) fn saved(record: SalesRecord) -> StepResponse {
    StepResponse {
        committed: Some(record),
        ..StepResponse::with_options(
            "\u{2705} Data saved! Press /start to enter another.",
            vec![START_COMMAND.to_string()],
        )
    }
}

pub(super) fn cancelled() -> StepResponse {
    StepResponse::with_options(
        "\u{274C} Cancelled. Press /start to begin again.",
        vec![START_COMMAND.to_string()],
    )
}

pub(super) fn idle_hint() -> StepResponse {
    StepResponse::with_options(
        "Press /start to begin a new entry.",
        vec![START_COMMAND.to_string()],
    )
}
