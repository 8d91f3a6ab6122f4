use anyhow::Result;
use combo_box_tui::ComboOutcome;
use serde_json::json;

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &ComboOutcome) {
	println!("{}", format_outcome_plain(outcome));
}

fn format_outcome_plain(outcome: &ComboOutcome) -> String {
	if !outcome.accepted {
		return format!("Selection cancelled (query: '{}')", outcome.query);
	}

	match &outcome.selection {
		Some(option) => option.value.clone(),
		None => "No selection".to_string(),
	}
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &ComboOutcome) -> Result<String> {
	let selection = match &outcome.selection {
		Some(option) => json!({
			"key": option.key,
			"value": option.value,
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &ComboOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
