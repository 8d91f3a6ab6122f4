use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::App;
use crate::options::{ComboOption, OptionList};

fn render(app: &mut App<'_>) -> String {
	let backend = TestBackend::new(48, 16);
	let mut terminal = Terminal::new(backend).expect("terminal");
	terminal
		.draw(|frame| app.draw(frame))
		.expect("draw snapshot frame");
	buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line.trim_end().to_string());
	}
	lines.join("\n")
}

fn type_text(app: &mut App<'_>, text: &str) {
	for ch in text.chars() {
		app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
	}
}

const OPTION_VALUES: [&str; 4] = ["Apple", "Banana", "Carrot", "Durian"];

/// Option values in the order their rows appear on screen.
fn option_rows(screen: &str) -> Vec<&'static str> {
	screen
		.lines()
		.filter_map(|line| {
			let cell = line.trim_start_matches([' ', '│', '▶']);
			OPTION_VALUES
				.into_iter()
				.find(|value| cell.starts_with(value))
		})
		.collect()
}

#[test]
fn initial_render_shows_heading_placeholder_and_empty_selection() {
	let mut app = App::new(OptionList::builtin());
	let screen = render(&mut app);
	let lines: Vec<&str> = screen.lines().collect();

	assert_eq!(lines[0].trim(), "Custom Combo Box");
	assert!(lines[2].contains("type to search"), "input row: {:?}", lines[2]);
	assert!(screen.contains("Options"));
	assert_eq!(option_rows(&screen), vec!["Apple", "Banana", "Carrot", "Durian"]);
	assert!(
		lines.iter().any(|line| line.trim() == "selected option:"),
		"expected an empty selection line in:\n{screen}"
	);
	insta::assert_snapshot!("initial_screen", screen);
}

#[test]
fn selection_line_follows_on_change() {
	let mut app = App::new(OptionList::builtin());
	app.on_change("Banana");
	let screen = render(&mut app);
	assert!(screen.contains("selected option: Banana"));
	assert!(screen.contains("Banana ✓"));

	app.on_change("Apple");
	app.on_change("Durian");
	let screen = render(&mut app);
	assert!(screen.contains("selected option: Durian"));
	assert!(!screen.contains("selected option: Apple"));
}

#[test]
fn typing_filters_the_rendered_list() {
	let mut app = App::new(OptionList::builtin());
	type_text(&mut app, "an");
	let screen = render(&mut app);
	assert!(!screen.contains("type to search"));
	assert_eq!(option_rows(&screen), vec!["Banana", "Durian"]);
	assert!(screen.contains("▶ Banana"));
	insta::assert_snapshot!("screen_filtered_by_an", screen);
}

#[test]
fn rows_follow_the_order_of_the_option_list() {
	let options = OptionList::new(vec![
		ComboOption::new(9, "Durian"),
		ComboOption::new(3, "Apple"),
		ComboOption::new(5, "Carrot"),
	])
	.expect("options");
	let mut app = App::new(options);
	let screen = render(&mut app);
	assert_eq!(option_rows(&screen), vec!["Durian", "Apple", "Carrot"]);
}

#[test]
fn typed_query_uses_the_prompt_style() {
	let mut app = App::new(OptionList::builtin());
	type_text(&mut app, "ca");
	let backend = TestBackend::new(48, 16);
	let mut terminal = Terminal::new(backend).expect("terminal");
	terminal
		.draw(|frame| app.draw(frame))
		.expect("draw snapshot frame");
	let buffer = terminal.backend().buffer();
	assert_eq!(buffer[(3_u16, 2_u16)].symbol(), "c");
	assert_eq!(Some(buffer[(3_u16, 2_u16)].fg), app.theme().prompt.fg);
}

#[test]
fn unmatched_query_shows_empty_state() {
	let mut app = App::new(OptionList::builtin());
	type_text(&mut app, "zz");
	let screen = render(&mut app);
	assert!(screen.contains("No results"));
	assert!(option_rows(&screen).is_empty());
}

#[test]
fn clearing_the_query_restores_every_option() {
	let mut app = App::new(OptionList::builtin());
	type_text(&mut app, "zz");
	app.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
	app.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
	let screen = render(&mut app);
	assert_eq!(option_rows(&screen), vec!["Apple", "Banana", "Carrot", "Durian"]);
	assert!(screen.contains("type to search"));
}

#[test]
fn picking_with_keys_updates_the_screen() {
	let mut app = App::new(OptionList::builtin());
	app.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
	app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
	let screen = render(&mut app);
	assert!(screen.contains("selected option: Banana"));
	assert_eq!(app.options(), &OptionList::builtin());
}
