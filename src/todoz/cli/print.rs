use colored::*;
use todoz::api::{CmdMessage, CmdResult, MessageLevel};
use todoz::config::TodozConfig;
use todoz::index::DisplayTodo;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const DONE_MARKER: &str = "✓";
const EMPTY_LIST: &str = "No todos here yet.";

/// Prints a listing followed by the remaining count.
pub fn print_listing(result: &CmdResult) {
    print_todos(&result.listed_todos);
    print_messages(&result.messages);
    print_remaining(result.remaining);
}

/// Prints what a non-listing command produced: a location, a config, and
/// its messages.
pub fn print_result(result: &CmdResult) {
    if let Some(location) = &result.location {
        println!("{}", location);
    }
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    print_remaining(result.remaining);
}

fn print_remaining(remaining: Option<usize>) {
    if let Some(remaining) = remaining {
        println!("{}", format!("{} remaining", remaining).dimmed());
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_config(config: &TodozConfig) {
    for key in TodozConfig::KEYS {
        if let Ok(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn print_todos(todos: &[DisplayTodo]) {
    if todos.is_empty() {
        println!("{}", EMPTY_LIST.dimmed());
        return;
    }

    let idx_width = todos
        .iter()
        .map(|dt| dt.index.to_string().len())
        .max()
        .unwrap_or(1);

    for dt in todos {
        let idx_str = format!("{:>width$}. ", dt.index, width = idx_width);
        let marker = if dt.todo.completed {
            format!("[{}] ", DONE_MARKER)
        } else {
            "[ ] ".to_string()
        };

        let available = LINE_WIDTH.saturating_sub(idx_str.width() + marker.width() + 2);
        let text = truncate_to_width(&dt.todo.text, available);

        if dt.todo.completed {
            println!(
                "  {}{}{}",
                idx_str.dimmed(),
                marker.green(),
                text.dimmed().strikethrough()
            );
        } else {
            println!("  {}{}{}", idx_str.yellow(), marker, text);
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let c = if c == '\n' { ' ' } else { c };
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
