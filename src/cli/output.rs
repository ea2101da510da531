use colored::*;
use serde_json::Value;
use std::io::{self, BufRead, Write};

pub fn print_text(text: &str) {
    println!(" {}", text.bright_cyan());
}

pub fn print_blank() {
    println!();
}

pub fn print_error(text: &str) {
    eprintln!(" {}", text.bright_red());
}

/// Prints `message` and reads one line from stdin, without the newline.
pub fn prompt(message: &str) -> io::Result<String> {
    print!(" {}", message.bright_yellow());
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Prints each line, turning empty lines into separators.
pub fn print_lines(lines: &[String]) {
    for line in lines {
        if line.is_empty() {
            print_blank();
        } else {
            print_text(line);
        }
    }
}

/// Renders `key: value` as `> key: value` lines, two spaces per indent level.
/// Objects print their key alone and recurse two levels deeper.
pub fn nested_lines(key: &str, value: &Value, indent: usize) -> Vec<String> {
    let prefix = "  ".repeat(indent);

    match value {
        Value::Object(map) => {
            let mut lines = vec![format!("{prefix}> {key}:")];
            for (sub_key, sub_value) in map {
                lines.extend(nested_lines(sub_key, sub_value, indent + 2));
            }
            lines
        }
        _ => vec![format!("{prefix}> {key}: {}", scalar(value))],
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "none".to_string(),
        other => other.to_string(),
    }
}
