//! Build script for pocketdeck-boards
//!
//! Validates every `boards/*.toml` table at compile time so a broken board
//! file fails the build instead of the boot.

use std::fs;
use std::path::Path;

#[path = "build/report.rs"]
mod report;

const JOYSTICK_KINDS: [&str; 3] = ["digital", "analog", "touch"];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=boards");
    println!("cargo:rerun-if-changed=build/report.rs");

    let dir = Path::new("boards");
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: boards/ directory not readable                           ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let mut ids = Vec::new();
    let mut count = 0;
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("toml") {
            continue;
        }
        let id = validate_board(&path);
        if ids.contains(&id) {
            fail(&path, &[format!("device id '{}' is used by another board", id)]);
        }
        ids.push(id);
        count += 1;
    }

    println!("cargo:warning={} board tables validated successfully", count);
}

/// Validate one board table, returning its device id
fn validate_board(path: &Path) -> String {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => fail(path, &[format!("failed to read: {}", e)]),
    };

    let board: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            let lines: Vec<String> = e.to_string().lines().map(str::to_string).collect();
            fail(path, &lines)
        }
    };

    let mut errors = Vec::new();

    let id = board
        .get("device")
        .and_then(|d| d.get("id"))
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if id.is_empty() {
        errors.push("[device] missing 'id'".to_string());
    }
    if board.get("device").and_then(|d| d.get("name")).is_none() {
        errors.push("[device] missing 'name'".to_string());
    }

    match board
        .get("joystick")
        .and_then(|j| j.get("kind"))
        .and_then(|k| k.as_str())
    {
        None => errors.push("[joystick] missing 'kind'".to_string()),
        Some(kind) if !JOYSTICK_KINDS.contains(&kind) => errors.push(format!(
            "[joystick] kind must be 'digital', 'analog', or 'touch', not '{}'",
            kind
        )),
        Some("touch") if board.get("touch").is_none() => {
            errors.push("touch joystick requires a [touch] section".to_string())
        }
        Some(_) => {}
    }

    validate_pins(&board, &mut errors);

    if !errors.is_empty() {
        fail(path, &errors);
    }
    id
}

/// Every pin-like integer must fit a GPIO number
fn validate_pins(board: &toml::Value, errors: &mut Vec<String>) {
    const PIN_KEYS: [&str; 15] = [
        "up", "down", "left", "right", "center", "sda", "scl", "sck", "mosi", "miso", "cs", "dc",
        "reset", "backlight", "pin",
    ];

    fn walk(section: &str, value: &toml::Value, errors: &mut Vec<String>) {
        match value {
            toml::Value::Table(table) => {
                for (key, value) in table {
                    if let toml::Value::Integer(pin) = value {
                        let is_pin = PIN_KEYS.contains(&key.as_str())
                            || key.ends_with("_pin")
                            || section == "buttons";
                        if is_pin && !(0..=255).contains(pin) {
                            errors.push(format!("[{}] {} = {} is not a pin", section, key, pin));
                        }
                    }
                    walk(key, value, errors);
                }
            }
            toml::Value::Array(items) => {
                for item in items {
                    walk(section, item, errors);
                }
            }
            _ => {}
        }
    }

    walk("", board, errors);
}

fn fail(path: &Path, errors: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: Invalid board table {:<36} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        path.display(),
        errors
            .iter()
            .map(|e| report::bullet(e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
