// Pattern 1: Singleton - One Instance, Global Access Point
// Demonstrates lazily initialized process-wide instances with OnceLock.

use chrono::Local;
use colored::Colorize;
use std::sync::{Mutex, OnceLock};

// ============================================================================
// Example: Shared Application State
// ============================================================================

struct AppState {
    value: Mutex<i64>,
}

impl AppState {
    fn global() -> &'static AppState {
        static INSTANCE: OnceLock<AppState> = OnceLock::new();
        INSTANCE.get_or_init(|| AppState {
            value: Mutex::new(0),
        })
    }

    fn set_value(&self, value: i64) {
        *self.value.lock().unwrap() = value;
    }

    fn value(&self) -> i64 {
        *self.value.lock().unwrap()
    }
}

fn app_state_example() {
    let first = AppState::global();
    let second = AppState::global();

    first.set_value(10);

    // `second` was never assigned to, yet it observes the write.
    println!("Value through first handle: {}", first.value());
    println!("Value through second handle: {}", second.value());

    if std::ptr::eq(first, second) {
        println!("{}", "✓ both handles point to the same instance".green());
    } else {
        println!("{}", "✗ handles diverged".red());
    }
}

// ============================================================================
// Example: Logger Singleton
// ============================================================================

struct Logger {
    history: Mutex<Vec<String>>,
}

impl Logger {
    fn global() -> &'static Logger {
        static INSTANCE: OnceLock<Logger> = OnceLock::new();
        INSTANCE.get_or_init(|| Logger {
            history: Mutex::new(Vec::new()),
        })
    }

    fn log(&self, message: &str) {
        let line = format!("[{}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), message);
        println!("{line}");
        self.history.lock().unwrap().push(line);
    }

    fn history(&self) -> Vec<String> {
        self.history.lock().unwrap().clone()
    }
}

fn logger_example() {
    let logger = Logger::global();
    logger.log("This is the first message");

    // A "second" logger is the same logger.
    let other = Logger::global();
    other.log("This is the second message");

    println!(
        "One shared history, {} entries so far",
        logger.history().len()
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_single_instance() {
        let first = AppState::global();
        let second = AppState::global();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_value_visible_through_every_handle() {
        AppState::global().set_value(42);
        assert_eq!(AppState::global().value(), 42);
    }

    #[test]
    fn test_logger_is_single_instance() {
        assert!(std::ptr::eq(Logger::global(), Logger::global()));
    }

    #[test]
    fn test_logger_accumulates_history() {
        Logger::global().log("history marker");
        let history = Logger::global().history();
        assert!(history.iter().any(|line| line.contains("history marker")));
        // Every line carries a timestamp prefix.
        assert!(history.iter().all(|line| line.starts_with('[')));
    }
}

fn main() {
    println!("Pattern 1: Singleton");
    println!("====================\n");

    println!("=== Shared Application State ===");
    app_state_example();
    println!();

    println!("=== Logger Singleton ===");
    logger_example();
}
