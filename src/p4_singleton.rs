// Pattern 4: Singleton Pattern - Initialization-Once Process State
// Explicit process-wide state built through a guarded lazy initializer.
// OnceLock replaces the double-checked-locking dance: the instance is
// constructed at most once even when two threads race to first-request it,
// and every thread observes the same instance afterwards.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};
use std::thread;
use std::time::Duration;

use colored::Colorize;
use lazy_static::lazy_static;

// ============================================================================
// OnceLock singleton
// ============================================================================

struct AppSettings {
    label: String,
    debug_mode: bool,
}

impl AppSettings {
    /// First caller wins: its `label` becomes the process-wide value and
    /// every later call returns the same instance untouched.
    fn instance(label: &str) -> &'static AppSettings {
        static SETTINGS: OnceLock<AppSettings> = OnceLock::new();
        SETTINGS.get_or_init(|| AppSettings {
            label: label.to_string(),
            debug_mode: cfg!(debug_assertions),
        })
    }
}

fn race_for_instance() {
    let spawn = |label: &'static str| {
        thread::spawn(move || {
            // Emulates slow startup so both threads reach the lock together.
            thread::sleep(Duration::from_millis(50));
            AppSettings::instance(label).label.clone()
        })
    };

    let foo = spawn("FOO");
    let bar = spawn("BAR");

    let seen_foo = foo.join().unwrap();
    let seen_bar = bar.join().unwrap();

    println!("thread one saw: {seen_foo}");
    println!("thread two saw: {seen_bar}");
    if seen_foo == seen_bar {
        println!("{}", "same value: the instance was reused".green());
    } else {
        println!("{}", "different values: two instances were created".red());
    }
}

// ============================================================================
// lazy_static registry (mutable process-wide state behind a Mutex)
// ============================================================================

lazy_static! {
    static ref COUNTERS: Mutex<HashMap<String, u64>> = Mutex::new(HashMap::new());
}

fn increment(name: &str) -> u64 {
    let mut counters = COUNTERS.lock().unwrap();
    let count = counters.entry(name.to_string()).or_insert(0);
    *count += 1;
    *count
}

fn count(name: &str) -> u64 {
    COUNTERS.lock().unwrap().get(name).copied().unwrap_or(0)
}

fn main() {
    println!("{}", "Pattern 4: Singleton Pattern".bold());
    println!("============================\n");

    println!("{}", "=== OnceLock settings ===".green());
    let label = std::env::var("APP_LABEL").unwrap_or_else(|_| "FOO".to_string());
    let settings = AppSettings::instance(&label);
    println!("label: {}", settings.label);
    println!("debug_mode: {}", settings.debug_mode);

    let again = AppSettings::instance("ignored");
    println!("same instance: {}", std::ptr::eq(settings, again));

    println!("\n{}", "=== Two threads race for it ===".green());
    race_for_instance();

    println!("\n{}", "=== lazy_static counter registry ===".green());
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| increment("demo.presses")))
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    println!("demo.presses = {}", count("demo.presses"));
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // The OnceLock static is shared by every test in this binary, so the
    // assertions stay agnostic about which label won initialization.

    #[test]
    fn repeated_access_yields_the_same_instance() {
        let first = AppSettings::instance("A");
        let second = AppSettings::instance("B");
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn racing_threads_observe_one_value() {
        let spawn = |label: &'static str| {
            thread::spawn(move || AppSettings::instance(label) as *const AppSettings as usize)
        };

        let one = spawn("FOO");
        let two = spawn("BAR");

        let addr_one = one.join().unwrap();
        let addr_two = two.join().unwrap();
        assert_eq!(addr_one, addr_two);

        let label = &AppSettings::instance("later").label;
        assert!(["A", "B", "FOO", "BAR", "later"].contains(&label.as_str()));
    }

    #[test]
    fn counter_registry_accumulates_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| increment("test.hits")))
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(count("test.hits"), 8);
    }

    #[test]
    fn unknown_counter_reads_zero() {
        assert_eq!(count("test.never-touched"), 0);
    }
}
