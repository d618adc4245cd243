//! # CLI — Calldeck Interactive Shell
//!
//! A REPL-style front end for the definition-catalog engine. Reads commands
//! from stdin, executes them against the engine, and prints results to
//! stdout. Designed for both interactive use and scripted testing (pipe
//! commands via stdin).
//!
//! ## Commands
//!
//! ```text
//! SHOW            Display the current record (label + definition)
//! NEXT            Advance the cursor per the rotation mode, label only
//! PEEK index      Display a specific record without moving the cursor
//! LIST            Print every label in the catalog
//! WATCH seconds   Drive the live tick cadence for N wall-clock seconds
//! STATS           Print engine debug info
//! EXIT / QUIT     Shut down
//! ```
//!
//! ## Configuration
//!
//! All settings are controlled via environment variables:
//!
//! ```text
//! CALLDECK_FILE   definitions file, tab-separated lines  (default: "defs.txt")
//! CALLDECK_MODE   "sequential" or "randomized"           (default: "randomized")
//! ```
//!
//! ## Example
//!
//! ```text
//! $ cargo run -p cli
//! calldeck started (records=147, mode=Randomized, file=defs.txt)
//! > SHOW
//! [swing thru]
//! ends trade, then centers trade
//! > NEXT
//! [spin the top]
//! > EXIT
//! bye
//! ```

use anyhow::{Context, Result};
use catalog::{MemResource, Resource};
use engine::{Clock, DisplaySink, Engine, RotationMode, SystemClock};
use std::io::{self, BufRead, Write};

/// Reads a configuration value from the environment, falling back to `default`.
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Display sink that prints both slots to stdout.
struct StdoutSink;

impl DisplaySink for StdoutSink {
    fn set_label(&mut self, text: &str) {
        println!("[{}]", text);
    }

    fn set_body(&mut self, text: &str) {
        if !text.is_empty() {
            println!("{}", text);
        }
    }
}

fn print_record(label: &str, body: &str) {
    println!("[{}]", label);
    if !body.is_empty() {
        println!("{}", body);
    }
}

fn show_current<R: Resource, C: Clock>(engine: &Engine<R, C>, show_def: bool) {
    if engine.total() == 0 {
        println!("(empty catalog)");
        return;
    }
    match engine.load_current(show_def) {
        Ok(record) => print_record(&record.label, &record.body),
        Err(e) => println!("ERR load failed: {}", e),
    }
}

fn main() -> Result<()> {
    // Configuration via environment variables with sensible defaults.
    //
    //  CALLDECK_FILE - definitions file, tab-separated lines (default: "defs.txt")
    //  CALLDECK_MODE - "sequential" or "randomized"          (default: "randomized")
    let file = env_or("CALLDECK_FILE", "defs.txt");
    let mode = match env_or("CALLDECK_MODE", "randomized").to_lowercase().as_str() {
        "sequential" => RotationMode::Sequential,
        _ => RotationMode::Randomized,
    };

    let bytes = std::fs::read(&file).with_context(|| format!("cannot read {}", file))?;
    let mut engine = Engine::new(MemResource::new(bytes), SystemClock, mode);

    println!(
        "calldeck started (records={}, mode={:?}, file={})",
        engine.total(),
        mode,
        file
    );
    println!("Commands: SHOW | NEXT | PEEK index | LIST | WATCH seconds | STATS | EXIT");
    print!("> ");
    io::stdout().flush().ok();

    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        if let Some(cmd) = parts.next() {
            match cmd.to_uppercase().as_str() {
                "SHOW" => show_current(&engine, true),
                "NEXT" => {
                    if engine.total() == 0 {
                        println!("(empty catalog)");
                    } else {
                        engine.advance();
                        show_current(&engine, false);
                    }
                }
                "PEEK" => match parts.next().and_then(|s| s.parse::<usize>().ok()) {
                    Some(index) => match engine.catalog().load(index, true) {
                        Ok(record) => print_record(&record.label, &record.body),
                        Err(e) => println!("ERR {}", e),
                    },
                    None => println!("ERR usage: PEEK index"),
                },
                "LIST" => {
                    for index in 0..engine.total() {
                        match engine.catalog().load(index, false) {
                            Ok(record) => println!("{:4}  {}", index, record.label),
                            Err(e) => println!("ERR load {}: {}", index, e),
                        }
                    }
                    println!("({} records)", engine.total());
                }
                "WATCH" => {
                    let secs: u64 = parts.next().and_then(|s| s.parse().ok()).unwrap_or(10);
                    let mut sink = StdoutSink;
                    for _ in 0..secs {
                        if let Err(e) = engine.on_tick(&mut sink) {
                            println!("ERR tick failed: {}", e);
                            break;
                        }
                        std::thread::sleep(std::time::Duration::from_secs(1));
                    }
                }
                "STATS" => println!("{:?}", engine),
                "EXIT" | "QUIT" => {
                    println!("bye");
                    break;
                }
                other => println!("unknown command: {}", other),
            }
        }

        print!("> ");
        io::stdout().flush().ok();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::ClockFields;

    struct TestClock(ClockFields);

    impl Clock for TestClock {
        fn now(&self) -> ClockFields {
            self.0
        }
    }

    fn noon() -> TestClock {
        TestClock(ClockFields {
            sec: 0,
            min: 0,
            hour: 12,
            mday: 3,
        })
    }

    #[test]
    fn engine_composes_from_raw_bytes() {
        let mut engine = Engine::new(
            MemResource::new(b"a\t1\nb\t2\n".to_vec()),
            noon(),
            RotationMode::Sequential,
        );
        assert_eq!(engine.total(), 2);
        assert_eq!(engine.advance(), 1);
        let record = engine.load_current(true).unwrap();
        assert_eq!(record.label, "b");
        assert_eq!(record.body, "2");
    }

    #[test]
    fn stdout_sink_accepts_both_slots() {
        let mut sink = StdoutSink;
        sink.set_label("label");
        sink.set_body("");
        sink.set_body("body");
    }

    #[test]
    fn env_or_falls_back_to_the_default() {
        assert_eq!(env_or("CALLDECK_TEST_UNSET_VAR", "fallback"), "fallback");
    }
}
