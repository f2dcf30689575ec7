//! Interactive wizard over stdin/stdout.
//!
//! Stands in for the chat transport: prompts print to stdout, reply
//! keyboards render as a box of one-tap options the user can type.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;
use std::sync::Arc;

use unicode_width::UnicodeWidthStr;

use turnover_core::record::{CsvSink, RecordSink};
use turnover_session::{KeyboardAction, SessionStore, StepResponse};

use super::pool_ops::open_pool;
use crate::jsonl::JsonlSink;

pub fn run(brands_file: &str, out: &str, jsonl: Option<&str>, user: u64) {
    let pool = Arc::new(open_pool(brands_file));
    let sink: Arc<dyn RecordSink> = match jsonl {
        Some(path) => Arc::new(JsonlSink::new(Path::new(path))),
        None => Arc::new(CsvSink::new(Path::new(out))),
    };
    let mut store = SessionStore::new(pool, sink);

    render(&dispatch(&mut store, user, "/start"));
    prompt_marker();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.unwrap_or_else(|e| {
            eprintln!("Failed to read input: {}", e);
            process::exit(1);
        });
        if line.trim() == "/quit" {
            break;
        }
        render(&dispatch(&mut store, user, &line));
        prompt_marker();
    }
}

fn dispatch(store: &mut SessionStore, user: u64, text: &str) -> StepResponse {
    store.handle_message(user, text).unwrap_or_else(|e| {
        eprintln!("Failed to append record: {}", e);
        process::exit(1);
    })
}

fn prompt_marker() {
    print!("> ");
    io::stdout().flush().ok();
}

fn render(resp: &StepResponse) {
    println!("{}", resp.reply);
    if let KeyboardAction::Show { options } = &resp.keyboard {
        // Pad by display width, not char count; brand names may be CJK.
        let width = options
            .iter()
            .map(|o| UnicodeWidthStr::width(o.as_str()))
            .max()
            .unwrap_or(0);
        println!("\u{250C}{}\u{2510}", "\u{2500}".repeat(width + 2));
        for o in options {
            let pad = width - UnicodeWidthStr::width(o.as_str());
            println!("\u{2502} {}{} \u{2502}", o, " ".repeat(pad));
        }
        println!("\u{2514}{}\u{2518}", "\u{2500}".repeat(width + 2));
    }
}
