use turnover_core::suggest::suggest;

use super::pool_ops::open_pool;

/// One-shot suggestion query against a brand list, with optional prior
/// history entries ranked first.
pub fn run(file: &str, fragment: &str, history: &[String], json: bool) {
    let pool = open_pool(file);
    let resp = suggest(&pool, history, fragment.trim());

    if json {
        let out = serde_json::json!({
            "fragment": fragment.trim(),
            "exact": resp.exact,
            "matches": resp.matches,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).expect("JSON serialization failed")
        );
        return;
    }

    if resp.matches.is_empty() {
        println!("no matches");
        return;
    }
    let fragment_lower = fragment.trim().to_lowercase();
    for m in &resp.matches {
        if m.to_lowercase() == fragment_lower {
            println!("{m} (exact)");
        } else {
            println!("{m}");
        }
    }
}
