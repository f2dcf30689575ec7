use std::path::Path;
use std::process;

use turnover_core::pool::BrandPool;

pub fn open_pool(file: &str) -> BrandPool {
    BrandPool::open(Path::new(file)).unwrap_or_else(|e| {
        eprintln!("Failed to open brand list at {}: {}", file, e);
        process::exit(1);
    })
}

/// Load a brand list and report diagnostics.
pub fn check(file: &str) {
    let pool = open_pool(file);
    println!("OK: {} brands", pool.len());

    let dups = pool.duplicates();
    if !dups.is_empty() {
        println!("warning: {} duplicate entries", dups.len());
        for d in dups {
            println!("  {d}");
        }
    }
}
