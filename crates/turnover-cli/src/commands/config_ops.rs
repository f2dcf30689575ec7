use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", turnover_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        turnover_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: suggest.max_results={}, date.format={}",
        s.suggest.max_results, s.date.format
    );
}
