pub mod commands;
pub mod jsonl;
