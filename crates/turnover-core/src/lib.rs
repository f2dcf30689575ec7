pub mod fields;
pub mod history;
pub mod pool;
pub mod record;
pub mod settings;
pub mod suggest;
