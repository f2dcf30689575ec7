pub mod config_ops;
pub mod pool_ops;
pub mod suggest_ops;
pub mod wizard_ops;
