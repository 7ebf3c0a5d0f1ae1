pub mod config_gen;
pub mod resolve;
