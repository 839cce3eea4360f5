pub mod export;
pub mod generator;
pub mod history;
pub mod log;
pub mod look;
pub mod pareto;
pub mod source;
