pub mod classifier;
pub mod config;
pub mod digits;
pub mod input;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod validator;
