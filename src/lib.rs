pub mod config;
pub mod error;
pub mod lessons;
pub mod logging;
pub mod runner;

pub use config::{CliArgs, DemoConfig, DemoInputs};
pub use error::{DemoError, DemoResult};
pub use lessons::Lesson;
pub use logging::{LoggingConfig, init_logging};
pub use runner::{DemoReport, run_demo};
