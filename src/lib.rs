pub mod cli;
pub mod config;
pub mod events;
pub mod logging;
pub mod report;
pub mod state;

pub use report::{Reporter, SummaryReporter};
pub use state::{Report, ResultCollector, RunSummary, TestOutcome, TestStatus};
