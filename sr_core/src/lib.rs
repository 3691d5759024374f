pub mod analyzer;
pub mod chart;
pub mod common;
pub mod config;
pub mod math;

pub use analyzer::analyzer::{analyze, Analyzer};
pub use analyzer::result::AnalysisResult;
pub use chart::chart_data::ChartData;
pub use common::sr_exception::{ErrCode, SrException};
pub use config::sr_config::SrConfig;
