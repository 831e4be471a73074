pub mod insights;
pub mod service;

pub use insights::RecordedInsights;
pub use service::InsightsService;
