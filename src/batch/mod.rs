// 子模組
pub mod engine;
pub mod report;

// 重新導出
pub use engine::{BatchRunner, BatchSummary};
pub use report::{load_records, print_statistics, LabelStats};
