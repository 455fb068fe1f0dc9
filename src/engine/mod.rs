pub mod report;
pub mod session;

pub use report::GraphReport;
pub use report::ReportKind;
pub use report::ReportRequest;
pub use report::build_report;
pub use session::GraphSession;
