pub mod builder;
pub mod filter;
pub mod metrics;
pub mod processor;
pub mod transaction;

pub use builder::build_edges;
pub use builder::build_nodes;
pub use filter::apply_filters;
pub use metrics::EdgeMetrics;
pub use processor::GraphProcessor;
pub use transaction::TransactionFilterPipeline;
