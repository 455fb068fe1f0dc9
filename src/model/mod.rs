pub mod category;
pub mod filter;
pub mod graph;
pub mod transaction;

pub use category::AddressCategory;
pub use category::categorize;
pub use filter::CategoryFilter;
pub use filter::CategoryFilters;
pub use filter::FilterState;
pub use filter::FlowDirection;
pub use filter::SortOption;
pub use filter::TimeRangeOption;
pub use graph::GraphEdge;
pub use graph::GraphNode;
pub use graph::ProcessedGraph;
pub use graph::TransactionGraph;
pub use transaction::AddressData;
pub use transaction::Asset;
pub use transaction::Balance;
pub use transaction::Network;
pub use transaction::Transaction;
