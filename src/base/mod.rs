mod aggregate;
mod aggregator;
mod amount;
mod charset;
mod code;
mod config;
pub mod drill;
mod drillrow;
mod filter;
pub mod fs;
mod level;
mod metric;
mod names;
mod nodeset;
mod roottable;
mod source;
pub mod tree;

pub use aggregate::Aggregate;
pub use aggregator::Aggregator;
#[cfg(test)]
pub use aggregator::Bucket;
pub use aggregator::Buckets;
pub use amount::Amount;
pub use charset::Charset;
pub use code::ClassificationCode;
pub use code::Depth;
pub use config::Config;
pub use drill::DrillController;
pub use drill::DrillError;
pub use drill::Expansion;
pub use drillrow::DrillRow;
pub use filter::MetricFilter;
pub use filter::MetricQuery;
pub use filter::PaidInputs;
pub use fs::Fs;
pub use level::DetailLevel;
pub use level::DrillLevel;
pub use level::Grouping;
pub use metric::Metric;
pub use names::ClassificationNames;
pub use names::NameTable;
pub use nodeset::MetricNode;
pub use nodeset::MetricNodeSet;
pub use roottable::RootTable;
pub use roottable::RowSlot;
pub use roottable::SortColumn;
pub use roottable::TableNode;
pub use source::FsSource;
pub use source::MetricSource;
pub use source::SourceError;
pub use tree::Tree;
