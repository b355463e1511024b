pub mod collection;
pub mod seed;
pub mod sink;
pub mod source;

pub use collection::Collection;
pub use sink::{RecordSink, SinkError, TracingSink};
pub use source::{JsonFileSource, MockRecordSource, RecordSnapshot, RecordSource};
