//! Aging of open payables and receivables.

pub mod bucket;

pub use bucket::{AgingBucket, AgingBuckets, bucket_for, days_between};
