//! Reading the CSV files that describe a building

mod de;
mod parser;
mod processor;
mod raw_types;

pub use parser::deserialize_feed_file;
pub use processor::{directory_from_feed, topology_from_feed};
pub use raw_types::{FeedEdge, FeedNode, FeedPromotion, FeedStore};
