pub mod group_count;
pub mod rank;

pub use group_count::{GroupByCounter, GroupCounts, merge_partials};
pub use rank::{RankedEntry, Ranking};
