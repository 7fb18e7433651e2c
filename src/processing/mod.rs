//! Pure sequence transforms.
//!
//! Every function takes a slice, never mutates it, and returns a freshly allocated container.
//! Absent input is just the empty slice (`Option<&[T]>::unwrap_or_default()`), so "nil" and
//! "empty" behave the same everywhere.
//!
//! Currently implemented:
//!
//! - [`map()`], [`map_with_index()`], [`flat_map()`]: element mapping
//! - [`map_e()`], [`map_with_index_e()`], [`try_map_indexed()`]: fallible mapping with
//!   short-circuit on the first error
//! - [`filter()`], [`foreach()`]: filtering and side-effect iteration
//! - [`uniq()`]: deduplication in first-occurrence order
//! - [`group_by()`], [`group_by_uniq()`]: grouping into a `HashMap`
//! - [`chunk()`], [`chunk_slices()`]: fixed-size partitioning
//!
//! ## Example: filter → map → chunk
//!
//! ```rust
//! use seq_transforms::processing::{chunk, filter, map};
//!
//! let nums = [1, 2, 3, 4, 5, 6, 7];
//! let odd = filter(&nums, |n| n % 2 == 1);
//! let labels = map(&odd, |n| format!("n{n}"));
//! assert_eq!(chunk(&labels, 3), vec![vec!["n1", "n3", "n5"], vec!["n7"]]);
//! ```

pub mod chunk;
pub mod filter;
pub mod group;
pub mod map;
pub mod uniq;

pub use chunk::{chunk, chunk_slices};
pub use filter::{filter, foreach};
pub use group::{group_by, group_by_uniq};
pub use map::{flat_map, map, map_e, map_with_index, map_with_index_e, try_map_indexed};
pub use uniq::uniq;
