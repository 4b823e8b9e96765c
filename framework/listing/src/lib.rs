//! Listings of the benchmarks available for a browser, as aligned text or as JSON.

mod ascii;
mod listing;
mod sinks;

pub use listing::print_benchmark_list;
pub use sinks::ListingSinks;
