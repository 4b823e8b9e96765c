mod benchmark;
mod platform;
mod story;

pub mod prelude {
    pub use crate::benchmark::{description_from_doc, Benchmark, BenchmarkDescriptor};
    pub use crate::platform::SupportedPlatforms;
    pub use crate::story::{Story, StoryError, StorySet, ALL_TAG};
}
