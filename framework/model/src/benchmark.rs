use serde::{Deserialize, Serialize};

use crate::platform::SupportedPlatforms;
use crate::story::{StoryError, StorySet};

/// A benchmark that can be listed and run against a browser.
///
/// Implement this for each benchmark. Only [Benchmark::name] and [Benchmark::create_story_set] are
/// required, everything else has a default that suits most benchmarks.
pub trait Benchmark {
    /// The name of the benchmark, which should be unique among all benchmarks.
    fn name(&self) -> String;

    /// A one line, human-readable description. See [description_from_doc] to derive this from
    /// longer documentation text.
    fn description(&self) -> String {
        String::new()
    }

    /// Whether the benchmark is enabled. A benchmark that is not enabled can still be forced to run.
    fn enabled(&self) -> bool {
        true
    }

    /// The platforms this benchmark can run on. Return [SupportedPlatforms::none] for a benchmark
    /// that cannot run anywhere.
    fn supported_platforms(&self) -> SupportedPlatforms {
        SupportedPlatforms::all()
    }

    /// Build the stories this benchmark would run.
    fn create_story_set(&self) -> Result<StorySet, StoryError>;

    /// Snapshot this benchmark into a [BenchmarkDescriptor].
    fn descriptor(&self) -> Result<BenchmarkDescriptor, StoryError> {
        Ok(BenchmarkDescriptor::new(&self.name())
            .with_description(&self.description())
            .with_enabled(self.enabled())
            .with_supported_platforms(self.supported_platforms())
            .with_story_set(self.create_story_set()?))
    }
}

/// Take the first non-blank line of some documentation text as a description.
pub fn description_from_doc(doc: &str) -> String {
    doc.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Everything needed to list a benchmark, detached from the benchmark itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BenchmarkDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub enabled: bool,
    pub story_set: StorySet,
    pub supported_platforms: SupportedPlatforms,
}

impl BenchmarkDescriptor {
    /// An enabled benchmark with no description or stories, supported on all platforms.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            enabled: true,
            story_set: StorySet::new(),
            supported_platforms: SupportedPlatforms::all(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_story_set(mut self, story_set: StorySet) -> Self {
        self.story_set = story_set;
        self
    }

    pub fn with_supported_platforms(mut self, supported_platforms: SupportedPlatforms) -> Self {
        self.supported_platforms = supported_platforms;
        self
    }
}
