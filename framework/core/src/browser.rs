use itertools::Itertools;
use story_bench_model::prelude::BenchmarkDescriptor;

use crate::error::UnknownBrowserError;

/// The browser that benchmarks are listed for, or would be run against.
pub trait BrowserTarget {
    /// A label for the browser, such as `release` or `android-chrome`.
    fn browser_type(&self) -> &str;

    /// Tags describing the environment this browser would run in, such as the OS and browser type.
    fn expectation_tags(&self) -> anyhow::Result<Vec<String>>;

    /// Decide whether a benchmark can run on this browser, given its current expectation tags.
    ///
    /// The default checks the benchmark's supported platforms against the tags.
    fn is_benchmark_supported(
        &self,
        descriptor: &BenchmarkDescriptor,
        expectation_tags: &[String],
    ) -> anyhow::Result<bool> {
        Ok(descriptor.supported_platforms.matches(expectation_tags))
    }
}

/// A browser that could be used for a run, described by its type and platform tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PossibleBrowser {
    browser_type: String,
    platform_tags: Vec<String>,
}

impl PossibleBrowser {
    pub fn new(browser_type: &str) -> Self {
        Self {
            browser_type: browser_type.to_string(),
            platform_tags: Vec::new(),
        }
    }

    /// A browser on the host that this process is running on, tagged with the host OS.
    pub fn for_host(browser_type: &str) -> Self {
        Self::new(browser_type).with_platform_tag(std::env::consts::OS)
    }

    pub fn with_platform_tag(mut self, tag: &str) -> Self {
        self.platform_tags.push(tag.to_string());
        self
    }
}

impl BrowserTarget for PossibleBrowser {
    fn browser_type(&self) -> &str {
        &self.browser_type
    }

    fn expectation_tags(&self) -> anyhow::Result<Vec<String>> {
        if self.browser_type.trim().is_empty() {
            return Err(UnknownBrowserError::new(&self.browser_type).into());
        }

        let tags = self
            .platform_tags
            .iter()
            .chain(std::iter::once(&self.browser_type))
            .map(|t| t.to_ascii_lowercase())
            .sorted()
            .dedup()
            .collect::<Vec<_>>();
        log::trace!("Expectation tags for {}: {:?}", self.browser_type, tags);

        Ok(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use story_bench_model::prelude::SupportedPlatforms;

    #[test]
    fn expectation_tags_include_platform_and_browser_type() {
        let browser = PossibleBrowser::new("Release")
            .with_platform_tag("Linux")
            .with_platform_tag("desktop")
            .with_platform_tag("linux");

        assert_eq!(
            vec!["desktop", "linux", "release"],
            browser.expectation_tags().unwrap()
        );
    }

    #[test]
    fn host_browser_is_tagged_with_host_os() {
        let tags = PossibleBrowser::for_host("release")
            .expectation_tags()
            .unwrap();

        assert!(tags.contains(&std::env::consts::OS.to_string()));
    }

    #[test]
    fn unknown_browser_has_no_expectation_tags() {
        let err = PossibleBrowser::new(" ").expectation_tags().unwrap_err();

        assert_eq!(
            Some(&UnknownBrowserError::new(" ")),
            err.downcast_ref::<UnknownBrowserError>()
        );
        assert_eq!(
            "Browser type \" \" is unknown, cannot compute expectation tags",
            err.to_string()
        );
    }

    #[test]
    fn default_support_uses_supported_platforms() {
        let browser = PossibleBrowser::new("release").with_platform_tag("mac");
        let tags = browser.expectation_tags().unwrap();

        let anywhere = BenchmarkDescriptor::new("anywhere");
        let nowhere = BenchmarkDescriptor::new("nowhere")
            .with_supported_platforms(SupportedPlatforms::none());
        let mac_only = BenchmarkDescriptor::new("mac_only")
            .with_supported_platforms(SupportedPlatforms::only(["mac"]));
        let android_only = BenchmarkDescriptor::new("android_only")
            .with_supported_platforms(SupportedPlatforms::only(["android"]));

        assert!(browser.is_benchmark_supported(&anywhere, &tags).unwrap());
        assert!(!browser.is_benchmark_supported(&nowhere, &tags).unwrap());
        assert!(browser.is_benchmark_supported(&mac_only, &tags).unwrap());
        assert!(!browser.is_benchmark_supported(&android_only, &tags).unwrap());
    }
}
