use std::io::Write;

use anyhow::Context;
use serde::Serialize;
use story_bench_core::prelude::BrowserTarget;
use story_bench_model::prelude::BenchmarkDescriptor;

use crate::ascii::AsciiPrettyFormatter;
use crate::sinks::ListingSinks;

const JSON_INDENT: &[u8] = b"    ";

/// A benchmark paired with whether the browser being listed for supports it.
struct ListedBenchmark<'a> {
    descriptor: &'a BenchmarkDescriptor,
    supported: bool,
}

/// The JSON record for one benchmark. Fields are declared in key order.
#[derive(Serialize)]
struct BenchmarkInfo<'a> {
    description: &'a str,
    enabled: bool,
    name: &'a str,
    stories: Vec<StoryInfo<'a>>,
    supported: bool,
}

#[derive(Serialize)]
struct StoryInfo<'a> {
    name: &'a str,
    tags: Vec<String>,
}

impl<'a> From<&ListedBenchmark<'a>> for BenchmarkInfo<'a> {
    fn from(listed: &ListedBenchmark<'a>) -> Self {
        let descriptor = listed.descriptor;
        Self {
            description: &descriptor.description,
            enabled: descriptor.enabled,
            name: &descriptor.name,
            stories: descriptor
                .story_set
                .iter()
                .map(|story| StoryInfo {
                    name: story.name(),
                    tags: story.all_tags(),
                })
                .collect(),
            supported: listed.supported,
        }
    }
}

/// List `benchmarks` for `browser` to each sink that is set in `sinks`.
///
/// The text listing shows the benchmarks the browser supports, then the ones it does not, each
/// group in input order. The JSON listing has one record per benchmark in input order.
///
/// Errors from the browser's support checks are returned with context. Errors from a sink are
/// returned as the sink's own [std::io::Error].
pub fn print_benchmark_list(
    benchmarks: &[BenchmarkDescriptor],
    browser: &dyn BrowserTarget,
    sinks: ListingSinks<'_>,
) -> anyhow::Result<()> {
    if sinks.is_empty() {
        log::debug!("No sinks set, nothing to list");
        return Ok(());
    }

    log::debug!(
        "Listing {} benchmarks for {}",
        benchmarks.len(),
        browser.browser_type()
    );
    let listed = check_support(benchmarks, browser)?;

    let ListingSinks { text, json } = sinks;
    if let Some(sink) = text {
        let text = format_text(&listed, browser.browser_type());
        log::trace!("Writing {} bytes of text listing", text.len());
        sink.write_all(text.as_bytes())?;
        sink.flush()?;
    }
    if let Some(sink) = json {
        write_json(&listed, sink)?;
    }

    Ok(())
}

fn check_support<'a>(
    benchmarks: &'a [BenchmarkDescriptor],
    browser: &dyn BrowserTarget,
) -> anyhow::Result<Vec<ListedBenchmark<'a>>> {
    let expectation_tags = browser.expectation_tags().with_context(|| {
        format!(
            "Failed to get expectation tags for browser {}",
            browser.browser_type()
        )
    })?;

    benchmarks
        .iter()
        .map(|descriptor| -> anyhow::Result<ListedBenchmark<'a>> {
            let supported = browser
                .is_benchmark_supported(descriptor, &expectation_tags)
                .with_context(|| {
                    format!(
                        "Failed to check whether {} is supported on {}",
                        descriptor.name,
                        browser.browser_type()
                    )
                })?;
            if !supported {
                log::debug!(
                    "Benchmark {} is not supported on {}",
                    descriptor.name,
                    browser.browser_type()
                );
            }

            Ok(ListedBenchmark {
                descriptor,
                supported,
            })
        })
        .collect()
}

fn format_text(listed: &[ListedBenchmark<'_>], browser_type: &str) -> String {
    // Shared by both sections so that their description columns line up
    let width = listed
        .iter()
        .map(|b| b.descriptor.name.chars().count())
        .max()
        .unwrap_or_default();

    let (supported, unsupported): (Vec<_>, Vec<_>) = listed.iter().partition(|b| b.supported);

    let mut out = String::new();
    if !supported.is_empty() {
        out.push_str(&format!("Available benchmarks for {browser_type} are:\n"));
        for benchmark in supported {
            out.push_str(&format_row(benchmark.descriptor, width));
        }
    }

    if !unsupported.is_empty() {
        out.push_str(&format!(
            "\nNot supported benchmarks for {browser_type} are (force run with -d):\n"
        ));
        for benchmark in unsupported {
            out.push_str(&format_row(benchmark.descriptor, width));
        }
    }

    out.push_str("Pass --browser to list benchmarks for another browser.\n\n");
    out
}

fn format_row(descriptor: &BenchmarkDescriptor, width: usize) -> String {
    format!(
        "  {:<width$} {}\n",
        descriptor.name, descriptor.description
    )
}

fn write_json(listed: &[ListedBenchmark<'_>], sink: &mut dyn Write) -> std::io::Result<()> {
    let infos = listed.iter().map(BenchmarkInfo::from).collect::<Vec<_>>();

    let mut serializer = serde_json::Serializer::with_formatter(
        &mut *sink,
        AsciiPrettyFormatter::with_indent(JSON_INDENT),
    );
    // Converting back to io::Error hands the sink's own error to the caller.
    infos
        .serialize(&mut serializer)
        .map_err(std::io::Error::from)?;
    log::trace!("Wrote JSON listing of {} benchmarks", infos.len());

    sink.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use story_bench_model::prelude::{Story, StorySet};

    fn listed<'a>(
        descriptors: &'a [BenchmarkDescriptor],
        supported: &[bool],
    ) -> Vec<ListedBenchmark<'a>> {
        descriptors
            .iter()
            .zip(supported.iter().copied())
            .map(|(descriptor, supported)| ListedBenchmark {
                descriptor,
                supported,
            })
            .collect()
    }

    #[test]
    fn only_trailer_for_empty_listing() {
        assert_eq!(
            "Pass --browser to list benchmarks for another browser.\n\n",
            format_text(&[], "TestBrowser")
        );
    }

    #[test]
    fn only_unsupported_section() {
        let descriptors = [BenchmarkDescriptor::new("Nowhere").with_description("Runs nowhere.")];
        let listed = listed(&descriptors, &[false]);

        assert_eq!(
            "\n\
             Not supported benchmarks for TestBrowser are (force run with -d):\n  \
             Nowhere Runs nowhere.\n\
             Pass --browser to list benchmarks for another browser.\n\n",
            format_text(&listed, "TestBrowser")
        );
    }

    #[test]
    fn unsupported_rows_keep_input_order_after_supported_rows() {
        let descriptors = [
            BenchmarkDescriptor::new("c"),
            BenchmarkDescriptor::new("bb"),
            BenchmarkDescriptor::new("a"),
            BenchmarkDescriptor::new("dddd"),
        ];
        let listed = listed(&descriptors, &[false, true, false, true]);

        assert_eq!(
            "Available benchmarks for b are:\n  \
             bb   \n  \
             dddd \n\
             \n\
             Not supported benchmarks for b are (force run with -d):\n  \
             c    \n  \
             a    \n\
             Pass --browser to list benchmarks for another browser.\n\n",
            format_text(&listed, "b")
        );
    }

    #[test]
    fn width_counts_characters() {
        let descriptors = [
            BenchmarkDescriptor::new("défilé").with_description("x"),
            BenchmarkDescriptor::new("abc").with_description("y"),
        ];
        let listed = listed(&descriptors, &[true, true]);

        assert_eq!(
            "Available benchmarks for b are:\n  \
             défilé x\n  \
             abc    y\n\
             Pass --browser to list benchmarks for another browser.\n\n",
            format_text(&listed, "b")
        );
    }

    #[test]
    fn json_story_without_declared_tags() {
        let descriptors = [BenchmarkDescriptor::new("a")
            .with_enabled(false)
            .with_story_set(StorySet::from_stories([Story::new("page")]).unwrap())];
        let listed = listed(&descriptors, &[false]);
        let mut out = Vec::new();

        write_json(&listed, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            serde_json::json!([{
                "description": "",
                "enabled": false,
                "name": "a",
                "stories": [{ "name": "page", "tags": ["all"] }],
                "supported": false,
            }]),
            value
        );
    }

    #[test]
    fn json_empty_listing() {
        let mut out = Vec::new();

        write_json(&[], &mut out).unwrap();

        assert_eq!("[]", String::from_utf8(out).unwrap());
    }
}
