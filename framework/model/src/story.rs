use std::collections::BTreeSet;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The tag every story carries, whether or not it was declared.
pub const ALL_TAG: &str = "all";

/// The longest tag a story may declare.
const MAX_TAG_LEN: usize = 50;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoryError {
    #[error("Invalid tag string: {tag:?}. Tags can only contain alphanumeric and underscore characters")]
    InvalidTag { tag: String },
    #[error("Invalid tag string: {tag:?}. Tags can have at most 50 characters")]
    TagTooLong { tag: String },
    #[error("Story names must be unique within a story set, found duplicate: {name}")]
    DuplicateStoryName { name: String },
}

/// A single scenario a benchmark runs, usually a page to load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Story {
    name: String,
    url: Option<String>,
    tags: BTreeSet<String>,
}

impl Story {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            url: None,
            tags: BTreeSet::new(),
        }
    }

    /// Create a story for a page, named after its URL.
    pub fn from_url(url: &str) -> Self {
        Self::new(url).with_url(url)
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    /// Declare tags for this story. Every tag is validated before any is added.
    pub fn with_tags<I, S>(mut self, tags: I) -> Result<Self, StoryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags = tags.into_iter().map(Into::into).collect::<Vec<String>>();
        for tag in &tags {
            validate_tag(tag)?;
        }
        self.tags.extend(tags);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// The declared tags, without the implicit [ALL_TAG].
    pub fn declared_tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// The declared tags plus [ALL_TAG], sorted ascending.
    pub fn all_tags(&self) -> Vec<String> {
        self.tags
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(ALL_TAG))
            .sorted()
            .dedup()
            .map(str::to_string)
            .collect()
    }
}

fn validate_tag(tag: &str) -> Result<(), StoryError> {
    if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(StoryError::InvalidTag {
            tag: tag.to_string(),
        });
    }

    if tag.chars().count() > MAX_TAG_LEN {
        return Err(StoryError::TagTooLong {
            tag: tag.to_string(),
        });
    }

    Ok(())
}

/// The ordered stories that a benchmark would run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorySet {
    stories: Vec<Story>,
}

impl StorySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_stories<I>(stories: I) -> Result<Self, StoryError>
    where
        I: IntoIterator<Item = Story>,
    {
        let mut story_set = Self::new();
        for story in stories {
            story_set.add_story(story)?;
        }
        Ok(story_set)
    }

    pub fn add_story(&mut self, story: Story) -> Result<(), StoryError> {
        if self.stories.iter().any(|s| s.name == story.name) {
            return Err(StoryError::DuplicateStoryName { name: story.name });
        }

        self.stories.push(story);
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Story> {
        self.stories.iter()
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }
}

impl<'a> IntoIterator for &'a StorySet {
    type Item = &'a Story;
    type IntoIter = std::slice::Iter<'a, Story>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
