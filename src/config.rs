use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for the page extractor
///
/// Every field has a default, so a JSON file only needs to name the
/// settings it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Selector for the page title
    #[serde(default = "default_title_selector")]
    pub title_selector: String,

    /// Selector for the landmark searched first for a paragraph
    #[serde(default = "default_landmark_selector")]
    pub landmark_selector: String,

    /// Selector for paragraphs
    #[serde(default = "default_paragraph_selector")]
    pub paragraph_selector: String,

    /// Selector for link elements
    #[serde(default = "default_link_selector")]
    pub link_selector: String,

    /// Attribute holding the link target
    #[serde(default = "default_link_attribute")]
    pub link_attribute: String,

    /// Selector for image elements
    #[serde(default = "default_image_selector")]
    pub image_selector: String,

    /// Attribute holding the image source
    #[serde(default = "default_image_attribute")]
    pub image_attribute: String,

    /// Whether to collapse whitespace runs in extracted text
    #[serde(default)]
    pub collapse_whitespace: bool,
}

fn default_title_selector() -> String {
    "h1".to_string()
}

fn default_landmark_selector() -> String {
    "main".to_string()
}

fn default_paragraph_selector() -> String {
    "p".to_string()
}

fn default_link_selector() -> String {
    "a[href]".to_string()
}

fn default_link_attribute() -> String {
    "href".to_string()
}

fn default_image_selector() -> String {
    "img".to_string()
}

fn default_image_attribute() -> String {
    "src".to_string()
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            title_selector: default_title_selector(),
            landmark_selector: default_landmark_selector(),
            paragraph_selector: default_paragraph_selector(),
            link_selector: default_link_selector(),
            link_attribute: default_link_attribute(),
            image_selector: default_image_selector(),
            image_attribute: default_image_attribute(),
            collapse_whitespace: false,
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Override the title selector
    pub fn with_title_selector(mut self, selector: &str) -> Self {
        self.title_selector = selector.to_string();
        self
    }

    /// Override the landmark and paragraph selectors
    pub fn with_paragraph_selectors(mut self, landmark: &str, paragraph: &str) -> Self {
        self.landmark_selector = landmark.to_string();
        self.paragraph_selector = paragraph.to_string();
        self
    }

    /// Override the link selector and the attribute read from it
    pub fn with_link_selector(mut self, selector: &str, attribute: &str) -> Self {
        self.link_selector = selector.to_string();
        self.link_attribute = attribute.to_string();
        self
    }

    /// Override the image selector and the attribute read from it
    pub fn with_image_selector(mut self, selector: &str, attribute: &str) -> Self {
        self.image_selector = selector.to_string();
        self.image_attribute = attribute.to_string();
        self
    }

    /// Enable or disable whitespace collapsing
    pub fn with_collapse_whitespace(mut self, collapse: bool) -> Self {
        self.collapse_whitespace = collapse;
        self
    }
}
