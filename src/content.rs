//! Portfolio content model and loading.
//!
//! All copy shown on the page (profile, projects, skills, experience)
//! lives in a content file, not in code. A complete default ships
//! embedded in the binary; a TOML or JSON file passed on the command
//! line replaces it wholesale. Content problems are load-time errors:
//! the page assumes a valid, complete content set once it is running.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default content embedded in the binary.
const DEFAULT_CONTENT: &str = include_str!("data/content.toml");

/// Accent color value with hex string representation.
///
/// Supports parsing from hex strings (#RRGGBB) used by project entries
/// to tint their card and modal chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Accent {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Accent {
    /// Creates a new `Accent` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `Accent` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#RRGGBB".
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[must_use]
    pub const fn to_color(self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Accent {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Accent> for String {
    fn from(value: Accent) -> Self {
        value.to_hex()
    }
}

/// The person the page is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Full name, shown in the footer and title bar
    pub name: String,
    /// Professional title, shown in the hero
    pub title: String,
    /// One-line pitch under the hero title
    pub tagline: String,
    /// Small availability badge above the hero title
    pub badge: String,
    /// "My Journey" paragraphs in the about section
    pub about: Vec<String>,
    /// Contact email, shown in the contact section and copyable
    pub email: String,
    /// Short stat lines shown under the hero (e.g. "5+ Years")
    #[serde(default)]
    pub stats: Vec<String>,
}

/// A single showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable identifier, unique within the content set
    pub id: String,
    /// Project title
    pub title: String,
    /// One-line description shown on the card
    pub description: String,
    /// Problem statement shown in the detail modal
    pub problem: String,
    /// Solution summary shown in the detail modal
    pub solution: String,
    /// Technology tags
    pub tech: Vec<String>,
    /// Impact metrics shown in the detail modal
    pub metrics: Vec<String>,
    /// Live demo URL
    #[serde(default)]
    pub demo_url: Option<String>,
    /// Source repository URL
    #[serde(default)]
    pub repo_url: Option<String>,
    /// Whether the project appears in the showcase grid
    #[serde(default = "default_featured")]
    pub featured: bool,
    /// Card accent color
    pub accent: Accent,
}

fn default_featured() -> bool {
    true
}

/// A single skill with a proficiency level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name
    pub name: String,
    /// Proficiency, 0-100, drives the animated bar width
    pub level: u8,
}

/// A named group of skills rendered as one block of bars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    /// Category name (e.g. "Frontend")
    pub name: String,
    /// Skills in display order
    pub skills: Vec<Skill>,
}

/// The kind of a timeline entry, which picks its marker glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceKind {
    /// Employment entry
    Work,
    /// Education entry
    Education,
}

/// One entry on the experience timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    /// Role or degree name
    pub role: String,
    /// Company or institution
    pub org: String,
    /// Human-readable period (e.g. "2022 - Present")
    pub period: String,
    /// One-paragraph summary
    pub summary: String,
    /// Entry kind
    pub kind: ExperienceKind,
}

/// A social/profile link shown in the hero and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Display label (e.g. "GitHub")
    pub label: String,
    /// Link target
    pub url: String,
}

/// The complete content set for one rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// Who the page is about
    pub profile: Profile,
    /// Showcased projects, in grid order
    pub projects: Vec<Project>,
    /// Skill categories, in display order
    pub skills: Vec<SkillCategory>,
    /// Timeline entries, newest first
    pub experience: Vec<Experience>,
    /// Social links, in display order
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

impl Content {
    /// Loads the embedded default content.
    ///
    /// The default is compiled in and validated by tests, so a parse
    /// failure here is a build defect, not a user error.
    pub fn embedded() -> Result<Self> {
        let content: Self =
            toml::from_str(DEFAULT_CONTENT).context("Failed to parse embedded content")?;
        content.validate()?;
        Ok(content)
    }

    /// Loads content from a TOML or JSON file, selected by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .context(format!("Failed to read content file: {}", path.display()))?;

        let content: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&raw).context(format!(
                "Failed to parse JSON content file: {}",
                path.display()
            ))?
        } else {
            toml::from_str(&raw).context(format!(
                "Failed to parse TOML content file: {}",
                path.display()
            ))?
        };

        content.validate()?;
        Ok(content)
    }

    /// Validates invariants the renderer relies on.
    ///
    /// Checks:
    /// - at least one featured project
    /// - project ids are unique
    /// - skill levels are within 0-100
    pub fn validate(&self) -> Result<()> {
        if !self.projects.iter().any(|p| p.featured) {
            anyhow::bail!("Content has no featured projects; the showcase grid would be empty");
        }

        let mut seen = std::collections::HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id.as_str()) {
                anyhow::bail!("Duplicate project id '{}'", project.id);
            }
        }

        for category in &self.skills {
            for skill in &category.skills {
                if skill.level > 100 {
                    anyhow::bail!(
                        "Skill '{}' in '{}' has level {} (expected 0-100)",
                        skill.name,
                        category.name,
                        skill.level
                    );
                }
            }
        }

        Ok(())
    }

    /// Projects that appear in the showcase grid, in declaration order.
    #[must_use]
    pub fn featured_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.featured).collect()
    }
}
