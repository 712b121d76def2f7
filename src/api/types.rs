//! Wire types for the Current catalog API.
//!
//! These mirror the API's JSON payloads exactly. List payloads arrive as
//! maps keyed by stack name; [`StacksResponse::into_stacks`] and
//! [`SearchResponse::into_stacks`] normalize them to a name-ordered vector
//! so downstream filtering and rendering are deterministic.

use std::collections::BTreeMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Classification tag attached to every stack.
///
/// Unknown tags from the API decode as [`StackCategory::Other`] rather than
/// failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StackCategory {
    Frontend,
    Backend,
    Database,
    Testing,
    Styling,
    BuildTools,
    StateManagement,
    DataScience,
    Animation,
    Networking,
    Runtime,
    PackageManager,
    CodeQuality,
    Monorepo,
    Visualization,
    MlApps,
    Validation,
    Forms,
    Routing,
    Realtime,
    Graphql,
    Utility,
    Other,
}

impl Default for StackCategory {
    fn default() -> Self {
        Self::Other
    }
}

impl StackCategory {
    /// Look up a wire tag. Anything unrecognized lands on [`Self::Other`],
    /// the generic rendering branch.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "frontend" => Self::Frontend,
            "backend" => Self::Backend,
            "database" => Self::Database,
            "testing" => Self::Testing,
            "styling" => Self::Styling,
            "build-tools" => Self::BuildTools,
            "state-management" => Self::StateManagement,
            "data-science" => Self::DataScience,
            "animation" => Self::Animation,
            "networking" => Self::Networking,
            "runtime" => Self::Runtime,
            "package-manager" => Self::PackageManager,
            "code-quality" => Self::CodeQuality,
            "monorepo" => Self::Monorepo,
            "visualization" => Self::Visualization,
            "ml-apps" => Self::MlApps,
            "validation" => Self::Validation,
            "forms" => Self::Forms,
            "routing" => Self::Routing,
            "realtime" => Self::Realtime,
            "graphql" => Self::Graphql,
            "utility" => Self::Utility,
            _ => Self::Other,
        }
    }

    /// The wire tag, e.g. `build-tools`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Database => "database",
            Self::Testing => "testing",
            Self::Styling => "styling",
            Self::BuildTools => "build-tools",
            Self::StateManagement => "state-management",
            Self::DataScience => "data-science",
            Self::Animation => "animation",
            Self::Networking => "networking",
            Self::Runtime => "runtime",
            Self::PackageManager => "package-manager",
            Self::CodeQuality => "code-quality",
            Self::Monorepo => "monorepo",
            Self::Visualization => "visualization",
            Self::MlApps => "ml-apps",
            Self::Validation => "validation",
            Self::Forms => "forms",
            Self::Routing => "routing",
            Self::Realtime => "realtime",
            Self::Graphql => "graphql",
            Self::Utility => "utility",
            Self::Other => "other",
        }
    }

    /// Human listing label: hyphens become spaces, each word upcased,
    /// e.g. `build-tools` renders as `Build Tools`.
    pub fn label(&self) -> String {
        self.as_str()
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Every known tag, in declaration order.
    pub fn all() -> &'static [StackCategory] {
        Self::value_variants()
    }
}

impl std::fmt::Display for StackCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StackCategory {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// Install commands keyed by package manager.
///
/// Only the four managers the catalog tracks; all optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallCommands {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npm: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bun: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pip: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yarn: Option<String>,
}

impl InstallCommands {
    /// The one command a card shows: npm wins, then pip, bun, yarn.
    pub fn primary(&self) -> Option<&str> {
        self.npm
            .as_deref()
            .or(self.pip.as_deref())
            .or(self.bun.as_deref())
            .or(self.yarn.as_deref())
    }

    /// All present commands with their manager labels, in detail-view order.
    pub fn all(&self) -> Vec<(&'static str, &str)> {
        [
            ("npm", self.npm.as_deref()),
            ("yarn", self.yarn.as_deref()),
            ("bun", self.bun.as_deref()),
            ("pip", self.pip.as_deref()),
        ]
        .into_iter()
        .filter_map(|(manager, cmd)| cmd.map(|c| (manager, c)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.primary().is_none()
    }
}

/// One tracked framework, library, or tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stack {
    /// Unique name; the stable identity used as a rendering key.
    pub name: String,

    /// Primary implementation language.
    pub language: String,

    /// Latest published version, semver-like.
    pub latest_version: String,

    /// Release date of the latest version, as the API sends it.
    pub release_date: String,

    /// Documentation URL.
    pub docs_url: String,

    /// Repository URL, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    /// Install commands by package manager.
    #[serde(default)]
    pub install: InstallCommands,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_stars: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_forks: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloads_weekly: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloads_monthly: Option<u64>,

    /// When the API last refreshed this record's metrics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_checked: Option<String>,

    #[serde(default)]
    pub category: StackCategory,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl Stack {
    /// Star count with absent treated as zero.
    pub fn stars(&self) -> u64 {
        self.github_stars.unwrap_or(0)
    }

    /// Fork count with absent treated as zero.
    pub fn forks(&self) -> u64 {
        self.github_forks.unwrap_or(0)
    }

    /// Weekly downloads with absent treated as zero.
    pub fn weekly_downloads(&self) -> u64 {
        self.downloads_weekly.unwrap_or(0)
    }
}

/// One entry in a stack's version history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionEntry {
    pub version: String,
    pub date: String,
    #[serde(default)]
    pub changes: Vec<String>,
}

/// Detail-endpoint payload: a [`Stack`] plus description, version history,
/// and compatibility notes when the API has them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackDetails {
    #[serde(flatten)]
    pub stack: Stack,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_version: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub version_history: Vec<VersionEntry>,

    /// Peer name to version-range string, e.g. `"React" -> ">=18"`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub compatibility: BTreeMap<String, String>,
}

/// `GET /stacks` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StacksResponse {
    pub stacks: BTreeMap<String, Stack>,
    pub total_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_refresh: Option<String>,
}

impl StacksResponse {
    /// Flatten the name-keyed map into a name-ordered vector.
    pub fn into_stacks(self) -> Vec<Stack> {
        self.stacks.into_values().collect()
    }
}

/// `GET /stacks/search` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub stacks: BTreeMap<String, Stack>,
    pub total_count: usize,
}

impl SearchResponse {
    /// Flatten the name-keyed map into a name-ordered vector.
    pub fn into_stacks(self) -> Vec<Stack> {
        self.stacks.into_values().collect()
    }
}

/// `GET /stacks/trending` payload. Order is the server's ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingResponse {
    pub stacks: Vec<Stack>,
    pub sort_by: String,
    pub total_count: usize,
}

/// Ranking metric for the trending endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TrendingSort {
    #[default]
    Stars,
    Downloads,
    Forks,
    /// Stars plus weekly downloads scaled down by 1000, ranked server-side.
    Combined,
}

impl TrendingSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stars => "stars",
            Self::Downloads => "downloads",
            Self::Forks => "forks",
            Self::Combined => "combined",
        }
    }
}

impl std::fmt::Display for TrendingSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
