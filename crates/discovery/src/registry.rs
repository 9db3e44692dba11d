use serde::Deserialize;
use std::path::PathBuf;

/// A tool integration that keeps its own skills directory.
///
/// Adding a new integration means adding a row here (or in `skillctl.toml`),
/// not new branches in the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToolSpec {
    /// Namespace tag (`claude` in `claude:email-assistant`).
    pub name: String,
    /// Skills directory relative to the project root.
    pub project_dir: PathBuf,
    /// Skills directory relative to the user's home directory.
    pub user_dir: PathBuf,
}

impl ToolSpec {
    /// Creates a tool row.
    pub fn new(
        name: impl Into<String>,
        project_dir: impl Into<PathBuf>,
        user_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            project_dir: project_dir.into(),
            user_dir: user_dir.into(),
        }
    }

    /// Prefix attached to relative paths resolved under this tool (`claude:`).
    pub fn display_prefix(&self) -> String {
        format!("{}:", self.name)
    }
}

/// Ordered table of registered tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRegistry {
    tools: Vec<ToolSpec>,
}

impl ToolRegistry {
    /// An empty registry (native and library tiers only).
    pub fn empty() -> Self {
        Self { tools: Vec::new() }
    }

    /// The built-in integrations, in search order.
    pub fn builtin() -> Self {
        Self {
            tools: vec![
                ToolSpec::new("claude", ".claude/skills", ".claude/skills"),
                ToolSpec::new("copilot", ".copilot/skills", ".copilot/skills"),
                ToolSpec::new("opencode", ".opencode/skill", ".config/opencode/skill"),
                ToolSpec::new("gemini", ".gemini/skills", ".gemini/skills"),
                ToolSpec::new("cursor", ".cursor/skills", ".cursor/skills"),
                ToolSpec::new("codex", ".codex/skills", ".codex/skills"),
            ],
        }
    }

    /// Appends a tool, replacing any existing row with the same name in place.
    pub fn with_tool(mut self, tool: ToolSpec) -> Self {
        if let Some(existing) = self
            .tools
            .iter_mut()
            .find(|t| t.name.eq_ignore_ascii_case(&tool.name))
        {
            *existing = tool;
        } else {
            self.tools.push(tool);
        }
        self
    }

    /// Looks up a tool by namespace tag (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&ToolSpec> {
        self.tools.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Iterates tools in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolSpec> {
        self.tools.iter()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
