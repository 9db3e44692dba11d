use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Descriptive fields from a `SKILL.md` frontmatter block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillHeader {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// One-line description.
    #[serde(default)]
    pub description: Option<String>,
    /// Usage hint (`when_to_use`).
    #[serde(default)]
    pub when_to_use: Option<String>,
}

impl SkillHeader {
    /// Description, or the usage hint when no description is declared.
    pub fn summary(&self) -> Option<&str> {
        self.description.as_deref().or(self.when_to_use.as_deref())
    }

    fn normalized(self) -> Self {
        let clean = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        Self {
            name: clean(self.name),
            description: clean(self.description),
            when_to_use: clean(self.when_to_use),
        }
    }
}

/// Splits content into the frontmatter block and the body after it.
///
/// Content without an opening `---`, or with an unclosed block, has no
/// frontmatter and is returned whole as the body.
pub fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let trimmed = content.trim_start();
    let Some(after_open) = trimmed.strip_prefix("---") else {
        return (None, content);
    };
    let after_open = after_open.trim_start_matches(['\r', '\n']);

    if let Some(rest) = after_open.strip_prefix("---") {
        if rest.is_empty() || rest.starts_with(['\r', '\n']) {
            return (Some(""), rest.trim_start_matches(['\r', '\n']));
        }
    }
    if let Some(end) = after_open.find("\n---") {
        let yaml = after_open[..end].trim_end_matches('\r');
        let rest = &after_open[end + 4..];
        let rest = rest.trim_start_matches(['\r', '\n']);
        (Some(yaml), rest)
    } else {
        (None, content)
    }
}

/// Returns the skill body with any frontmatter removed, trimmed.
pub fn skill_body(content: &str) -> &str {
    split_frontmatter(content).1.trim()
}

/// Line-based fallback for frontmatter that is not valid YAML
/// (e.g. an unquoted `description: Use when: ...`).
fn scan_header_lines(block: &str) -> SkillHeader {
    let mut header = SkillHeader::default();
    for line in block.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        if key.is_empty() || !key.chars().all(|c| c.is_alphanumeric() || c == '_') {
            continue;
        }
        let value = Some(value.trim().to_string());
        match key {
            "name" => header.name = value,
            "description" => header.description = value,
            "when_to_use" => header.when_to_use = value,
            _ => {}
        }
    }
    header
}

/// Parses frontmatter fields out of `SKILL.md` content.
pub fn parse_header(content: &str) -> SkillHeader {
    let Some(block) = split_frontmatter(content).0 else {
        return SkillHeader::default();
    };
    serde_yaml::from_str::<SkillHeader>(block)
        .unwrap_or_else(|_| scan_header_lines(block))
        .normalized()
}

/// Reads the frontmatter of a `SKILL.md` file, best-effort.
///
/// Never fails: unreadable files yield an empty header.
pub fn read_header(path: &Path) -> SkillHeader {
    match fs::read_to_string(path) {
        Ok(content) => parse_header(&content),
        Err(err) => {
            debug!(
                target: "skillctl::discovery",
                path = %path.display(),
                error = %err,
                "unreadable skill file"
            );
            SkillHeader::default()
        }
    }
}
