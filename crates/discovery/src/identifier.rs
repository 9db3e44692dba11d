use crate::registry::ToolRegistry;

/// Namespace family extracted from an identifier's `tag:` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Namespace {
    /// The shared skill library (`superpowers:`).
    Library,
    /// A registered tool (`claude:`), stored lowercase.
    Tool(String),
}

/// A raw identifier split into its namespace and residual path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIdentifier {
    /// `None` means "search every tier in default order".
    pub namespace: Option<Namespace>,
    /// The path (or bare name) left after stripping the namespace.
    pub residual: String,
}

const SKILLS_SEGMENT: &str = "skills/";

/// Splits `raw` into an optional namespace and a residual path.
///
/// Only tags in the closed set (the library name plus registered tool names)
/// are treated as namespaces. Any other colon is literal path content, so
/// `C:\skills\foo` or `notes:draft` pass through untouched. A leading
/// `skills/` segment is dropped either way.
///
/// ```
/// use skillctl_discovery::{parse_identifier, Namespace, ToolRegistry};
///
/// let registry = ToolRegistry::builtin();
/// let parsed = parse_identifier("claude:skills/email", "superpowers", &registry);
/// assert_eq!(parsed.namespace, Some(Namespace::Tool("claude".into())));
/// assert_eq!(parsed.residual, "email");
///
/// let literal = parse_identifier("notes:draft", "superpowers", &registry);
/// assert_eq!(literal.namespace, None);
/// assert_eq!(literal.residual, "notes:draft");
/// ```
pub fn parse_identifier(
    raw: &str,
    library_name: &str,
    registry: &ToolRegistry,
) -> ParsedIdentifier {
    let raw = raw.trim();
    if let Some((tag, rest)) = raw.split_once(':') {
        let namespace = if tag.eq_ignore_ascii_case(library_name) {
            Some(Namespace::Library)
        } else {
            registry
                .get(tag)
                .map(|tool| Namespace::Tool(tool.name.to_ascii_lowercase()))
        };
        if namespace.is_some() {
            return ParsedIdentifier {
                namespace,
                residual: strip_skills_segment(rest).to_string(),
            };
        }
    }
    ParsedIdentifier {
        namespace: None,
        residual: strip_skills_segment(raw).to_string(),
    }
}

fn strip_skills_segment(path: &str) -> &str {
    path.strip_prefix(SKILLS_SEGMENT).unwrap_or(path)
}
