use crate::identifier::{parse_identifier, Namespace, ParsedIdentifier};
use crate::registry::ToolRegistry;
use crate::types::{SearchRoot, TierId};
use std::path::PathBuf;

/// Namespace tag of the shared skill library unless configured otherwise.
pub const DEFAULT_LIBRARY_NAME: &str = "superpowers";

const NATIVE_SKILLS_DIR: &str = ".agents/skills";
const LIBRARY_SKILLS_DIR: &str = "skills";
const DEFAULT_LIBRARY_DIR: &str = ".agents/superpowers";

/// Everything the resolver needs to know about the environment.
///
/// Built once by the caller and passed in; nothing in this crate reads the
/// process environment or the current directory on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Root of the current project (nearest ancestor holding `.agents/`).
    pub project_root: PathBuf,
    /// The user's home directory.
    pub home: PathBuf,
    /// Checkout of the shared skill library.
    pub library_root: PathBuf,
    /// Namespace tag of the shared library (`superpowers`).
    pub library_name: String,
    /// Registered tool integrations, in search order.
    pub registry: ToolRegistry,
    /// Whether the project root is the shared library's own repository.
    pub in_library_repo: bool,
}

impl SearchConfig {
    /// Creates a config with the built-in tools and the default library location under `home`.
    pub fn new(project_root: impl Into<PathBuf>, home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        Self {
            project_root: project_root.into(),
            library_root: home.join(DEFAULT_LIBRARY_DIR),
            home,
            library_name: DEFAULT_LIBRARY_NAME.to_string(),
            registry: ToolRegistry::builtin(),
            in_library_repo: false,
        }
    }

    /// Overrides the library checkout location.
    pub fn with_library_root(mut self, library_root: impl Into<PathBuf>) -> Self {
        self.library_root = library_root.into();
        self
    }

    /// Overrides the library namespace tag.
    pub fn with_library_name(mut self, name: impl Into<String>) -> Self {
        self.library_name = name.into();
        self
    }

    /// Replaces the tool registry.
    pub fn with_registry(mut self, registry: ToolRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Marks the project root as the library's own repository.
    pub fn with_library_repo(mut self, in_library_repo: bool) -> Self {
        self.in_library_repo = in_library_repo;
        self
    }

    /// `<project>/.agents/skills`
    pub fn project_native_dir(&self) -> PathBuf {
        self.project_root.join(NATIVE_SKILLS_DIR)
    }

    /// `~/.agents/skills`
    pub fn personal_native_dir(&self) -> PathBuf {
        self.home.join(NATIVE_SKILLS_DIR)
    }

    /// `<library>/skills`
    pub fn library_skills_dir(&self) -> PathBuf {
        self.library_root.join(LIBRARY_SKILLS_DIR)
    }

    /// `<project>/skills`, only searched when inside the library repository.
    pub fn library_self_dir(&self) -> PathBuf {
        self.project_root.join(LIBRARY_SKILLS_DIR)
    }

    /// Parses an identifier against this config's namespaces.
    pub fn parse(&self, raw: &str) -> ParsedIdentifier {
        parse_identifier(raw, &self.library_name, &self.registry)
    }

    fn library_prefix(&self) -> String {
        format!("{}:", self.library_name)
    }

    fn root(&self, tier: TierId, directory: PathBuf, display_prefix: String) -> SearchRoot {
        SearchRoot {
            tier,
            directory,
            display_prefix,
        }
    }

    fn library_roots(&self) -> Vec<SearchRoot> {
        let mut roots = Vec::with_capacity(2);
        if self.in_library_repo {
            roots.push(self.root(
                TierId::LibrarySelf,
                self.library_self_dir(),
                self.library_prefix(),
            ));
        }
        roots.push(self.root(
            TierId::Library,
            self.library_skills_dir(),
            self.library_prefix(),
        ));
        roots
    }

    fn tool_roots(&self, name: &str) -> Vec<SearchRoot> {
        let Some(tool) = self.registry.get(name) else {
            return Vec::new();
        };
        vec![
            self.root(
                TierId::ProjectTool(tool.name.clone()),
                self.project_root.join(&tool.project_dir),
                tool.display_prefix(),
            ),
            self.root(
                TierId::PersonalTool(tool.name.clone()),
                self.home.join(&tool.user_dir),
                tool.display_prefix(),
            ),
        ]
    }

    fn default_roots(&self) -> Vec<SearchRoot> {
        let mut roots = Vec::with_capacity(4 + 2 * self.registry.len());
        if self.in_library_repo {
            roots.push(self.root(
                TierId::LibrarySelf,
                self.library_self_dir(),
                self.library_prefix(),
            ));
        }
        roots.push(self.root(
            TierId::ProjectNative,
            self.project_native_dir(),
            String::new(),
        ));
        roots.extend(self.registry.iter().map(|tool| {
            self.root(
                TierId::ProjectTool(tool.name.clone()),
                self.project_root.join(&tool.project_dir),
                tool.display_prefix(),
            )
        }));
        roots.push(self.root(
            TierId::PersonalNative,
            self.personal_native_dir(),
            String::new(),
        ));
        roots.extend(self.registry.iter().map(|tool| {
            self.root(
                TierId::PersonalTool(tool.name.clone()),
                self.home.join(&tool.user_dir),
                tool.display_prefix(),
            )
        }));
        roots.push(self.root(
            TierId::Library,
            self.library_skills_dir(),
            self.library_prefix(),
        ));
        roots
    }
}

/// Builds the ordered search-root table for one resolution call.
///
/// With a namespace, only that family's roots are returned (project before
/// personal). Without one, the full default order applies:
/// library-self (inside the library repo only), project-native, project tools,
/// personal-native, personal tools, library.
pub fn search_roots(config: &SearchConfig, namespace: Option<&Namespace>) -> Vec<SearchRoot> {
    match namespace {
        Some(Namespace::Library) => config.library_roots(),
        Some(Namespace::Tool(name)) => config.tool_roots(name),
        None => config.default_roots(),
    }
}
