use crate::alias::AliasIndex;
use crate::header::read_header;
use crate::matcher::find_matching_skills;
use crate::roots::{search_roots, SearchConfig};
use crate::types::{AmbiguousMatch, Candidate, Resolution, ResolvedSkill, SearchRoot, SkillMatch};
use tracing::debug;

/// Resolves identifiers against a fixed [`SearchConfig`].
///
/// Tiers are searched strictly in table order:
///
/// 1. The first tier with exactly one path match wins; lower tiers are not consulted.
/// 2. Two or more matches in one tier are reported as ambiguous and stop the
///    search, including the alias fallback.
/// 3. Only when no tier has any path match are declared aliases consulted, in
///    the same tier order and with the same one-or-ambiguous rule per tier.
///
/// Every call re-reads the filesystem; nothing is cached between calls.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    config: &'a SearchConfig,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over `config`.
    pub fn new(config: &'a SearchConfig) -> Self {
        Self { config }
    }

    /// Resolves one identifier (`brainstorming`, `claude:email`, an alias, ...).
    pub fn resolve(&self, identifier: &str) -> Resolution {
        let parsed = self.config.parse(identifier);
        let roots = search_roots(self.config, parsed.namespace.as_ref());
        debug!(
            target: "skillctl::resolve",
            identifier,
            residual = %parsed.residual,
            namespace = ?parsed.namespace,
            tiers = roots.len(),
            "resolving skill"
        );

        for root in &roots {
            let matches = find_matching_skills(&root.directory, &parsed.residual);
            if let Some(resolution) = Self::settle(root, &parsed.residual, matches, false) {
                return resolution;
            }
        }

        self.resolve_alias(&parsed.residual, &roots)
    }

    fn resolve_alias(&self, residual: &str, roots: &[SearchRoot]) -> Resolution {
        for root in roots {
            if !root.directory.is_dir() {
                continue;
            }
            let index = AliasIndex::build(&root.directory);
            let hits = index.lookup(residual).to_vec();
            if let Some(resolution) = Self::settle(root, residual, hits, true) {
                return resolution;
            }
        }
        debug!(target: "skillctl::resolve", residual, "no skill or alias matched");
        Resolution::NotFound
    }

    /// Turns one tier's matches into a terminal resolution, or `None` to keep searching.
    fn settle(
        root: &SearchRoot,
        residual: &str,
        mut matches: Vec<SkillMatch>,
        via_alias: bool,
    ) -> Option<Resolution> {
        match matches.len() {
            0 => None,
            1 => {
                let hit = matches.remove(0);
                debug!(
                    target: "skillctl::resolve",
                    tier = %root.tier,
                    path = %hit.relative_path,
                    via_alias,
                    "resolved skill"
                );
                Some(Resolution::Found(ResolvedSkill {
                    display_name: root.display_name(&hit.relative_path),
                    skill_file: hit.skill_file,
                    folder: hit.folder,
                    tier: root.tier.clone(),
                    relative_path: hit.relative_path,
                    via_alias,
                }))
            }
            count => {
                debug!(
                    target: "skillctl::resolve",
                    tier = %root.tier,
                    count,
                    via_alias,
                    "ambiguous skill identifier"
                );
                Some(Resolution::Ambiguous(ambiguous(root, residual, matches)))
            }
        }
    }
}

fn ambiguous(root: &SearchRoot, residual: &str, matches: Vec<SkillMatch>) -> AmbiguousMatch {
    let candidates = matches
        .into_iter()
        .map(|m| Candidate {
            description: read_header(&m.skill_file).summary().map(str::to_owned),
            display_name: root.display_name(&m.relative_path),
            folder: m.folder,
            relative_path: m.relative_path,
        })
        .collect();
    AmbiguousMatch {
        residual: residual.to_string(),
        tier: root.tier.clone(),
        tier_description: root.describe(),
        candidates,
    }
}

/// Convenience wrapper for [`Resolver::resolve`].
pub fn resolve(config: &SearchConfig, identifier: &str) -> Resolution {
    Resolver::new(config).resolve(identifier)
}
