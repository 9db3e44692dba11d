use crate::types::MANIFEST_FILE;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parsed `skill.json`.
///
/// Every field is optional and absence is kept distinct from an empty list:
/// `aliases: None` means the manifest never declared any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillManifest {
    /// Declared display name.
    pub name: Option<String>,
    /// Alternative identifiers the skill answers to.
    pub aliases: Option<Vec<String>>,
    /// Helper files, relative to the skill folder.
    pub helpers: Option<Vec<String>>,
    /// Sub-skill folders of a multi-skill bundle, relative to the skill folder.
    pub skills: Option<Vec<String>>,
}

fn string_list(doc: &Value, key: &str) -> Option<Vec<String>> {
    let items = doc.get(key)?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_owned))
            .collect(),
    )
}

impl SkillManifest {
    /// Parses manifest JSON leniently: wrong-typed fields are dropped, not fatal.
    ///
    /// Returns `None` when the text is not a JSON object.
    pub fn from_json(text: &str) -> Option<Self> {
        let doc: Value = serde_json::from_str(text).ok()?;
        if !doc.is_object() {
            return None;
        }
        Some(Self {
            name: doc.get("name").and_then(Value::as_str).map(str::to_owned),
            aliases: string_list(&doc, "aliases"),
            helpers: string_list(&doc, "helpers"),
            skills: string_list(&doc, "skills"),
        })
    }

    /// Picks the helper that best matches `term`.
    ///
    /// An exact (case-insensitive) match wins outright. Otherwise helpers are
    /// scored by overlap: a helper containing the term scores
    /// `term / helper` length, and a term containing the helper's basename
    /// scores `basename / term` length. The highest score wins; ties keep the
    /// earlier helper.
    pub fn find_helper(&self, term: &str) -> Option<&str> {
        let term = term.to_lowercase();
        let mut best: Option<&str> = None;
        let mut best_score = 0.0_f64;

        for helper in self.helpers.iter().flatten() {
            let lower = helper.to_lowercase();
            if lower == term {
                return Some(helper);
            }
            if lower.contains(&term) {
                let score = term.len() as f64 / lower.len() as f64;
                if score > best_score {
                    best_score = score;
                    best = Some(helper);
                }
            }
            let basename = helper_basename(&lower);
            if !basename.is_empty() && !term.is_empty() && term.contains(basename) {
                let score = basename.len() as f64 / term.len() as f64;
                if score > best_score {
                    best_score = score;
                    best = Some(helper);
                }
            }
        }
        best
    }
}

/// `scripts/search-block.js` -> `search-block`
fn helper_basename(helper: &str) -> &str {
    let file = helper.rsplit('/').next().unwrap_or(helper);
    file.split('.').next().unwrap_or(file)
}

/// Reads `<skill_dir>/skill.json`.
///
/// Never fails: a missing, unreadable, or malformed manifest is `None`, and
/// the skill still resolves by path.
pub fn read_manifest(skill_dir: &Path) -> Option<SkillManifest> {
    let path = skill_dir.join(MANIFEST_FILE);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
        Err(err) => {
            debug!(
                target: "skillctl::discovery",
                path = %path.display(),
                error = %err,
                "unreadable manifest"
            );
            return None;
        }
    };
    let manifest = SkillManifest::from_json(&text);
    if manifest.is_none() {
        debug!(
            target: "skillctl::discovery",
            path = %path.display(),
            "malformed manifest ignored"
        );
    }
    manifest
}
