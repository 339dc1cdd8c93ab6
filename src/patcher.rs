//! Anchored insertion of a source file into a `project.pbxproj` manifest.
//!
//! The manifest is never parsed. Each of the four new lines is placed right
//! after the anchor file's line in the same section, and every check runs
//! before the first write so the manifest on disk is either fully original or
//! fully patched.

use tracing::{debug, info};

use crate::config::PatchConfig;
use crate::error::PatchError;
use crate::tools::{self, AnchorIds};
use crate::types::{FileEntry, Identifier, PatchOutcome, Section};

/// Result of splicing in memory, before anything touches the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    pub entry: FileEntry,
    pub content: String,
    /// The inserted lines, in `Section::ALL` order.
    pub lines: Vec<String>,
}

/// What a run does with a given manifest content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    AlreadyPresent,
    Insert(Patch),
}

pub struct Patcher {
    config: PatchConfig,
}

impl Patcher {
    pub fn new(config: PatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PatchConfig {
        &self.config
    }

    /// Reads the manifest, backs it up and writes the patched version.
    pub fn run(&self) -> Result<PatchOutcome, PatchError> {
        let original = tools::read_file(&self.config.manifest_path)?;
        let patch = match self.plan(&original)? {
            Plan::AlreadyPresent => return Ok(PatchOutcome::AlreadyPresent),
            Plan::Insert(patch) => patch,
        };

        let backup = self.config.backup_path();
        tools::write_file(&backup, &original)?;
        info!(path = %backup.display(), "backed up manifest");

        tools::write_file(&self.config.manifest_path, &patch.content)?;
        info!(path = %self.config.manifest_path.display(), "wrote patched manifest");

        Ok(PatchOutcome::Added {
            entry: patch.entry,
            backup,
        })
    }

    /// Runs every check and computes the patch without writing anything.
    pub fn dry_run(&self) -> Result<PatchOutcome, PatchError> {
        let original = tools::read_file(&self.config.manifest_path)?;
        Ok(match self.plan(&original)? {
            Plan::AlreadyPresent => PatchOutcome::AlreadyPresent,
            Plan::Insert(patch) => PatchOutcome::WouldAdd {
                entry: patch.entry,
                lines: patch.lines,
            },
        })
    }

    /// Decides what to do with `content`, generating fresh identifiers.
    pub fn plan(&self, content: &str) -> Result<Plan, PatchError> {
        if content.contains(&self.config.target_file_name) {
            debug!(target_file = %self.config.target_file_name, "target already in manifest");
            return Ok(Plan::AlreadyPresent);
        }

        let file_ref = fresh_identifier(content, &[]);
        let build_file = fresh_identifier(content, &[&file_ref]);
        let entry = FileEntry {
            name: self.config.target_file_name.clone(),
            file_ref,
            build_file,
        };

        self.splice(content, entry).map(Plan::Insert)
    }

    /// Inserts `entry` after each anchor line. Fails before producing any
    /// output if one of the four anchors is missing.
    pub fn splice(&self, content: &str, entry: FileEntry) -> Result<Patch, PatchError> {
        let anchors = self.anchor_lines(content)?;

        let mut patched = content.to_string();
        let mut lines = Vec::with_capacity(anchors.len());
        for (section, anchor) in anchors {
            let line = entry.line(section);
            patched = tools::insert_after(&patched, &anchor, &line)
                .ok_or_else(|| self.anchor_not_found(section))?;
            debug!(%section, "spliced entry");
            lines.push(line);
        }

        Ok(Patch {
            entry,
            content: patched,
            lines,
        })
    }

    // One anchor line per section, in splice order.
    fn anchor_lines(&self, content: &str) -> Result<Vec<(Section, String)>, PatchError> {
        let anchor = &self.config.anchor_file_name;
        let AnchorIds {
            build_file,
            file_ref,
        } = tools::find_build_file(content, anchor)
            .ok_or_else(|| self.anchor_not_found(Section::BuildFile))?;
        debug!(%build_file, %file_ref, anchor = %anchor, "found anchor ids");

        let anchor_entry = FileEntry {
            name: anchor.clone(),
            file_ref,
            build_file,
        };

        let mut lines = Vec::with_capacity(Section::ALL.len());
        for section in Section::ALL {
            let line = match section {
                Section::FileReference => {
                    tools::find_file_reference(content, &anchor_entry.file_ref, anchor)
                        .map(str::to_string)
                }
                _ => {
                    let line = anchor_entry.line(section);
                    content.contains(&line).then_some(line)
                }
            };
            let line = line.ok_or_else(|| self.anchor_not_found(section))?;
            lines.push((section, line));
        }
        Ok(lines)
    }

    fn anchor_not_found(&self, section: Section) -> PatchError {
        PatchError::AnchorNotFound {
            section,
            anchor: self.config.anchor_file_name.clone(),
        }
    }
}

fn fresh_identifier(content: &str, taken: &[&Identifier]) -> Identifier {
    fresh_identifier_from(content, taken, Identifier::generate)
}

/// Pulls ids from `generate` until one is neither in `content` nor in `taken`.
pub fn fresh_identifier_from(
    content: &str,
    taken: &[&Identifier],
    mut generate: impl FnMut() -> Identifier,
) -> Identifier {
    loop {
        let id = generate();
        if !content.contains(id.as_str()) && !taken.contains(&&id) {
            return id;
        }
        debug!(%id, "regenerating identifier already in use");
    }
}
