use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Length of an object identifier in a `project.pbxproj` file.
pub const IDENTIFIER_LEN: usize = 24;

/// A 24-character uppercase hex object identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Fresh random identifier taken from the first 96 bits of a v4 UUID.
    pub fn generate() -> Identifier {
        let hex = Uuid::new_v4().simple().to_string();
        Identifier(hex[..IDENTIFIER_LEN].to_uppercase())
    }

    pub fn parse(s: &str) -> Option<Identifier> {
        let valid = s.len() == IDENTIFIER_LEN
            && s.bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b));
        valid.then(|| Identifier(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The manifest subsections a source file is registered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    BuildFile,
    FileReference,
    Group,
    SourcesBuildPhase,
}

impl Section {
    /// Splice order. The build-file anchor comes first since it carries both anchor ids.
    pub const ALL: [Section; 4] = [
        Section::BuildFile,
        Section::FileReference,
        Section::Group,
        Section::SourcesBuildPhase,
    ];
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::BuildFile => "PBXBuildFile",
            Section::FileReference => "PBXFileReference",
            Section::Group => "PBXGroup",
            Section::SourcesBuildPhase => "PBXSourcesBuildPhase",
        };
        f.write_str(name)
    }
}

/// A source file together with the two identifiers that register it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub file_ref: Identifier,
    pub build_file: Identifier,
}

impl FileEntry {
    /// Renders this file's line for `section`, including leading tabs but no newline.
    pub fn line(&self, section: Section) -> String {
        let FileEntry {
            name,
            file_ref,
            build_file,
        } = self;
        match section {
            Section::BuildFile => format!(
                "\t\t{build_file} /* {name} in Sources */ = {{isa = PBXBuildFile; fileRef = {file_ref} /* {name} */; }};"
            ),
            Section::FileReference => format!(
                "\t\t{file_ref} /* {name} */ = {{isa = PBXFileReference; fileEncoding = 4; lastKnownFileType = {}; path = {}; sourceTree = \"<group>\"; }};",
                last_known_file_type(name),
                quote_value(name)
            ),
            Section::Group => format!("\t\t\t\t{file_ref} /* {name} */,"),
            Section::SourcesBuildPhase => {
                format!("\t\t\t\t{build_file} /* {name} in Sources */,")
            }
        }
    }
}

/// Quotes a property value the way Xcode does when it has characters outside
/// `[A-Za-z0-9_$./]`. Names containing `"` or `\` are rejected by config validation.
pub fn quote_value(value: &str) -> String {
    let bare = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '.' | '/'));
    if bare {
        value.to_string()
    } else {
        format!("\"{value}\"")
    }
}

/// Xcode's `lastKnownFileType` for a file name, keyed on its extension.
pub fn last_known_file_type(name: &str) -> &'static str {
    let ext = name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
    match ext {
        "swift" => "sourcecode.swift",
        "m" => "sourcecode.c.objc",
        "mm" => "sourcecode.cpp.objcpp",
        "c" => "sourcecode.c.c",
        "cpp" | "cc" => "sourcecode.cpp.cpp",
        "h" => "sourcecode.c.h",
        _ => "text",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatchOutcome {
    Added {
        entry: FileEntry,
        backup: PathBuf,
    },
    AlreadyPresent,
    WouldAdd {
        entry: FileEntry,
        lines: Vec<String>,
    },
}

/// Machine-readable summary of one run, printed with `--json`.
#[derive(Serialize, Debug)]
pub struct PatchReport {
    pub manifest: PathBuf,
    pub anchor: String,
    pub target: String,
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_ref: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_file: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<PathBuf>,
    pub finished_at: DateTime<Utc>,
}
