use regex::Regex;

use crate::types::Identifier;

/// Ids of the build-file and file-reference objects registering `file_name`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnchorIds {
    pub build_file: Identifier,
    pub file_ref: Identifier,
}

// Finds the `PBXBuildFile` line for `file_name` and pulls both ids out of it.
pub fn find_build_file(content: &str, file_name: &str) -> Option<AnchorIds> {
    let name = regex::escape(file_name);
    let pattern = format!(
        r"(?m)^\t\t([0-9A-F]{{24}}) /\* {name} in Sources \*/ = \{{isa = PBXBuildFile; fileRef = ([0-9A-F]{{24}}) /\* {name} \*/; \}};"
    );
    // `name` is escaped, so the pattern always compiles
    let re = Regex::new(&pattern).ok()?;
    let caps = re.captures(content)?;
    Some(AnchorIds {
        build_file: Identifier::parse(&caps[1])?,
        file_ref: Identifier::parse(&caps[2])?,
    })
}

// Returns the whole `PBXFileReference` line (without newline) for `file_ref`.
pub fn find_file_reference<'a>(
    content: &'a str,
    file_ref: &Identifier,
    file_name: &str,
) -> Option<&'a str> {
    let pattern = format!(
        r"(?m)^\t\t{} /\* {} \*/ = \{{isa = PBXFileReference;[^\n]*\}};",
        file_ref.as_str(),
        regex::escape(file_name)
    );
    let re = Regex::new(&pattern).ok()?;
    re.find(content).map(|m| m.as_str())
}
