use crate::types::*;
use std::collections::HashSet;

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> FileEntry {
        FileEntry {
            name: "RoomOutlineExtractor.swift".to_string(),
            file_ref: Identifier::parse("AAAAAAAAAAAAAAAAAAAAAAAA").unwrap(),
            build_file: Identifier::parse("BBBBBBBBBBBBBBBBBBBBBBBB").unwrap(),
        }
    }

    #[test]
    fn test_generated_identifier_shape() {
        for _ in 0..100 {
            let id = Identifier::generate();
            assert_eq!(id.as_str().len(), IDENTIFIER_LEN);
            assert!(
                id.as_str()
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
            );
            assert_eq!(Identifier::parse(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_generated_identifiers_distinct() {
        let ids: HashSet<_> = (0..1000).map(|_| Identifier::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_identifier_parse_rejects() {
        assert!(Identifier::parse("").is_none());
        assert!(Identifier::parse("74858FAE1ED2DC560051581").is_none());
        assert!(Identifier::parse("74858FAE1ED2DC56005158100").is_none());
        assert!(Identifier::parse("74858fae1ed2dc5600515810").is_none());
        assert!(Identifier::parse("74858FAE1ED2DC560051581G").is_none());
    }

    #[test]
    fn test_entry_lines() {
        let entry = entry();
        assert_eq!(
            entry.line(Section::BuildFile),
            "\t\tBBBBBBBBBBBBBBBBBBBBBBBB /* RoomOutlineExtractor.swift in Sources */ = {isa = PBXBuildFile; fileRef = AAAAAAAAAAAAAAAAAAAAAAAA /* RoomOutlineExtractor.swift */; };"
        );
        assert_eq!(
            entry.line(Section::FileReference),
            "\t\tAAAAAAAAAAAAAAAAAAAAAAAA /* RoomOutlineExtractor.swift */ = {isa = PBXFileReference; fileEncoding = 4; lastKnownFileType = sourcecode.swift; path = RoomOutlineExtractor.swift; sourceTree = \"<group>\"; };"
        );
        assert_eq!(
            entry.line(Section::Group),
            "\t\t\t\tAAAAAAAAAAAAAAAAAAAAAAAA /* RoomOutlineExtractor.swift */,"
        );
        assert_eq!(
            entry.line(Section::SourcesBuildPhase),
            "\t\t\t\tBBBBBBBBBBBBBBBBBBBBBBBB /* RoomOutlineExtractor.swift in Sources */,"
        );
    }

    #[test]
    fn test_last_known_file_type() {
        assert_eq!(last_known_file_type("A.swift"), "sourcecode.swift");
        assert_eq!(last_known_file_type("A.m"), "sourcecode.c.objc");
        assert_eq!(last_known_file_type("A.mm"), "sourcecode.cpp.objcpp");
        assert_eq!(last_known_file_type("A.h"), "sourcecode.c.h");
        assert_eq!(last_known_file_type("A.cc"), "sourcecode.cpp.cpp");
        assert_eq!(last_known_file_type("Makefile"), "text");
    }

    #[test]
    fn test_section_display() {
        let names: Vec<String> = Section::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            names,
            ["PBXBuildFile", "PBXFileReference", "PBXGroup", "PBXSourcesBuildPhase"]
        );
    }

    #[test]
    fn test_quote_value() {
        assert_eq!(quote_value("RoomOutlineExtractor.swift"), "RoomOutlineExtractor.swift");
        assert_eq!(quote_value("$Gen_2.m"), "$Gen_2.m");
        assert_eq!(quote_value("Room Outline.swift"), "\"Room Outline.swift\"");
        assert_eq!(
            quote_value("Runner-Bridging-Header.h"),
            "\"Runner-Bridging-Header.h\""
        );
    }

    #[test]
    fn test_file_reference_quotes_path() {
        let with_name = |name: &str| FileEntry {
            name: name.to_string(),
            ..entry()
        };

        let line = with_name("Room Outline.swift").line(Section::FileReference);
        assert!(line.contains("/* Room Outline.swift */"));
        assert!(line.contains("path = \"Room Outline.swift\"; sourceTree"));

        let line = with_name("Room-Outline.swift").line(Section::FileReference);
        assert!(line.contains("path = \"Room-Outline.swift\"; sourceTree"));
    }
}
