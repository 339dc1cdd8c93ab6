mod types_tests;

pub const RUNNER_MANIFEST: &str = include_str!("../../tests/fixtures/runner.pbxproj");
