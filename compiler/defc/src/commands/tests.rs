#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::PathBuf;

use defc::ZeroWidthPolicy;
use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn flags_and_paths_interleave() {
    let args = args(&["bit", "--base=defs", "enum/Color.the", "--no-import-cache"]);
    let (config, paths) = parse_arguments(&args).unwrap();

    assert_eq!(paths, vec!["bit", "enum/Color.the"]);
    assert_eq!(config.base_dir, PathBuf::from("defs"));
    assert!(!config.memoize_imports);
    assert_eq!(config.zero_width, ZeroWidthPolicy::Allow);
}

#[test]
fn no_arguments_is_default_config() {
    let (config, paths) = parse_arguments(&[]).unwrap();
    assert!(paths.is_empty());
    assert_eq!(config, CompilerConfig::default());
}

#[test]
fn unknown_option_is_rejected() {
    let args = args(&["bit", "--verbose"]);
    assert_eq!(
        parse_arguments(&args).unwrap_err(),
        "unknown option '--verbose'"
    );
}
