// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{
    nupkg_filename, parse_unitypackage_filename, remove_stale_packages, unitypackage_filename,
};

#[test]
fn test_unitypackage_filename() {
    assert_eq!(
        unitypackage_filename("MyProject", "1.2.3", "Release"),
        "MyProject_1.2.3_Release.unitypackage"
    );
}

#[test]
fn test_nupkg_filename() {
    assert_eq!(nupkg_filename("MyProject", "1.2.3"), "MyProject.1.2.3.nupkg");
}

#[test]
fn test_parse_unitypackage_filename() {
    assert_eq!(
        parse_unitypackage_filename("MyProject_1.2.3_Debug.unitypackage"),
        Some((
            "MyProject".to_string(),
            "1.2.3".to_string(),
            "Debug".to_string()
        ))
    );
    assert_eq!(parse_unitypackage_filename("MyProject.nupkg"), None);
    assert_eq!(parse_unitypackage_filename("MyProject.unitypackage"), None);
}

#[test]
fn test_parse_roundtrip() {
    let filename = unitypackage_filename("My_Project", "2.0.0", "Release");
    let (name, version, configuration) =
        parse_unitypackage_filename(&filename).expect("roundtrip");
    // Greedy first group absorbs the underscore in the project name.
    assert_eq!(name, "My_Project");
    assert_eq!(version, "2.0.0");
    assert_eq!(configuration, "Release");
}

#[test]
fn test_remove_stale_packages_selectivity() {
    let dir = tempfile::tempdir().expect("tempdir");
    let touch = |name: &str| {
        std::fs::write(dir.path().join(name), b"stub").expect("write");
    };

    touch("MyProject_1.0.0_Release.unitypackage"); // stale, removed
    touch("MyProject_1.2.3_Release.unitypackage"); // current version, kept
    touch("MyProject_1.0.0_Debug.unitypackage"); // other configuration, kept
    touch("OtherProject_1.0.0_Release.unitypackage"); // other project, kept
    touch("notes.txt"); // unrelated, kept

    remove_stale_packages(dir.path(), "MyProject", "1.2.3", "Release");

    let remaining: Vec<String> = std::fs::read_dir(dir.path())
        .expect("read_dir")
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();

    assert!(!remaining.contains(&"MyProject_1.0.0_Release.unitypackage".to_string()));
    assert!(remaining.contains(&"MyProject_1.2.3_Release.unitypackage".to_string()));
    assert!(remaining.contains(&"MyProject_1.0.0_Debug.unitypackage".to_string()));
    assert!(remaining.contains(&"OtherProject_1.0.0_Release.unitypackage".to_string()));
    assert!(remaining.contains(&"notes.txt".to_string()));
}

#[test]
fn test_remove_stale_packages_takes_meta_companions_along() {
    let dir = tempfile::tempdir().expect("tempdir");
    let touch = |name: &str| {
        std::fs::write(dir.path().join(name), b"stub").expect("write");
    };

    touch("MyProject_1.0.0_Release.unitypackage");
    touch("MyProject_1.0.0_Release.unitypackage.meta");
    touch("MyProject_1.2.3_Release.unitypackage");
    touch("MyProject_1.2.3_Release.unitypackage.meta");

    remove_stale_packages(dir.path(), "MyProject", "1.2.3", "Release");

    assert!(!dir.path().join("MyProject_1.0.0_Release.unitypackage").exists());
    assert!(!dir.path().join("MyProject_1.0.0_Release.unitypackage.meta").exists());
    assert!(dir.path().join("MyProject_1.2.3_Release.unitypackage").exists());
    assert!(dir.path().join("MyProject_1.2.3_Release.unitypackage.meta").exists());
}

#[test]
fn test_remove_stale_packages_missing_dir_is_noop() {
    remove_stale_packages(
        std::path::Path::new("/nonexistent/output/dir"),
        "MyProject",
        "1.2.3",
        "Release",
    );
}
