// tests/integration_tests/scenarios_test.rs
use super::common::{RecordingDisk, create_test_dir, create_test_file, setup_test_directory, tree_listing};
use anyhow::Result;
use brn::{DiskFs, RenameConfig, execute};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_whitespace_removal_renames_directory_and_file() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let mut config = RenameConfig::new(temp_dir.path());
    config.remove_whitespace = true;

    execute(&DiskFs, &config)?;

    assert_eq!(
        tree_listing(temp_dir.path())?,
        vec![
            "MyFolder/",
            "MyFolder/report2023.txt",
            // Without recursion the nested directory keeps its name.
            "MyFolder/sub dir/",
            "MyFolder/sub dir/deep file.txt",
            "draft_v1_final/",
            "loose file.txt",
        ]
    );
    Ok(())
}

#[test]
fn test_pattern_removal() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let config = RenameConfig::new(temp_dir.path()).with_patterns(&[String::from("_v1")])?;

    execute(&DiskFs, &config)?;

    let listing = tree_listing(temp_dir.path())?;
    assert!(listing.contains(&String::from("draft_final/")));
    assert!(!listing.contains(&String::from("draft_v1_final/")));
    Ok(())
}

#[test]
fn test_patterns_apply_in_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_dir(temp_dir.path(), "banana")?;
    let config = RenameConfig::new(temp_dir.path())
        .with_patterns(&[String::from("a"), String::from("b")])?;

    execute(&DiskFs, &config)?;

    assert_eq!(tree_listing(temp_dir.path())?, vec!["nn/"]);
    Ok(())
}

#[test]
fn test_recursive_rename_addresses_children_through_new_parent() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "my root/s ub/file 1.txt")?;
    let mut config = RenameConfig::new(temp_dir.path());
    config.recurse = true;
    config.remove_whitespace = true;

    let fs = RecordingDisk::new();
    let report = execute(&fs, &config)?;

    let root = temp_dir.path();
    assert_eq!(
        fs.recorded(),
        vec![
            (root.join("my root"), root.join("myroot")),
            (root.join("myroot/s ub"), root.join("myroot/sub")),
            (root.join("myroot/sub/file 1.txt"), root.join("myroot/sub/file1.txt")),
        ]
    );
    assert_eq!(
        tree_listing(root)?,
        vec!["myroot/", "myroot/sub/", "myroot/sub/file1.txt"]
    );

    let planned: Vec<PathBuf> = report.preview.iter().map(|line| line.updated.clone()).collect();
    let performed: Vec<PathBuf> = fs.recorded().into_iter().map(|(_, to)| to).collect();
    assert_eq!(planned, performed, "Preview order should match commit order");
    Ok(())
}

#[test]
fn test_dry_run_previews_without_touching_disk() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let before = tree_listing(temp_dir.path())?;

    let mut config = RenameConfig::new(temp_dir.path()).with_patterns(&[String::from("_v1")])?;
    config.recurse = true;
    config.remove_whitespace = true;
    config.dry_run = true;

    let dry = execute(&DiskFs, &config)?;
    assert_eq!(tree_listing(temp_dir.path())?, before);
    assert!(dry.committed.is_none());

    config.dry_run = false;
    let real = execute(&DiskFs, &config)?;

    assert_eq!(dry.preview, real.preview, "Dry run should plan the same renames");
    assert_ne!(tree_listing(temp_dir.path())?, before);
    Ok(())
}

#[test]
fn test_no_transforms_is_a_no_op() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let before = tree_listing(temp_dir.path())?;
    let mut config = RenameConfig::new(temp_dir.path());
    config.recurse = true;

    let report = execute(&DiskFs, &config)?;

    assert!(report.preview.iter().all(|line| !line.is_changed()));
    let summary = report.committed.expect("commit should have run");
    assert_eq!(summary.renamed, 0);
    assert_eq!(summary.unchanged, 5);
    assert_eq!(tree_listing(temp_dir.path())?, before);
    Ok(())
}
