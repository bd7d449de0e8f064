// src/core/propagate.rs
use crate::core::transform::Transform;
use crate::models::DirectoryNode;

/// Runs each transform as its own full pass over the tree, in the given order.
///
/// Every pass rewrites `updated_name` from the previous pass's output, so
/// `original_name` and the tree's shape are never touched.
#[inline]
pub fn apply(tree: &mut [DirectoryNode], transforms: &[Transform]) {
    for transform in transforms {
        for directory in tree.iter_mut() {
            apply_to_directory(directory, transform);
        }
    }
}

fn apply_to_directory(directory: &mut DirectoryNode, transform: &Transform) {
    directory.updated_name = transform.apply(&directory.updated_name);
    for file in &mut directory.files {
        file.updated_name = transform.apply(&file.updated_name);
    }
    for subdirectory in &mut directory.subdirectories {
        apply_to_directory(subdirectory, transform);
    }
}
