// src/core.rs
pub mod commit;
pub mod fs;
pub mod pipeline;
pub mod preview;
pub mod propagate;
pub mod snapshot;
pub mod transform;

#[cfg(test)]
pub mod test_utils;
