//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Password hashing parameters and input bounds.
///
/// The Argon2id defaults land around 100ms per hash on a small cloud VM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_memory_kib")]
    pub hash_memory_kib: u32,
    /// Argon2 iteration count.
    #[serde(default = "default_iterations")]
    pub hash_iterations: u32,
    /// Argon2 lanes.
    #[serde(default = "default_parallelism")]
    pub hash_parallelism: u32,
    /// Longest identity accepted, in characters.
    #[serde(default = "default_max_identity")]
    pub max_identity_length: usize,
    /// Longest secret accepted, in bytes.
    #[serde(default = "default_max_secret")]
    pub max_secret_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            hash_memory_kib: default_memory_kib(),
            hash_iterations: default_iterations(),
            hash_parallelism: default_parallelism(),
            max_identity_length: default_max_identity(),
            max_secret_length: default_max_secret(),
        }
    }
}

fn default_memory_kib() -> u32 {
    19 * 1024
}

fn default_iterations() -> u32 {
    3
}

fn default_parallelism() -> u32 {
    1
}

fn default_max_identity() -> usize {
    64
}

fn default_max_secret() -> usize {
    1024
}
