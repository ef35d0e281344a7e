//! Utility functions and helpers

use sha2::{Digest, Sha256};

/// Generate a short hash of the given content
pub fn hash_content(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let result = hasher.finalize();
    hex::encode(&result[..8])
}

/// Normalize a module path so rule patterns see forward slashes on every platform
pub fn normalize_module_path(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_content() {
        let hash = hash_content(b"hello world");
        assert_eq!(hash.len(), 16);
        assert_eq!(hash, hash_content(b"hello world"));
        assert_ne!(hash, hash_content(b"hello world!"));
    }

    #[test]
    fn test_normalize_module_path() {
        assert_eq!(normalize_module_path(r"src\App\Main.fs"), "src/App/Main.fs");
        assert_eq!(normalize_module_path("src/main.js"), "src/main.js");
    }
}
