use crate::domain::ports::Storage;
use crate::utils::error::{MenuError, Result};
use base64::{engine::general_purpose::STANDARD, Engine};

/// Read an image through the storage port and base64-encode it (no data-URI
/// prefix). Unreadable or empty input is a fatal `EncodingError`.
pub async fn encode_image<S: Storage>(storage: &S, path: &str) -> Result<String> {
    let bytes = storage
        .read_file(path)
        .await
        .map_err(|e| MenuError::EncodingError {
            message: format!("cannot read {}: {}", path, e),
        })?;

    if bytes.is_empty() {
        return Err(MenuError::EncodingError {
            message: format!("{} contains no data", path),
        });
    }

    Ok(STANDARD.encode(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapStorage {
        files: HashMap<String, Vec<u8>>,
    }

    impl Storage for MapStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.get(path).cloned().ok_or_else(|| {
                MenuError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, _path: &str, _data: &[u8]) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_encode_produces_standard_base64() {
        let storage = MapStorage {
            files: HashMap::from([("menu.jpg".to_string(), b"jpeg bytes".to_vec())]),
        };

        let encoded = encode_image(&storage, "menu.jpg").await.unwrap();
        assert_eq!(encoded, STANDARD.encode(b"jpeg bytes"));
        assert!(!encoded.starts_with("data:"));
    }

    #[tokio::test]
    async fn test_missing_file_is_encoding_error() {
        let storage = MapStorage {
            files: HashMap::new(),
        };

        let err = encode_image(&storage, "missing.jpg").await.unwrap_err();
        assert!(matches!(err, MenuError::EncodingError { .. }));
    }

    #[tokio::test]
    async fn test_empty_file_is_encoding_error() {
        let storage = MapStorage {
            files: HashMap::from([("empty.jpg".to_string(), Vec::new())]),
        };

        let err = encode_image(&storage, "empty.jpg").await.unwrap_err();
        assert!(matches!(err, MenuError::EncodingError { .. }));
    }
}
