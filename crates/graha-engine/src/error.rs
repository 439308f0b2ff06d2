//! Resolution error types for graha-engine.

use graha_core::{CoreError, ObjectKey};

/// Errors from registry lookups and attribute resolution.
///
/// Errors bubble unchanged to the session's caller; nothing is retried and
/// no partial result is cached.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// The catalog has no descriptor for this key.
    #[error("unknown object key: {0}")]
    UnknownObjectKey(ObjectKey),

    /// The snapshot has no position for this key.
    #[error("missing position for {0}")]
    MissingPosition(ObjectKey),

    /// Resolution re-entered a key that is already being resolved.
    #[error("cyclic resolution of {key} (path: {})", render_path(.path))]
    CyclicResolution {
        key: ObjectKey,
        /// In-progress keys from the outermost call, ending with `key`.
        path: Vec<ObjectKey>,
    },

    /// Invalid descriptor or positional data.
    #[error("core error: {0}")]
    Core(#[from] CoreError),
}

fn render_path(path: &[ObjectKey]) -> String {
    path.iter()
        .map(|key| key.as_str())
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_resolution_renders_path() {
        let err = EngineError::CyclicResolution {
            key: ObjectKey::Sy,
            path: vec![ObjectKey::Sy, ObjectKey::Ma, ObjectKey::Sy],
        };
        assert_eq!(
            err.to_string(),
            "cyclic resolution of Sy (path: Sy -> Ma -> Sy)"
        );
    }
}
