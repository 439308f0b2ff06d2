//! Resolution policy configuration.

use serde::{Deserialize, Serialize};

/// What a character rule does when a peer's resolution is already in
/// progress further up the call stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePolicy {
    /// Resolve peers recursively; a re-entered peer contributes its base
    /// character.
    #[default]
    BaseCharacter,
    /// Never resolve peers; every peer contributes its base character.
    PeerBase,
    /// Resolve peers recursively; re-entering a peer is an error.
    Fail,
}

/// Which tally bucket a `Mixed` peer counts towards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MixedPeerBucket {
    /// Anything that is not benign counts as malefic.
    #[default]
    Malefic,
    Benefic,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResolutionConfig {
    /// Cycle handling for recursive peer lookups.
    #[serde(default)]
    pub cycle_policy: CyclePolicy,

    /// Bucket for peers that resolve to `Mixed`.
    #[serde(default)]
    pub mixed_peer_bucket: MixedPeerBucket,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ResolutionConfig::default();
        assert_eq!(config.cycle_policy, CyclePolicy::BaseCharacter);
        assert_eq!(config.mixed_peer_bucket, MixedPeerBucket::Malefic);
    }
}
