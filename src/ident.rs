//! Identifier generation: time+host-based (version 1) and random
//! (version 4) UUIDs.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Time-based UUID whose node segment derives from the local hostname.
///
/// The node id is the first six bytes of SHA-256 over the hostname, not
/// a MAC address, so it stays stable across interface changes.
pub fn time_based() -> Uuid {
    Uuid::now_v1(&node_id())
}

/// Random UUID.
pub fn random() -> Uuid {
    Uuid::new_v4()
}

fn node_id() -> [u8; 6] {
    let hostname = gethostname::gethostname();
    let digest = Sha256::digest(hostname.to_string_lossy().as_bytes());
    let mut node = [0u8; 6];
    node.copy_from_slice(&digest[..6]);
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_based_is_version_1() {
        assert_eq!(time_based().get_version_num(), 1);
    }

    #[test]
    fn random_is_version_4() {
        assert_eq!(random().get_version_num(), 4);
    }

    #[test]
    fn node_id_is_stable_within_a_host() {
        assert_eq!(node_id(), node_id());
    }

    #[test]
    fn successive_ids_differ() {
        assert_ne!(time_based(), time_based());
        assert_ne!(random(), random());
    }
}
