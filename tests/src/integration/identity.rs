//! # Identity Flow
//!
//! secp256k1 key pair → v4 node ID → custody subnets and columns.

#[cfg(test)]
mod tests {
    use das_custody::{
        custody_columns, custody_subnets, invariant_column_set_well_formed, CustodyConfig,
        NodeId,
    };
    use sha2::{Digest, Sha256};
    use shared_crypto::{keccak256, Secp256k1KeyPair};

    fn key_one() -> Secp256k1KeyPair {
        let mut secret = [0u8; 32];
        secret[31] = 1;
        Secp256k1KeyPair::from_bytes(secret).unwrap()
    }

    #[test]
    fn test_node_id_is_keccak_of_public_key() {
        let pair = key_one();
        let public = pair.public_key();
        let node_id = NodeId::from(pair.node_id());

        assert_eq!(node_id.as_bytes(), &keccak256(&public.as_bytes()[1..]));
        // Same digest Ethereum truncates into the address of key 1
        assert_eq!(
            hex::encode(&node_id.as_bytes()[12..]),
            "7e5f4552091a69125d5dfcb7b8c2659029395bdf"
        );
    }

    #[test]
    fn test_first_subnet_matches_manual_derivation() {
        let config = CustodyConfig::default();
        let node_id = NodeId::from(key_one().node_id());

        let base = node_id.leading_u64();
        let digest = Sha256::digest(base.to_be_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        let expected = u64::from_be_bytes(prefix) % config.subnet_count;

        let subnets = custody_subnets(&config, &node_id, 1).unwrap();
        assert_eq!(subnets, vec![expected]);

        let columns = custody_columns(&config, &node_id, 1).unwrap();
        let expected_columns: Vec<u64> = (0..4).map(|j| 32 * j + expected).collect();
        assert_eq!(columns.as_slice(), expected_columns.as_slice());
    }

    #[test]
    fn test_generated_identities_are_well_formed() {
        let config = CustodyConfig::default();
        for _ in 0..16 {
            let node_id = NodeId::from(Secp256k1KeyPair::generate().node_id());
            for custody in [1, 4, 8, 32] {
                let columns = custody_columns(&config, &node_id, custody).unwrap();
                assert!(invariant_column_set_well_formed(&config, &columns, custody));
            }
        }
    }

    #[test]
    fn test_hex_roundtrip_preserves_assignment() {
        let config = CustodyConfig::default();
        let node_id = NodeId::from(Secp256k1KeyPair::generate().node_id());
        let reparsed = NodeId::from_hex(&format!("0x{}", node_id.to_hex().to_uppercase())).unwrap();

        assert_eq!(reparsed, node_id);
        assert_eq!(
            custody_columns(&config, &reparsed, 4).unwrap(),
            custody_columns(&config, &node_id, 4).unwrap()
        );
    }

    #[test]
    fn test_custody_prefix_property() {
        // Custodying more subnets only appends to the list
        let config = CustodyConfig::default();
        let node_id = NodeId::from(key_one().node_id());
        let four = custody_subnets(&config, &node_id, 4).unwrap();
        let eight = custody_subnets(&config, &node_id, 8).unwrap();
        assert_eq!(&eight[..4], four.as_slice());
    }
}
