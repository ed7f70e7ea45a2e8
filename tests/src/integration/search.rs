//! # Search Flow
//!
//! `CustodyService` searches driven by each candidate source.

#[cfg(test)]
mod tests {
    use das_custody::{
        custody_columns, CancellationToken, CustodyApi, CustodyConfig, CustodyError,
        CustodyService, NodeId, RandomNodeIdSource, SearchControl, Secp256k1NodeIdSource,
    };
    use rand::RngCore;
    use shared_crypto::Secp256k1KeyPair;
    use std::time::Duration;

    fn random_node_id() -> NodeId {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        NodeId::new(bytes)
    }

    #[test]
    fn test_keypair_search_finds_equivalent() {
        let config = CustodyConfig::default();
        let service = CustodyService::new(config, Secp256k1NodeIdSource::new());
        let source = NodeId::from(Secp256k1KeyPair::generate().node_id());

        let report = service
            .find_equivalent_node_id(&source, 1, &SearchControl::unbounded())
            .unwrap();

        assert_eq!(report.columns, custody_columns(&config, &source, 1).unwrap());
        assert_eq!(
            custody_columns(&config, &report.node_id, 1).unwrap(),
            report.columns
        );
    }

    #[test]
    fn test_seeded_search_is_reproducible() {
        let config = CustodyConfig::default();
        let source = random_node_id();

        let first = CustodyService::new(config, RandomNodeIdSource::seeded(2024))
            .find_equivalent_node_id(&source, 2, &SearchControl::unbounded())
            .unwrap();
        let second = CustodyService::new(config, RandomNodeIdSource::seeded(2024))
            .find_equivalent_node_id(&source, 2, &SearchControl::unbounded())
            .unwrap();

        assert_eq!(first.node_id, second.node_id);
        assert_eq!(first.attempts, second.attempts);
    }

    #[test]
    fn test_parallel_service_finds_equivalent() {
        let config = CustodyConfig::default();
        let service =
            CustodyService::new(config, RandomNodeIdSource::seeded(8)).with_workers(4);
        let source = random_node_id();

        let report = service
            .find_equivalent_node_id(&source, 2, &SearchControl::unbounded())
            .unwrap();

        assert_eq!(report.columns, custody_columns(&config, &source, 2).unwrap());
    }

    #[test]
    fn test_cancel_from_another_thread() {
        let config = CustodyConfig::default();
        let service =
            CustodyService::new(config, RandomNodeIdSource::seeded(5)).with_workers(2);
        let token = CancellationToken::new();
        let control = SearchControl::unbounded().with_cancellation(token.clone());

        let canceller = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(50));
            token.cancel();
        });

        // Full custody: effectively never matches
        let result = service.find_equivalent_node_id(&NodeId::ZERO, 32, &control);
        canceller.join().unwrap();

        assert!(matches!(result, Err(CustodyError::SearchCancelled { .. })));
    }

    #[test]
    fn test_exhausted_reports_attempts() {
        let config = CustodyConfig::default();
        let service = CustodyService::new(config, RandomNodeIdSource::seeded(1));
        let control = SearchControl::unbounded().with_max_attempts(25);

        let result = service.find_equivalent_node_id(&NodeId::ZERO, 32, &control);

        assert_eq!(result, Err(CustodyError::SearchExhausted { attempts: 25 }));
    }
}
