#![no_main]

use libfuzzer_sys::fuzz_target;
use gearcut::{Chunk, ChunkConfig, Chunker};

fn chunk_all(data: &[u8], config: ChunkConfig) -> Vec<Chunk> {
    Chunker::new(data, config)
        .unwrap()
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

fuzz_target!(|data: Vec<u8>| {
    let configs = [
        ChunkConfig::new(4, 16, 64).unwrap(),
        ChunkConfig::new(64, 256, 1024).unwrap(),
        ChunkConfig::new(256, 4096, 16384).unwrap(),
        ChunkConfig::new(7, 7, 7).unwrap(),
        ChunkConfig::default(),
    ];

    for config in configs {
        let chunks = chunk_all(&data, config);

        // Bounds: every chunk but the last is within [min, max]
        for (i, chunk) in chunks.iter().enumerate() {
            assert!(!chunk.is_empty());
            assert!(chunk.len() <= config.max_size());
            if i < chunks.len() - 1 {
                assert!(chunk.len() >= config.min_size());
            }
        }

        // Partition: contiguous offsets, concatenation equals input
        let mut expected_offset = 0u64;
        let mut rebuilt = Vec::with_capacity(data.len());
        for chunk in &chunks {
            assert_eq!(chunk.offset, expected_offset);
            expected_offset += chunk.len() as u64;
            rebuilt.extend_from_slice(&chunk.data);
        }
        assert_eq!(rebuilt, data);

        // Determinism
        assert_eq!(chunks, chunk_all(&data, config));
    }
});
