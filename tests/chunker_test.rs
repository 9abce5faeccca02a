// Integration tests for the Chunker pull API
// Tests cover: literal scenarios, partitioning, size bounds, failure states,
// short reads, edit locality, regression vectors

use std::io::{self, Cursor, Read};

use gearcut::{Chunk, ChunkConfig, ChunkError, Chunker};

/// Deterministic pseudo-random bytes (xorshift64).
fn xorshift_bytes(len: usize) -> Vec<u8> {
    let mut x: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..len)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            (x >> 32) as u8
        })
        .collect()
}

fn chunk_all<R: Read>(reader: R, config: ChunkConfig) -> Vec<Chunk> {
    Chunker::new(reader, config)
        .unwrap()
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

fn sizes(chunks: &[Chunk]) -> Vec<usize> {
    chunks.iter().map(Chunk::size).collect()
}

fn small_config() -> ChunkConfig {
    ChunkConfig::new(256, 1024, 4096).unwrap()
}

/// Hands out at most `step` bytes per read.
struct ShortReader {
    inner: Cursor<Vec<u8>>,
    step: usize,
}

impl Read for ShortReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.step);
        self.inner.read(&mut buf[..n])
    }
}

/// Serves `data`, then fails every read with `kind`.
struct FailingReader {
    data: Cursor<Vec<u8>>,
    kind: io::ErrorKind,
    reads: usize,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reads += 1;
        match self.data.read(buf)? {
            0 => Err(io::Error::new(self.kind, "source failed")),
            n => Ok(n),
        }
    }
}

// ============================================================================
// Literal Scenarios
// ============================================================================

#[test]
fn test_hello_world_default_config_is_one_chunk() {
    let mut chunker = Chunker::new(&b"hello world"[..], ChunkConfig::default()).unwrap();

    let chunk = chunker.next_chunk().unwrap().expect("one chunk");
    assert_eq!(chunk.offset, 0);
    assert_eq!(chunk.size(), 11);
    assert_eq!(&chunk.data[..], b"hello world");

    assert!(chunker.next_chunk().unwrap().is_none());
}

#[test]
fn test_hello_world_forced_by_max_size() {
    let config = ChunkConfig::new(1, 6, 6).unwrap();
    let mut chunker = Chunker::new(&b"hello world"[..], config).unwrap();

    let first = chunker.next_chunk().unwrap().unwrap();
    assert_eq!((first.offset, first.size()), (0, 6));
    assert_eq!(&first.data[..], b"hello ");

    let second = chunker.next_chunk().unwrap().unwrap();
    assert_eq!((second.offset, second.size()), (6, 5));
    assert_eq!(&second.data[..], b"world");

    assert!(chunker.next_chunk().unwrap().is_none());
}

#[test]
fn test_mask_override_cuts_after_each_word() {
    // The hash after "hello " has none of the bits 0xc set.
    let config = ChunkConfig::new(1, 32, 32)
        .unwrap()
        .with_mask_s_override(0xc);
    let chunks = chunk_all(&b"hello hello hello world"[..], config);

    let data: Vec<&[u8]> = chunks.iter().map(|c| &c.data[..]).collect();
    assert_eq!(data, [&b"hello "[..], b"hello ", b"hello ", b"world"]);
    assert_eq!(
        chunks.iter().map(|c| c.offset).collect::<Vec<_>>(),
        [0, 6, 12, 18]
    );
}

// ============================================================================
// Partitioning and Size Bounds
// ============================================================================

#[test]
fn test_empty_input_yields_end_immediately() {
    let mut chunker = Chunker::new(io::empty(), ChunkConfig::default()).unwrap();
    assert!(chunker.next_chunk().unwrap().is_none());
    assert!(chunker.next_chunk().unwrap().is_none());
}

#[test]
fn test_chunks_partition_the_input() {
    let data = xorshift_bytes(100_000);
    let chunks = chunk_all(Cursor::new(&data), small_config());

    let mut expected_offset = 0u64;
    let mut rebuilt = Vec::with_capacity(data.len());
    for chunk in &chunks {
        assert_eq!(chunk.offset, expected_offset, "chunks must be contiguous");
        assert!(!chunk.is_empty());
        expected_offset = chunk.end();
        rebuilt.extend_from_slice(&chunk.data);
    }
    assert_eq!(rebuilt, data, "concatenation must equal the input");
}

#[test]
fn test_size_bounds_hold_except_for_last_chunk() {
    let config = small_config();
    let data = xorshift_bytes(200_000);
    let chunks = chunk_all(Cursor::new(&data), config);

    let (last, body) = chunks.split_last().unwrap();
    for chunk in body {
        assert!(chunk.size() >= config.min_size(), "chunk below min: {chunk}");
        assert!(chunk.size() <= config.max_size(), "chunk above max: {chunk}");
    }
    assert!(last.size() >= 1 && last.size() <= config.max_size());
}

#[test]
fn test_constant_input_is_cut_at_max_size() {
    let data = vec![0u8; 200_000];
    let chunks = chunk_all(Cursor::new(&data), ChunkConfig::default());
    assert_eq!(sizes(&chunks), [65536, 65536, 65536, 3392]);
}

#[test]
fn test_degenerate_equal_sizes_give_fixed_chunks() {
    for k in [1usize, 7, 64] {
        let config = ChunkConfig::new(k, k, k).unwrap();
        let data = xorshift_bytes(1000);
        let chunks = chunk_all(Cursor::new(&data), config);

        assert_eq!(chunks.len(), data.len().div_ceil(k), "k = {k}");
        let (last, body) = chunks.split_last().unwrap();
        assert!(body.iter().all(|c| c.size() == k));
        let tail = data.len() % k;
        assert_eq!(last.size(), if tail == 0 { k } else { tail });
    }
}

#[test]
fn test_input_shorter_than_min_is_one_chunk() {
    let config = small_config();
    let data = xorshift_bytes(100);
    let chunks = chunk_all(Cursor::new(&data), config);
    assert_eq!(sizes(&chunks), [100]);
}

// ============================================================================
// Determinism and Short Reads
// ============================================================================

#[test]
fn test_boundaries_do_not_depend_on_read_sizes() {
    let config = small_config();
    let data = xorshift_bytes(50_000);
    let expected = chunk_all(Cursor::new(&data), config);

    for step in [1, 7, 1000, 4097] {
        let reader = ShortReader {
            inner: Cursor::new(data.clone()),
            step,
        };
        assert_eq!(chunk_all(reader, config), expected, "step = {step}");
    }
}

#[test]
fn test_same_input_same_chunks() {
    let data = xorshift_bytes(64 * 1024);
    let a = chunk_all(Cursor::new(&data), ChunkConfig::default());
    let b = chunk_all(Cursor::new(&data), ChunkConfig::default());
    assert_eq!(a, b);
}

// ============================================================================
// Regression Vectors
// ============================================================================

#[test]
fn test_regression_sizes_small_config() {
    let data = xorshift_bytes(32 * 1024);
    assert_eq!(&data[..8], &[0xae, 0xb9, 0x91, 0x0c, 0xe0, 0xce, 0x44, 0x2e]);

    let chunks = chunk_all(Cursor::new(&data), small_config());
    assert_eq!(
        sizes(&chunks),
        [
            1693, 999, 1045, 536, 1166, 1196, 1327, 1176, 1368, 1817, 1340, 1362, 1199, 1133,
            1354, 1154, 1472, 1557, 1239, 1619, 1280, 1058, 1571, 490, 260, 1026, 1331,
        ]
    );
}

#[test]
fn test_regression_sizes_default_config() {
    let data = xorshift_bytes(32 * 1024);
    let chunks = chunk_all(Cursor::new(&data), ChunkConfig::default());
    assert_eq!(sizes(&chunks), [22894, 9874]);
}

#[test]
fn test_insertion_only_disturbs_nearby_chunks() {
    let original = xorshift_bytes(32 * 1024);
    let mut edited = original[..100].to_vec();
    edited.extend_from_slice(b"0123456789");
    edited.extend_from_slice(&original[100..]);

    let before = chunk_all(Cursor::new(&original), small_config());
    let after = chunk_all(Cursor::new(&edited), small_config());
    assert_eq!(before.len(), 27);
    assert_eq!(after.len(), 28);

    let shared = after
        .iter()
        .filter(|c| before.iter().any(|b| b.data == c.data))
        .count();
    assert!(shared >= 25, "only {shared} chunks survived the edit");

    // Chunks after the edit move by exactly the inserted length.
    let tail_before = before.last().unwrap();
    let tail_after = after.last().unwrap();
    assert_eq!(tail_after.data, tail_before.data);
    assert_eq!(tail_after.offset, tail_before.offset + 10);
}

// ============================================================================
// Failure and Terminal States
// ============================================================================

#[test]
fn test_source_error_surfaces_on_next_call() {
    let reader = FailingReader {
        data: Cursor::new(Vec::new()),
        kind: io::ErrorKind::PermissionDenied,
        reads: 0,
    };
    let mut chunker = Chunker::new(reader, ChunkConfig::default()).unwrap();

    let err = chunker.next_chunk().unwrap_err();
    assert_eq!(err.io_kind(), Some(io::ErrorKind::PermissionDenied));
    assert!(matches!(err, ChunkError::Io(_)));
}

#[test]
fn test_failure_is_terminal() {
    let reader = FailingReader {
        data: Cursor::new(xorshift_bytes(100)),
        kind: io::ErrorKind::UnexpectedEof,
        reads: 0,
    };
    let mut chunker = Chunker::new(reader, small_config()).unwrap();

    assert!(matches!(chunker.next_chunk(), Err(ChunkError::Io(_))));
    let reads = chunker.get_ref().reads;

    for _ in 0..3 {
        let err = chunker.next_chunk().unwrap_err();
        assert!(matches!(err, ChunkError::Poisoned { .. }));
        assert_eq!(err.io_kind(), Some(io::ErrorKind::UnexpectedEof));
    }
    assert_eq!(chunker.get_ref().reads, reads, "source touched after failure");
}

#[test]
fn test_chunks_before_failure_are_delivered() {
    let config = ChunkConfig::new(4, 4, 4).unwrap();
    let reader = FailingReader {
        data: Cursor::new(b"abcdefghij".to_vec()),
        kind: io::ErrorKind::ConnectionReset,
        reads: 0,
    };
    let mut chunker = Chunker::new(reader, config).unwrap();

    assert_eq!(&chunker.next_chunk().unwrap().unwrap().data[..], b"abcd");
    assert_eq!(&chunker.next_chunk().unwrap().unwrap().data[..], b"efgh");
    let err = chunker.next_chunk().unwrap_err();
    assert_eq!(err.io_kind(), Some(io::ErrorKind::ConnectionReset));
}

#[test]
fn test_end_of_input_is_terminal() {
    let mut chunker = Chunker::new(&b"abc"[..], ChunkConfig::default()).unwrap();
    assert!(chunker.next_chunk().unwrap().is_some());
    for _ in 0..3 {
        assert!(chunker.next_chunk().unwrap().is_none());
    }
    assert!(chunker.is_finished());
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_invalid_configs_are_rejected() {
    assert!(ChunkConfig::new(0, 0, 0).is_err());
    assert!(ChunkConfig::new(10, 5, 20).is_err());
    assert!(ChunkConfig::new(1, 30, 20).is_err());
    assert!(ChunkConfig::new(1, 1, 1).is_ok());
    assert!(ChunkConfig::new(0, 6, 6).is_ok());

    let bad = ChunkConfig::default().with_normal_size(1 << 20);
    assert!(matches!(
        Chunker::new(io::empty(), bad),
        Err(ChunkError::InvalidConfig { .. })
    ));
}

#[test]
fn test_non_power_of_two_sizes() {
    let config = ChunkConfig::new(300, 1000, 3000).unwrap();
    let data = xorshift_bytes(50_000);
    let chunks = chunk_all(Cursor::new(&data), config);

    let total: usize = chunks.iter().map(Chunk::size).sum();
    assert_eq!(total, data.len());
    let (_, body) = chunks.split_last().unwrap();
    assert!(body.iter().all(|c| (300..=3000).contains(&c.size())));
}
