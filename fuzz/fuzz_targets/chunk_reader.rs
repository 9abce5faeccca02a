#![no_main]

use std::io::{self, Read};

use libfuzzer_sys::fuzz_target;
use gearcut::{ChunkConfig, Chunker};

/// Serves `data` in pieces whose sizes come from `steps`.
struct ShapedReader<'a> {
    data: &'a [u8],
    steps: &'a [u8],
    pos: usize,
}

impl Read for ShapedReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let step = if self.steps.is_empty() {
            buf.len()
        } else {
            self.steps[self.pos % self.steps.len()] as usize + 1
        };
        self.pos += 1;
        let n = step.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

fuzz_target!(|input: (Vec<u8>, Vec<u8>)| {
    let (data, steps) = input;
    let config = ChunkConfig::new(16, 64, 256).unwrap();

    let expected: Vec<_> = Chunker::new(&data[..], config)
        .unwrap()
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();

    // Boundaries must not depend on how the reader splits its data
    let reader = ShapedReader {
        data: &data,
        steps: &steps,
        pos: 0,
    };
    let shaped: Vec<_> = Chunker::new(reader, config)
        .unwrap()
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(expected, shaped);
});
