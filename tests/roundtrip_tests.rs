//! End-to-end round-trip tests over the public API, including randomized
//! inputs over small alphabets.

use huffpack::{analyze, compress_text, decompress, CodecConfig, TokenizationMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn config(mode: TokenizationMode) -> CodecConfig {
    CodecConfig {
        mode,
        ..CodecConfig::default()
    }
}

fn assert_roundtrip(text: &str, mode: TokenizationMode) {
    let container = compress_text(text, &config(mode)).unwrap();
    assert_eq!(
        decompress(&container).unwrap(),
        text,
        "round-trip failed for {text:?} in {mode:?} mode"
    );
}

#[test]
fn roundtrip_fixed_corpus() {
    init_logging();
    let corpus = [
        "",
        "x",
        "aaaa",
        "aaabbc",
        "foo  bar\n",
        "the quick brown fox jumps over the lazy dog",
        "line one\nline two\r\nline three\ttabbed",
        "já estava compactado — ünïcode résistant ✓",
        "    ",
        "\n\n\n",
    ];
    for text in corpus {
        assert_roundtrip(text, TokenizationMode::Character);
        assert_roundtrip(text, TokenizationMode::Word);
    }
}

#[test]
fn roundtrip_random_inputs() {
    init_logging();
    let alphabet = ['a', 'b', 'c', 'd', ' ', '\n', '\t', 'é', '字'];
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    for _ in 0..200 {
        let len = rng.random_range(0..=64);
        let text: String = (0..len)
            .map(|_| alphabet[rng.random_range(0..alphabet.len())])
            .collect();
        assert_roundtrip(&text, TokenizationMode::Character);
        assert_roundtrip(&text, TokenizationMode::Word);
    }
}

#[test]
fn roundtrip_with_tiny_blocks() {
    init_logging();
    // A 1-bit block threshold flushes after every symbol, exercising block
    // framing as hard as possible.
    let config = CodecConfig {
        mode: TokenizationMode::Character,
        block_size_bits: 1,
    };
    let text = "many tiny blocks, one per symbol";
    let container = compress_text(text, &config).unwrap();

    let stats = analyze(&container).unwrap();
    assert_eq!(stats.block_count, text.chars().count());
    assert_eq!(decompress(&container).unwrap(), text);
}

#[test]
fn analyze_accounts_for_every_byte() {
    init_logging();
    let container = compress_text(
        "structure should always be self-consistent",
        &config(TokenizationMode::Word),
    )
    .unwrap();
    let stats = analyze(&container).unwrap();
    assert_eq!(
        stats.header_size + stats.block_count * 8 + stats.payload_bytes,
        stats.total_size
    );
    assert_eq!(stats.payload_bytes, (stats.payload_bits as usize).div_ceil(8));
}

#[test]
fn skewed_text_packs_below_one_byte_per_symbol() {
    init_logging();
    let text = "aaaaaaab".repeat(512);
    let container = compress_text(&text, &config(TokenizationMode::Character)).unwrap();
    let stats = analyze(&container).unwrap();
    assert!(
        stats.payload_bits < text.chars().count() as u64 * 8,
        "expected fewer payload bits than raw bits, got {}",
        stats.payload_bits
    );
}
