#![allow(missing_docs)]

use markpiece::{MarkTokenizer, TrainOptions, vocab::io::TokenizerSnapshot};
use proptest::prelude::*;

const SAMPLES: &[&str] = &[
    "hello world",
    "The quick brown fox jumps over the lazy dog.",
    "It's a beautiful day, and I'll be taking my 3 dogs for a walk.",
    "Don't forget: the temperature is 72 degrees!",
    "  multiple   spaces  ",
    "line1\nline2\r\nline3",
    "123 + 456 = 789",
    "caf\u{00e9} na\u{00ef}ve gar\u{00e7}on",
    "$$$!!!...---",
    " ",
    "a",
    "\t\ttabs\tand\tspaces ",
];

const CORPUS: &str = "The quick brown fox jumps over the lazy dog. \
    The dog was not amused, and the fox did it again and again. \
    hello world, hello moon, hello sun and stars. \
    It's a beautiful day for a walk; don't forget the dogs.";

fn trained(target: usize) -> MarkTokenizer<u32> {
    let mut tokenizer = MarkTokenizer::new();
    tokenizer.train(CORPUS, &TrainOptions::new(target)).unwrap();
    tokenizer
}

#[test]
fn roundtrip_samples() {
    let tokenizer = trained(400);

    for text in SAMPLES {
        let tokens = tokenizer.encode(text, &[] as &[&str]).unwrap();
        let decoded = tokenizer.decode(&tokens).unwrap();
        assert_eq!(&decoded, text, "Roundtrip mismatch: {text:?}");
    }
}

#[test]
fn roundtrip_with_special_tokens() {
    let mut tokenizer: MarkTokenizer<u32> = MarkTokenizer::new();
    tokenizer
        .train(
            CORPUS,
            &TrainOptions::new(400).with_special_tokens(["<|eot|>", "<|pad|>"]),
        )
        .unwrap();

    let text = "hello world<|eot|>the dog<|pad|><|eot|>";
    let tokens = tokenizer.encode(text, &["<|eot|>", "<|pad|>"]).unwrap();
    assert_eq!(tokenizer.decode(&tokens).unwrap(), text);

    // Each allowed special occurrence is a single token.
    let eot = tokenizer.vocab().lookup_token("<|eot|>").unwrap();
    assert_eq!(tokens.iter().filter(|&&t| t == eot).count(), 2);
}

#[test]
fn roundtrip_through_snapshot() {
    let tokenizer = trained(400);
    let snapshot = TokenizerSnapshot::from_tokenizer(&tokenizer);
    let restored: MarkTokenizer<u32> = snapshot.into_tokenizer().unwrap();

    for text in SAMPLES {
        assert_eq!(
            restored.encode(text, &[] as &[&str]).unwrap(),
            tokenizer.encode(text, &[] as &[&str]).unwrap(),
            "Snapshot encode mismatch: {text:?}"
        );
    }
}

proptest! {
    #[test]
    fn roundtrip_printable_ascii(text in "[ -~]*") {
        use std::sync::LazyLock;
        static TOKENIZER: LazyLock<MarkTokenizer<u32>> = LazyLock::new(|| trained(320));

        let tokens = TOKENIZER.encode(&text, &[] as &[&str]).unwrap();
        let decoded = TOKENIZER.decode(&tokens).unwrap();
        prop_assert_eq!(decoded, text);
    }
}
