//! Property-based tests for the tokenizer: arbitrary nested documents
//! round-trip, and single-byte perturbations never panic.

use jtok::{RawToken, Status, TokenPool};
use proptest::prelude::*;

fn arb_key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}".prop_map(|s| s)
}

fn arb_number() -> impl Strategy<Value = String> {
    prop_oneof![
        (-1000i64..1000).prop_map(|n| n.to_string()),
        (-100.0f64..100.0).prop_map(|f| format!("{:.3}", f)),
    ]
}

fn arb_leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_number(),
        Just("true".to_string()),
        Just("false".to_string()),
        Just("null".to_string()),
        "[a-zA-Z0-9 ]{0,10}".prop_map(|s| format!("\"{s}\"")),
    ]
}

/// Arbitrary JSON values nested up to a handful of levels deep, comfortably
/// inside the default recursion cap.
fn arb_value() -> impl Strategy<Value = String> {
    arb_leaf().prop_recursive(4, 64, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|elems| format!("[{}]", elems.join(","))),
            prop::collection::vec((arb_key(), inner), 0..4).prop_map(|pairs| {
                let body = pairs
                    .into_iter()
                    .map(|(k, v)| format!("\"{k}\":{v}"))
                    .collect::<Vec<_>>()
                    .join(",");
                format!("{{{body}}}")
            }),
        ]
    })
}

/// Arbitrary JSON objects (always valid top-level documents for this
/// tokenizer, since the root must be an Object).
fn arb_document() -> impl Strategy<Value = String> {
    prop::collection::vec((arb_key(), arb_value()), 0..6).prop_map(|pairs| {
        let body = pairs
            .into_iter()
            .map(|(k, v)| format!("\"{k}\":{v}"))
            .collect::<Vec<_>>()
            .join(",");
        format!("{{{body}}}")
    })
}

fn parse_to_status(src: &str) -> Result<(), Status> {
    let mut buf = vec![RawToken::default(); 2048];
    let mut pool = TokenPool::new(src.as_bytes(), &mut buf);
    pool.parse().map(|_| ()).map_err(|e| e.status)
}

proptest! {
    #[test]
    fn arbitrary_documents_parse_successfully(doc in arb_document()) {
        prop_assert!(parse_to_status(&doc).is_ok());
    }

    #[test]
    fn reparsing_an_arbitrary_document_yields_an_equal_tree(doc in arb_document()) {
        let mut buf1 = vec![RawToken::default(); 2048];
        let mut buf2 = vec![RawToken::default(); 2048];
        let mut p1 = TokenPool::new(doc.as_bytes(), &mut buf1);
        let mut p2 = TokenPool::new(doc.as_bytes(), &mut buf2);
        let a = p1.parse();
        let b = p2.parse();
        prop_assert_eq!(a.is_ok(), b.is_ok());
        if let (Ok(a), Ok(b)) = (a, b) {
            prop_assert!(a.equal(&b));
        }
    }

    #[test]
    fn every_token_equals_itself(doc in arb_document()) {
        let mut buf = vec![RawToken::default(); 2048];
        let mut pool = TokenPool::new(doc.as_bytes(), &mut buf);
        if let Ok(root) = pool.parse() {
            prop_assert!(root.equal(&root));
        }
    }

    /// Dropping or flipping one structural byte from a valid document must
    /// never panic, and must either still parse or fail with some member of
    /// the `Status` vocabulary -- there is no third outcome.
    #[test]
    fn perturbing_one_byte_never_panics(doc in arb_document(), index in any::<usize>()) {
        if doc.is_empty() {
            return Ok(());
        }
        let drop_index = index % doc.len();
        let mut dropped = doc.clone().into_bytes();
        dropped.remove(drop_index);
        let _ = parse_to_status(&String::from_utf8_lossy(&dropped));

        let flip_index = index % doc.len();
        let mut flipped = doc.clone().into_bytes();
        flipped[flip_index] = match flipped[flip_index] {
            b'{' => b'[',
            b'[' => b'{',
            b',' => b':',
            other => other.wrapping_add(1),
        };
        let _ = parse_to_status(&String::from_utf8_lossy(&flipped));
    }
}
