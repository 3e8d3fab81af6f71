use std::collections::BTreeMap;

use levenshtein_edits::prelude::*;
use levenshtein_edits::{char_align, char_distance, word_align, word_distance};

fn counts(pairs: &[(&str, usize)]) -> BTreeMap<String, usize> {
    pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect()
}

#[test]
fn both_empty() {
    assert_eq!(char_distance("", ""), Ok(0));
    assert_eq!(word_distance("", ""), Ok(0));
    let (d, stats) = char_align("", "").unwrap();
    assert_eq!(d, 0);
    assert!(stats.is_empty());
    let (d, stats) = word_align("   ", "\t\n").unwrap();
    assert_eq!(d, 0);
    assert!(stats.is_empty());
}

#[test]
fn one_side_empty() {
    let (d, stats) = char_align("", "abcab").unwrap();
    assert_eq!(d, 5);
    assert_eq!(stats.ins, counts(&[("a", 2), ("b", 2), ("c", 1)]));

    let (d, stats) = word_align("the cat the dog", "").unwrap();
    assert_eq!(d, 4);
    assert_eq!(stats.dels, counts(&[("the", 2), ("cat", 1), ("dog", 1)]));
    assert!(stats.ins.is_empty() && stats.subs.is_empty());
}

#[test]
fn identical() {
    for s in ["a", "kitten", "résumé", "日本語のテキスト"] {
        let (d, stats) = char_align(s, s).unwrap();
        assert_eq!(d, 0);
        assert!(stats.is_empty(), "{s:?}");
    }
    let (d, stats) = word_align("to be or not", "to  be\tor not ").unwrap();
    assert_eq!(d, 0);
    assert!(stats.is_empty());
}

#[test]
fn code_points_not_bytes() {
    // 'é' is two bytes in UTF-8 but a single symbol.
    let (d, stats) = char_align("cafe", "café").unwrap();
    assert_eq!(d, 1);
    assert_eq!(stats.subs, counts(&[("eé", 1)]));
}

#[test]
fn substitution_keys_concatenate() {
    let (d, stats) = word_align("a big dog", "a small dog").unwrap();
    assert_eq!(d, 1);
    assert_eq!(stats.subs, counts(&[("bigsmall", 1)]));
}

#[test]
fn tie_break_is_fixed() {
    let alignment = Levenshtein::<u32>::new().char_alignment("ab", "ba").unwrap();
    assert_eq!(alignment.distance, 2);
    assert_eq!(alignment.cigar.to_string(), "2X");
    assert_eq!(alignment.stats.subs, counts(&[("ab", 1), ("ba", 1)]));
}

#[test]
fn counter_overflow_is_an_error() {
    let a = "a".repeat(256);
    let err = Levenshtein::<u8>::new().char_distance(&a, "b").unwrap_err();
    assert_eq!(err, Error::CounterOverflow { len: 256, max: 255 });
    assert!(err.to_string().contains("256"));
    // One less than the maximum still fits.
    let a = "a".repeat(254);
    assert_eq!(Levenshtein::<u8>::new().char_distance(&a, ""), Ok(254));
    assert_eq!(Levenshtein::<u8>::new().char_distance(&a, "b"), Ok(254));
}

#[test]
fn stats_serialize() {
    let (_, stats) = char_align("kitten", "sitting").unwrap();
    let json = serde_json::to_string(&stats).unwrap();
    assert_eq!(
        json,
        r#"{"subs":{"ei":1,"ks":1},"ins":{"g":1},"dels":{}}"#
    );
    let back: EditStats = serde_json::from_str(&json).unwrap();
    assert_eq!(back, stats);
}
