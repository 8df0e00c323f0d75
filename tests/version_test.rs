use version_track::{Version, VersionTrackError};

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_release() {
    let v = Version::parse("0.0.1").unwrap();
    assert_eq!(v, Version::new(0, 0, 1));
    assert!(v.is_release());
    assert!(!v.is_snapshot());
}

#[test]
fn test_parse_snapshot() {
    let v = Version::parse("0.0.1-SNAPSHOT").unwrap();
    assert_eq!(v, Version::new_snapshot(0, 0, 1));
    assert!(v.is_snapshot());
}

#[test]
fn test_parse_rejects_illegal_format() {
    let inputs = [
        "",
        "   ",
        "lkjzughvihkgv",
        "1",
        "1.2",
        "1.2.3.4",
        "1..3",
        "1.2.",
        ".2.3",
        "1.2.3-",
        "1.2.3-SNAP",
        "1.2.3-snapshot",
        "1.2.3-SNAPSHOT ok",
        "SNAPSHOT-1.2.3",
        "+1.2.3",
        "1.+2.3",
        "-1.2.3",
        "1.2.-3",
        "v1.2.3",
    ];

    for input in inputs {
        let result = Version::parse(input);
        assert!(
            matches!(result, Err(VersionTrackError::Parse(_))),
            "'{}' should be rejected, got: {:?}",
            input,
            result
        );
    }
}

#[test]
fn test_parse_error_names_the_input() {
    let err = Version::parse("not-a-version").unwrap_err();
    assert!(
        err.to_string().contains("not-a-version"),
        "Error should mention the offending input, got: {}",
        err
    );
}

#[test]
fn test_parse_canonicalizes_but_accepts_loose_input() {
    // whitespace and leading zeros differ from canonical output
    let v = Version::parse("  00.001.010-SNAPSHOT\n").unwrap();
    assert_eq!(v.to_string(), "0.1.10-SNAPSHOT");
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_compare_release_versions() {
    let older = Version::parse("0.0.1").unwrap();
    let newer = Version::parse("0.0.3").unwrap();
    assert!(older < newer);
    assert!(newer > older);
}

#[test]
fn test_compare_snapshot_below_its_release() {
    let snapshot = Version::parse("1.2.3-SNAPSHOT").unwrap();
    let release = Version::parse("1.2.3").unwrap();
    assert!(snapshot < release);
    assert!(release > snapshot);
}

#[test]
fn test_compare_equal_release_versions() {
    let a = Version::parse("0.0.1").unwrap();
    let b = Version::parse("0.0.1").unwrap();
    assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
    assert_eq!(a, b);
}

#[test]
fn test_compare_equal_snapshot_versions() {
    let a = Version::parse("0.0.1-SNAPSHOT").unwrap();
    let b = Version::parse("0.0.1-SNAPSHOT").unwrap();
    assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
    assert_eq!(a, b);
}

#[test]
fn test_numeric_comparison_not_textual() {
    // 10 > 9 numerically even though "10" < "9" as text
    assert!(Version::parse("0.10.0").unwrap() > Version::parse("0.9.0").unwrap());
    assert!(Version::parse("10.0.0").unwrap() > Version::parse("9.99.99").unwrap());
}

#[test]
fn test_sorting_places_snapshots_before_their_release() {
    let mut versions = vec![
        Version::parse("1.0.0").unwrap(),
        Version::parse("0.9.0").unwrap(),
        Version::parse("1.0.0-SNAPSHOT").unwrap(),
        Version::parse("0.9.1-SNAPSHOT").unwrap(),
    ];
    versions.sort();

    let rendered: Vec<String> = versions.iter().map(Version::to_string).collect();
    assert_eq!(
        rendered,
        ["0.9.0", "0.9.1-SNAPSHOT", "1.0.0-SNAPSHOT", "1.0.0"]
    );
}

// ============================================================================
// Formatting and value semantics
// ============================================================================

#[test]
fn test_display_round_trip() {
    for input in ["0.0.1", "1.2.3-SNAPSHOT", "10.20.30"] {
        let parsed = Version::parse(input).unwrap();
        let reparsed = Version::parse(&parsed.to_string()).unwrap();
        assert_eq!(parsed, reparsed);
        assert_eq!(parsed.to_string(), reparsed.to_string());
    }
}

#[test]
fn test_clone_preserves_observable_state() {
    let v = Version::parse("1.2.3-SNAPSHOT").unwrap();
    let copy = v.clone();
    assert_eq!(v, copy);
    assert_eq!(v.to_string(), copy.to_string());
    assert_eq!(v.is_snapshot(), copy.is_snapshot());
}

#[test]
fn test_as_release_pairs_snapshot_with_release() {
    let snapshot = Version::parse("2.1.0-SNAPSHOT").unwrap();
    let release = Version::parse("2.1.0").unwrap();
    assert_eq!(snapshot.as_release(), release);
}
