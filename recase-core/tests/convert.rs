//! End-to-end conversion behavior of the engine.

use recase_core::{CaseStyle, Error, TokenSequence, convert, convert_named, format, tokenize};

#[test]
fn test_documented_conversions() {
    let cases = [
        ("firstName", CaseStyle::Kebab, "first-name"),
        ("User ID", CaseStyle::Kebab, "user-id"),
        ("already-kebab-case", CaseStyle::Kebab, "already-kebab-case"),
        ("hello_world", CaseStyle::Camel, "helloWorld"),
        (
            "  multiple   separators---here__",
            CaseStyle::Camel,
            "multipleSeparatorsHere",
        ),
        ("user@name!", CaseStyle::Camel, "userName"),
        (
            "some_lengthy-example with-multiple   separators",
            CaseStyle::Camel,
            "someLengthyExampleWithMultipleSeparators",
        ),
        ("hello world", CaseStyle::Dot, "hello.world"),
    ];

    for (input, style, expected) in cases {
        assert_eq!(convert(input, style), expected, "{input:?} as {style}");
    }
}

#[test]
fn test_acronym_runs_stay_together() {
    assert_eq!(convert("XMLHttpRequest", CaseStyle::Camel), "xmlhttpRequest");
    assert_eq!(convert("parseHTML", CaseStyle::Snake), "parse_html");
}

#[test]
fn test_missing_and_blank_input() {
    for style in CaseStyle::ALL {
        assert_eq!(convert(&None::<&str>, style), "");
        assert_eq!(convert(&None::<String>, style), "");
        assert_eq!(convert("", style), "");
        assert_eq!(convert("   ", style), "");
        assert_eq!(convert("_-_ --", style), "");
        assert_eq!(convert(&serde_json::json!(42), style), "");
    }
}

#[test]
fn test_conversion_is_idempotent() {
    let inputs = [
        "firstName",
        "User ID",
        "XMLHttpRequest",
        "  multiple   separators---here__",
        "user@name!",
        "some_lengthy-example with-multiple   separators",
        "HELLO_WORLD",
    ];

    for style in CaseStyle::ALL {
        for input in inputs {
            let once = convert(input, style);
            let again = format(&tokenize(&once), style);
            assert_eq!(again, once, "{input:?} as {style}");
        }
    }
}

#[test]
fn test_single_letter_runs_do_not_round_trip() {
    // Adjacent capitals read back as one word.
    let camel = convert("a b c", CaseStyle::Camel);
    assert_eq!(camel, "aBC");
    assert_eq!(tokenize(&camel).to_strs(), ["a", "bc"]);
}

#[test]
fn test_separator_runs_collapse() {
    let runs = ["-", "_", " ", "--", "_ -", "   ", "-_-_-", " _ "];
    for style in CaseStyle::ALL {
        let single = convert("alpha-beta", style);
        for run in runs {
            let input = format!("alpha{run}beta");
            assert_eq!(convert(&input, style), single, "{input:?} as {style}");
        }
    }
}

#[test]
fn test_word_order_preserved() {
    let words = tokenize("zeta alphaBeta_gamma-delta");
    assert_eq!(words.to_strs(), ["zeta", "alpha", "beta", "gamma", "delta"]);
}

#[test]
fn test_unknown_style_name_fails_loudly() {
    let err = convert_named("firstName", "sarcastic").unwrap_err();
    assert_eq!(err, Error::unknown_style("sarcastic"));
    assert_eq!(
        convert_named("firstName", "kebab-case").unwrap(),
        "first-name"
    );
}

#[test]
fn test_hand_built_sequences() {
    let words = TokenSequence::try_from_words(["Content", "TYPE"]).unwrap();
    assert_eq!(format(&words, CaseStyle::Train), "Content-Type");
    assert!(TokenSequence::try_from_words(["content-type"]).is_err());
}

#[test]
fn test_engine_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CaseStyle>();
    assert_send_sync::<TokenSequence>();
    assert_send_sync::<Error>();

    let handles: Vec<_> = CaseStyle::ALL
        .into_iter()
        .map(|style| std::thread::spawn(move || convert("parallelWork_item", style)))
        .collect();
    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0], "parallel-work-item");
    assert_eq!(results[1], "parallelWorkItem");
}
