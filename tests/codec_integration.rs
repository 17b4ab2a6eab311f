use seedwords::error::Error;
use seedwords::wordlist::{Language, Separator};
use seedwords::{
    bytes_to_words, bytes_to_words_plain, detect, words_to_bytes, words_to_bytes_checked,
    Detection,
};

/// Seed byte lengths every supported word list must handle.
const SEED_LENGTHS: [usize; 5] = [16, 20, 24, 28, 32];

fn sample_seed(len: usize, salt: u8) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(73).wrapping_add(salt)).collect()
}

fn split_words(phrase: &str) -> Vec<&str> {
    phrase.split_whitespace().collect()
}

// The canonical scenario: a 32-byte all-zero buffer encoded in English with
// a checksum word must survive a full cycle with no language hint.
#[test]
fn zero_seed_full_cycle_without_hint() {
    let seed = [0u8; 32];
    let phrase = bytes_to_words(&seed, Language::English).expect("encode zero seed");
    assert_eq!(split_words(&phrase).len(), 25);

    let (recovered, language) =
        words_to_bytes_checked(&phrase, 32, None).expect("decode zero seed");
    assert_eq!(language, Language::English);
    assert_eq!(recovered.as_bytes(), &seed);
}

#[test]
fn checked_round_trip_every_language_and_length() {
    for language in Language::ALL {
        for len in SEED_LENGTHS {
            let seed = sample_seed(len, 0x11);
            let phrase = bytes_to_words(&seed, language)
                .unwrap_or_else(|e| panic!("{language} encode {len}B: {e}"));

            let (recovered, detected) = words_to_bytes_checked(&phrase, len, None)
                .unwrap_or_else(|e| panic!("{language} decode {len}B: {e}"));
            assert_eq!(detected, language);
            assert_eq!(
                recovered.as_bytes(),
                &seed[..],
                "{language} {len}B: {}",
                hex::encode(recovered.as_bytes())
            );
        }
    }
}

#[test]
fn plain_round_trip_every_language() {
    for language in Language::ALL {
        let seed = sample_seed(24, 0x42);
        let phrase = bytes_to_words_plain(&seed, language).expect("plain encode");
        let recovered = words_to_bytes(&phrase, 24).expect("plain decode");
        assert_eq!(recovered.as_bytes(), &seed[..], "{language}");
    }
}

#[test]
fn tampered_checksum_word_is_rejected() {
    let seed = sample_seed(32, 0x07);
    let phrase = bytes_to_words(&seed, Language::English).expect("encode");
    let list = Language::English.wordlist();

    let mut words = split_words(&phrase);
    let correct = list.lookup(words[24]).expect("checksum word resolves");
    let imposter = list.word_at((correct + 1) % list.len() as u32);
    words[24] = imposter;
    let tampered = words.join(" ");

    let result = words_to_bytes_checked(&tampered, 32, None);
    assert!(
        matches!(result, Err(Error::Checksum)),
        "expected checksum rejection, got {result:?}"
    );
}

#[test]
fn unknown_word_is_rejected_before_any_bytes_are_produced() {
    let seed = sample_seed(32, 0x3a);
    let phrase = bytes_to_words(&seed, Language::English).expect("encode");

    let mut words = split_words(&phrase);
    words[5] = "12345qq";
    let broken = words.join(" ");

    assert!(matches!(
        words_to_bytes_checked(&broken, 32, None),
        Err(Error::Format { .. })
    ));
    assert!(matches!(
        words_to_bytes(&broken, 32),
        Err(Error::Format { .. })
    ));

    // with a hint, the offending word is named
    assert!(matches!(
        words_to_bytes_checked(&broken, 32, Some(Language::English)),
        Err(Error::WordNotFound { language: Language::English, ref token }) if token == "12345qq"
    ));
}

#[test]
fn word_count_inconsistent_with_requested_length() {
    let seed = sample_seed(32, 0x19);
    let phrase = bytes_to_words(&seed, Language::English).expect("encode");

    // 25 words cannot satisfy a 16-byte request (13 words expected)
    assert!(matches!(
        words_to_bytes_checked(&phrase, 16, None),
        Err(Error::WordCount { expected: 13, actual: 25 })
    ));
}

#[test]
fn whitespace_padding_does_not_change_the_decode() {
    for language in [Language::English, Language::Japanese, Language::Russian] {
        let seed = sample_seed(16, 0x55);
        let phrase = bytes_to_words(&seed, language).expect("encode");

        let padded = format!("  {}  ", phrase.replace(' ', "   "));
        let with_tabs = phrase.replace(' ', " \t ");

        for variant in [padded, with_tabs] {
            let (recovered, detected) =
                words_to_bytes_checked(&variant, 16, None).expect("decode padded");
            assert_eq!(detected, language);
            assert_eq!(recovered.as_bytes(), &seed[..]);
        }
    }
}

#[test]
fn words_truncated_to_unique_prefix_still_decode() {
    for language in Language::ALL {
        let list = language.wordlist();
        if list.separator() != Separator::Spaced {
            continue; // truncation of separator-less scripts is not a written form
        }
        let seed = sample_seed(28, 0x21);
        let phrase = bytes_to_words(&seed, language).expect("encode");

        let truncated: Vec<String> = split_words(&phrase)
            .iter()
            .map(|w| w.chars().take(list.unique_prefix_len()).collect())
            .collect();
        let truncated = truncated.join(" ");

        // truncated words only resolve in their own list, so the hint is
        // only a formality here
        let (recovered, detected) =
            words_to_bytes_checked(&truncated, 28, Some(language)).expect("decode truncated");
        assert_eq!(detected, language);
        assert_eq!(recovered.as_bytes(), &seed[..], "{language}");
    }
}

#[test]
fn case_variation_does_not_change_the_decode() {
    let seed = sample_seed(20, 0x66);
    let phrase = bytes_to_words(&seed, Language::English).expect("encode");
    let shouted = phrase.to_uppercase();

    let (recovered, detected) = words_to_bytes_checked(&shouted, 20, None).expect("decode");
    assert_eq!(detected, Language::English);
    assert_eq!(recovered.as_bytes(), &seed[..]);
}

#[test]
fn accent_stripped_input_still_resolves() {
    use seedwords::normalize::fold;
    use seedwords::Folding;

    for language in [Language::Spanish, Language::French, Language::Portuguese] {
        let seed = sample_seed(16, 0x77);
        let phrase = bytes_to_words(&seed, language).expect("encode");

        // type the phrase without any accents at all
        let bare = fold(&phrase, Folding::LowercaseStripAccents);
        let (recovered, detected) =
            words_to_bytes_checked(&bare, 16, Some(language)).expect("decode unaccented");
        assert_eq!(detected, language);
        assert_eq!(recovered.as_bytes(), &seed[..], "{language}");
    }
}

#[test]
fn separator_less_phrase_round_trips() {
    let seed = sample_seed(32, 0x0c);
    let phrase = bytes_to_words(&seed, Language::ChineseSimplified).expect("encode");
    assert!(!phrase.contains(' '), "chinese phrases are written unspaced");

    let (recovered, detected) = words_to_bytes_checked(&phrase, 32, None).expect("decode");
    assert_eq!(detected, Language::ChineseSimplified);
    assert_eq!(recovered.as_bytes(), &seed[..]);

    // stray spaces a user might type between characters are tolerated
    let spaced: String = phrase.chars().flat_map(|c| [c, ' ']).collect();
    let (recovered, _) = words_to_bytes_checked(&spaced, 32, None).expect("decode spaced");
    assert_eq!(recovered.as_bytes(), &seed[..]);
}

#[test]
fn wrong_hint_falls_back_to_the_real_candidate() {
    let seed = sample_seed(24, 0x31);
    let phrase = bytes_to_words(&seed, Language::French).expect("encode");

    // German is not among the candidates, so detection proceeds without it
    let (recovered, detected) =
        words_to_bytes_checked(&phrase, 24, Some(Language::German)).expect("decode");
    assert_eq!(detected, Language::French);
    assert_eq!(recovered.as_bytes(), &seed[..]);
}

#[test]
fn detection_is_deterministic_per_language() {
    for language in Language::ALL {
        let seed = sample_seed(32, 0x44);
        let phrase = bytes_to_words(&seed, language).expect("encode");
        assert_eq!(detect(&phrase, None), Detection::Match(language));
    }
}

#[test]
fn unsupported_language_name_is_reported() {
    let result = "pirate".parse::<Language>();
    assert!(matches!(
        result,
        Err(Error::UnsupportedLanguage { ref name }) if name == "pirate"
    ));
}

#[test]
fn bad_length_requests_are_rejected_up_front() {
    for bad in [0usize, 2, 7, 15, 30] {
        assert!(matches!(
            words_to_bytes("irrelevant", bad),
            Err(Error::Length { actual }) if actual == bad
        ));
        assert!(matches!(
            words_to_bytes_checked("irrelevant", bad, None),
            Err(Error::Length { actual }) if actual == bad
        ));
    }
    assert!(matches!(
        bytes_to_words(&[0u8; 10], Language::English),
        Err(Error::Length { actual: 10 })
    ));
}
