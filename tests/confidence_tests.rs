//! Confidence derivation tests

use tarjama::application::confidence::derive;
use tarjama::domain::model::GenerationOutput;

/// Build an output whose per-token probabilities are exact.
///
/// Vocabulary of two entries; each row puts probability `p` on entry 0 and
/// `1 - p` on entry 1, so a chosen id of 0 yields a displayed confidence of
/// `round((1 - p) * 100)`.
fn output_with_probs(tokens: &[&str], probs: &[f32], special: &[&str]) -> GenerationOutput {
    assert_eq!(tokens.len(), probs.len() + 1);
    let per_step_scores = probs
        .iter()
        .map(|&p| vec![p.ln(), (1.0 - p).ln()])
        .collect();
    GenerationOutput {
        token_ids: vec![0; tokens.len()],
        tokens: tokens.iter().map(|s| s.to_string()).collect(),
        per_step_scores,
        decoded: tokens
            .iter()
            .skip(1)
            .filter(|t| !special.contains(t))
            .map(|t| t.trim_start_matches("##"))
            .collect::<Vec<_>>()
            .join(" "),
        special_tokens: special.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn subword_fragments_merge_into_words() {
    // tokens ["Hola", "##la", "mundo"] with scores [90, 10, 50]
    // -> words ["Holala", "mundo"] with confidences [50, 50], overall 50
    let output = output_with_probs(
        &["<pad>", "Hola", "##la", "mundo", "</s>"],
        &[0.1, 0.9, 0.5, 0.5],
        &["<pad>", "</s>"],
    );
    let result = derive(&output).unwrap();

    assert!(result.success);
    let words = result.word_confidence.unwrap();
    assert_eq!(words.len(), 2);
    assert_eq!(words[0].word, "Holala");
    assert_eq!(words[0].confidence, 50);
    assert_eq!(words[1].word, "mundo");
    assert_eq!(words[1].confidence, 50);
    assert_eq!(result.overall_confidence, Some(50));
}

#[test]
fn one_word_per_token_without_continuations() {
    let output = output_with_probs(
        &["<pad>", "Hola", "mundo", "hoy", "</s>"],
        &[0.1, 0.25, 0.4, 0.5],
        &["<pad>", "</s>"],
    );
    let result = derive(&output).unwrap();

    let words = result.word_confidence.unwrap();
    assert_eq!(words.len(), 3);
    assert_eq!(words[0].confidence, 90);
    assert_eq!(words[1].confidence, 75);
    assert_eq!(words[2].confidence, 60);
    // overall = round(mean([90, 75, 60])) = round(75.0)
    assert_eq!(result.overall_confidence, Some(75));
}

#[test]
fn all_confidences_stay_in_range() {
    // extreme probabilities must clamp into [0, 100]
    let output = output_with_probs(
        &["<pad>", "a", "b", "</s>"],
        &[0.9999999, 0.0000001, 0.5],
        &["<pad>", "</s>"],
    );
    let result = derive(&output).unwrap();

    let words = result.word_confidence.unwrap();
    assert!(!words.is_empty());
    for w in &words {
        assert!(w.confidence <= 100);
    }
    assert!(result.overall_confidence.unwrap() <= 100);
}

#[test]
fn nonempty_translation_has_words() {
    let output = output_with_probs(&["<pad>", "hola", "</s>"], &[0.5, 0.5], &["<pad>", "</s>"]);
    let result = derive(&output).unwrap();

    assert!(result.success);
    assert!(!result.translation.unwrap().is_empty());
    assert!(result.word_confidence.unwrap().len() >= 1);
}

#[test]
fn only_special_tokens_yields_zero_overall() {
    let output = output_with_probs(&["<pad>", "</s>"], &[0.5], &["<pad>", "</s>"]);
    let result = derive(&output).unwrap();

    assert!(result.success);
    assert_eq!(result.word_confidence.unwrap().len(), 0);
    assert_eq!(result.overall_confidence, Some(0));
}

#[test]
fn special_tokens_mid_stream_keep_alignment() {
    // a stray pad between words must not shift scores onto the wrong token
    let output = output_with_probs(
        &["<pad>", "Hola", "<pad>", "mundo", "</s>"],
        &[0.1, 0.5, 0.4, 0.5],
        &["<pad>", "</s>"],
    );
    let result = derive(&output).unwrap();

    let words = result.word_confidence.unwrap();
    assert_eq!(words.len(), 2);
    assert_eq!(words[0].word, "Hola");
    assert_eq!(words[0].confidence, 90);
    assert_eq!(words[1].word, "mundo");
    assert_eq!(words[1].confidence, 60);
}

#[test]
fn shape_mismatch_is_an_error_not_a_panic() {
    let mut output = output_with_probs(
        &["<pad>", "Hola", "mundo", "</s>"],
        &[0.5, 0.5, 0.5],
        &["<pad>", "</s>"],
    );
    output.per_step_scores.pop();

    let err = derive(&output).unwrap_err();
    assert!(err.to_string().contains("score rows"));
}

#[test]
fn chosen_id_out_of_vocab_is_an_error() {
    let mut output = output_with_probs(&["<pad>", "hola", "</s>"], &[0.5, 0.5], &["<pad>", "</s>"]);
    output.token_ids[1] = 9999;

    let err = derive(&output).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}
