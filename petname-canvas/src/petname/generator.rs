/// Pet name generation
///
/// A constrained random sampler over the three word categories. Filtering
/// happens on copies of the category lists, so the store passed in stays
/// untouched and the function is safe to call from anywhere without
/// coordination.
use std::collections::BTreeSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use super::options::{GenerationOptions, StartingLetterStyle};
use super::words::WordCategories;

/// Sentinel returned when constraint filtering leaves no valid word
///
/// Distinct from any real generated name so callers can detect the
/// unsatisfiable-constraints path by equality.
pub const FALLBACK_NAME: &str = "fallback-name";

/// Generate one pet name
///
/// Always returns a usable string; when the length or starting-letter
/// constraints empty a required category, the result is [`FALLBACK_NAME`].
pub fn generate(options: &GenerationOptions, categories: &WordCategories) -> String {
    generate_with_rng(options, categories, &mut rand::rng())
}

/// Generation with an explicit random source
pub(crate) fn generate_with_rng<R: Rng + ?Sized>(
    options: &GenerationOptions,
    categories: &WordCategories,
    rng: &mut R,
) -> String {
    let mut names = filter_by_length(categories.names(), options.max_word_length);
    let mut adjectives = filter_by_length(categories.adjectives(), options.max_word_length);
    let mut adverbs = filter_by_length(categories.adverbs(), options.max_word_length);

    if options.starting_letter_style == StartingLetterStyle::Ubuntu {
        // The requested (pre-clamp) count decides which categories take part
        // in the letter intersection: a one-word name is never constrained
        // by adjective or adverb letters.
        let letter = match pick_starting_letter(options.word_count, &names, &adjectives, &adverbs, rng) {
            Some(letter) => letter,
            None => {
                tracing::warn!("no shared starting letter for the requested constraints");
                return FALLBACK_NAME.to_string();
            }
        };
        names.retain(|word| word.starts_with(letter));
        adjectives.retain(|word| word.starts_with(letter));
        adverbs.retain(|word| word.starts_with(letter));
    }

    // Minimum of one word
    let word_count = options.word_count.max(1);

    let mut parts: Vec<&str> = Vec::with_capacity(word_count as usize);
    for _ in 2..word_count {
        match pick_part(&adverbs, rng) {
            Some(word) => parts.push(word),
            None => return FALLBACK_NAME.to_string(),
        }
    }
    if word_count >= 2 {
        match pick_part(&adjectives, rng) {
            Some(word) => parts.push(word),
            None => return FALLBACK_NAME.to_string(),
        }
    }
    match pick_part(&names, rng) {
        Some(word) => parts.push(word),
        None => return FALLBACK_NAME.to_string(),
    }

    parts.join(options.word_separator.as_str())
}

/// Copy a category, keeping only words within the length limit
fn filter_by_length<'a>(words: &'a [String], max_word_length: Option<usize>) -> Vec<&'a str> {
    words
        .iter()
        .map(String::as_str)
        .filter(|word| match max_word_length {
            Some(max) => word.chars().count() <= max,
            None => true,
        })
        .collect()
}

/// Choose the shared starting letter for an ubuntu-style name
///
/// Eligible letters are the intersection of the first-letter sets of every
/// category the requested word count actually needs: names always,
/// adjectives from two words up, adverbs from three words up. Returns None
/// when no letter satisfies all needed categories.
fn pick_starting_letter<R: Rng + ?Sized>(
    word_count: i32,
    names: &[&str],
    adjectives: &[&str],
    adverbs: &[&str],
    rng: &mut R,
) -> Option<char> {
    let mut eligible = first_letters(names);
    if word_count >= 2 {
        eligible = eligible
            .intersection(&first_letters(adjectives))
            .copied()
            .collect();
    }
    if word_count > 2 {
        eligible = eligible
            .intersection(&first_letters(adverbs))
            .copied()
            .collect();
    }

    let letters: Vec<char> = eligible.into_iter().collect();
    letters.choose(rng).copied()
}

/// Distinct first characters of a word list
fn first_letters(words: &[&str]) -> BTreeSet<char> {
    words.iter().filter_map(|word| word.chars().next()).collect()
}

/// Draw one word uniformly at random; None when the list is empty
fn pick_part<'a, R: Rng + ?Sized>(parts: &[&'a str], rng: &mut R) -> Option<&'a str> {
    parts.choose(rng).copied()
}
