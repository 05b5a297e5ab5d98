//! Generative edit-distance candidate enumeration.
//!
//! Candidates are produced by applying single-character deletions,
//! insertions, and substitutions over the fixed lowercase alphabet, and
//! "distance two" means applying a second round of the same operations to
//! every distance-one candidate. This is deliberately generative rather
//! than metric: the two-round union can contain strings whose true minimum
//! edit distance is less than two, and transpositions are not modeled.
//! Deduplication collapses repeats but does not correct for either.
//!
//! None of these operations can fail for any input, including the empty
//! string (zero deletions, 26 insertions, zero substitutions). Input
//! outside a-z is walked on `char` boundaries, so arbitrary Unicode is
//! accepted; its candidates simply never match an alphabetic corpus.

use ahash::AHashSet;

/// First letter of the candidate alphabet.
const ALPHABET_START: char = 'a';
/// Last letter of the candidate alphabet.
const ALPHABET_END: char = 'z';
/// Number of letters in the candidate alphabet.
const ALPHABET_LEN: usize = 26;

/// All strings made from `word` by deleting one character.
///
/// Produces exactly `len` strings; duplicates from repeated adjacent
/// characters are left for downstream dedup.
pub fn deletions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = Vec::with_capacity(chars.len());

    for i in 0..chars.len() {
        let mut edited = String::with_capacity(word.len());
        edited.extend(&chars[..i]);
        edited.extend(&chars[i + 1..]);
        out.push(edited);
    }

    out
}

/// All strings made from `word` by inserting one alphabet letter.
///
/// Produces `(len + 1) * 26` strings, one per letter per boundary.
pub fn insertions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = Vec::with_capacity((chars.len() + 1) * ALPHABET_LEN);

    for i in 0..=chars.len() {
        for letter in ALPHABET_START..=ALPHABET_END {
            let mut edited = String::with_capacity(word.len() + 1);
            edited.extend(&chars[..i]);
            edited.push(letter);
            edited.extend(&chars[i..]);
            out.push(edited);
        }
    }

    out
}

/// All strings made from `word` by replacing one character with a different
/// alphabet letter.
///
/// Identity substitutions are filtered here at generation time, so the
/// original word can never reappear through this generator.
pub fn substitutions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = Vec::with_capacity(chars.len() * (ALPHABET_LEN - 1));

    for i in 0..chars.len() {
        for letter in ALPHABET_START..=ALPHABET_END {
            if letter == chars[i] {
                continue;
            }
            let mut edited = String::with_capacity(word.len());
            edited.extend(&chars[..i]);
            edited.push(letter);
            edited.extend(&chars[i + 1..]);
            out.push(edited);
        }
    }

    out
}

/// The deduplicated union of deletions, insertions, and substitutions.
///
/// Never contains `word` itself: deletions are shorter, insertions longer,
/// and substitutions exclude the identity case.
pub fn edit_distance_one(word: &str) -> AHashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = AHashSet::with_capacity(single_edit_count(chars.len()));

    extend_with_edits(&chars, word.len(), &mut out);
    out
}

/// The deduplicated union of `edit_distance_one` over every distance-one
/// candidate of `word`, with `word` itself removed.
///
/// The original word routinely reappears through delete-then-insert and
/// insert-then-delete round trips, so it is stripped from the result.
pub fn edit_distance_two(word: &str) -> AHashSet<String> {
    let ones = edit_distance_one(word);
    let mut out = AHashSet::with_capacity(ones.len() * single_edit_count(word.chars().count() + 1));

    let mut scratch: Vec<char> = Vec::with_capacity(word.len() + 2);
    for one in &ones {
        scratch.clear();
        scratch.extend(one.chars());
        extend_with_edits(&scratch, one.len(), &mut out);
    }

    out.remove(word);
    out
}

/// Upper bound on the number of single-edit candidates for a word of
/// `len` characters: `len` deletions + `(len + 1) * 26` insertions +
/// `len * 25` substitutions.
fn single_edit_count(len: usize) -> usize {
    len + (len + 1) * ALPHABET_LEN + len * (ALPHABET_LEN - 1)
}

/// Insert every single-edit variant of `chars` into `out`.
///
/// `byte_len` is the byte length of the source word, used only to size the
/// candidate strings up front.
fn extend_with_edits(chars: &[char], byte_len: usize, out: &mut AHashSet<String>) {
    // Deletions
    for i in 0..chars.len() {
        let mut edited = String::with_capacity(byte_len);
        edited.extend(&chars[..i]);
        edited.extend(&chars[i + 1..]);
        out.insert(edited);
    }

    // Insertions
    for i in 0..=chars.len() {
        for letter in ALPHABET_START..=ALPHABET_END {
            let mut edited = String::with_capacity(byte_len + 1);
            edited.extend(&chars[..i]);
            edited.push(letter);
            edited.extend(&chars[i..]);
            out.insert(edited);
        }
    }

    // Substitutions, excluding the identity case
    for i in 0..chars.len() {
        for letter in ALPHABET_START..=ALPHABET_END {
            if letter == chars[i] {
                continue;
            }
            let mut edited = String::with_capacity(byte_len);
            edited.extend(&chars[..i]);
            edited.push(letter);
            edited.extend(&chars[i + 1..]);
            out.insert(edited);
        }
    }
}
