//! Chirp body policy.
//!
//! A body is accepted when it is at most [`MAX_CHIRP_LEN`] characters long.
//! Accepted bodies are split on single spaces; every token whose lowercase
//! form is one of [`PROFANE_WORDS`] is replaced by [`MASK`], and the tokens
//! are joined back with single spaces. Tokens with attached punctuation
//! (`"fornax!"`) are left untouched.

use crate::error::TypeError;

/// Maximum chirp length, in characters.
pub const MAX_CHIRP_LEN: usize = 140;

/// Words masked out of chirp bodies (compared lowercase).
pub const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Replacement for a masked word.
pub const MASK: &str = "****";

/// Validate and filter a raw chirp body.
pub fn clean_body(raw: &str) -> Result<String, TypeError> {
    let length = raw.chars().count();
    if length > MAX_CHIRP_LEN {
        return Err(TypeError::BodyTooLong {
            length,
            max: MAX_CHIRP_LEN,
        });
    }

    let cleaned: Vec<&str> = raw
        .split(' ')
        .map(|word| if is_profane(word) { MASK } else { word })
        .collect();
    Ok(cleaned.join(" "))
}

fn is_profane(word: &str) -> bool {
    let lower = word.to_lowercase();
    PROFANE_WORDS.contains(&lower.as_str())
}
