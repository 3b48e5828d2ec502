//! Final sentence text.
//!
//! Assembly joins the slot words with single spaces, then runs a string-level
//! contraction pass over the result. That pass does not look at slots at all,
//! so the text is contracted even when slot merging was skipped or is still
//! being animated.
//!
//! The string pass uses its own trigger list, which differs from the slot
//! engine's: `jusque` is not rewritten here, and `ce` contracts before any
//! vowel-initial word rather than only `est...`/`ét...`.

use crate::SentenceSlot;
use regex::Captures;

#[derive(Debug, Clone, Copy)]
pub struct SentenceAssembler {
    normalize: bool,
}

impl Default for SentenceAssembler {
    fn default() -> Self {
        Self { normalize: true }
    }
}

impl SentenceAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Join only; skip the string-level contraction pass.
    pub fn without_normalization() -> Self {
        Self { normalize: false }
    }

    /// Join filled slots with single spaces. Empty slots contribute nothing.
    pub fn assemble(&self, slots: &[SentenceSlot]) -> String {
        let joined = slots
            .iter()
            .filter_map(SentenceSlot::text)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if self.normalize { normalize(&joined) } else { joined }
    }
}

/// Rewrite `<trigger> <vowel-initial word>` as `<prefix>'<word>` and
/// `si il` as `s'il`. The trigger keeps the case it was written in.
pub fn normalize(text: &str) -> String {
    let elided = regex!(r"(?i)\b(je|me|te|se|le|la|de|ne|que|ce)\s+([aeiouyhéèê])")
        .replace_all(text, |caps: &Captures| {
            let trigger = &caps[1];
            format!("{}'{}", &trigger[..trigger.len() - 1], &caps[2])
        });

    let normalized = regex!(r"(?i)\b(s)i\s+(il)").replace_all(&elided, "${1}'${2}").into_owned();

    if normalized != text {
        tracing::debug!(input = %text, output = %normalized, "normalized contractions");
    }

    normalized
}
