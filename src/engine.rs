//! Morphology and contraction engine.
//!
//! Four components, each borrowing a [`Lexicon`](crate::Lexicon):
//!
//! ```text
//!            word selected                 slot sequence changed        submit
//!                 │                                 │                      │
//!     ┌───────────┴───────────┐                     v                      v
//!     v                       v            ElisionEngine (elision.rs)  SentenceAssembler
//! WordFormGenerator     VerbConjugator       - scan left to right      (assemble.rs)
//! (inflect.rs)          (conjugate.rs)       - first candidate only      - join
//!   noun/adj agreement    fixed tables         - splice, rescan          - string-level
//!                         or -er rules         - until fixed point         contraction
//!     │                       │                     │                      │
//!     └──────── Word ─────────┘                Vec<SentenceSlot>         String
//! ```
//!
//! Every operation is a pure function of its inputs and the lexicon: no
//! shared mutable state, no I/O, no timing. Callers that animate merges drive
//! the steps themselves (see `metrics.rs` for the per-step trace).
//!
//! ## Responsibilities by module
//!
//! - `inflect.rs`: gender/number for nouns and adjectives, identity otherwise.
//! - `conjugate.rs`: present-tense paradigms and past participles.
//! - `elision.rs`: pair predicate, merge construction, fixed-point reduction.
//! - `assemble.rs`: final text with a slot-independent contraction pass.
//! - `metrics.rs`: step-by-step record of a reduction.
//!
//! ## Debugging
//!
//! Components emit `tracing` events (`debug` per decision, `trace` per
//! scanned pair). The CLI honours `ACCORD_LOG`, e.g. `ACCORD_LOG=accord=trace`.

#[path = "engine/assemble.rs"]
mod assemble;
#[path = "engine/conjugate.rs"]
mod conjugate;
#[path = "engine/elision.rs"]
mod elision;
#[path = "engine/inflect.rs"]
mod inflect;
#[path = "engine/metrics.rs"]
mod metrics;


pub use assemble::{SentenceAssembler, normalize};
pub use conjugate::{ConjugationParadigm, VerbConjugator};
pub use elision::{ElisionCandidate, ElisionEngine};
pub use inflect::WordFormGenerator;
pub use metrics::{MergeStep, Reduction};
