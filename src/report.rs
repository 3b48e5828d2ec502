use accord::{ConjugationParadigm, PartOfSpeech, Reduction, SentenceSlot, Word};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn wrap(&self, s: impl AsRef<str>, code: &str) -> String {
        if self.enabled { format!("{}{}{}", code, s.as_ref(), ansi::RESET) } else { s.as_ref().to_string() }
    }

    fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
        self.wrap(s, color)
    }

    fn bold(&self, s: impl AsRef<str>) -> String {
        self.wrap(s, ansi::BOLD)
    }

    fn dim(&self, s: impl AsRef<str>) -> String {
        self.wrap(s, ansi::DIM)
    }

    fn section(&self, title: &str) {
        println!("\n{}", self.paint(format!("━━━ {title} ━━━"), ansi::GRAY));
    }
}

pub fn print_paradigm(paradigm: &ConjugationParadigm, palette: &Palette) {
    println!("\n{}", palette.bold(palette.paint(format!("Conjugating: \"{}\"", paradigm.infinitive), ansi::CYAN)));

    if !paradigm.is_supported() {
        println!("\n{}", palette.paint("Unsupported verb", ansi::YELLOW));
        println!("{}", palette.dim("  Only avoir, être, aller and regular -er verbs are conjugated."));
        println!();
        return;
    }

    palette.section("Present");
    for form in &paradigm.forms {
        let persons: Vec<&str> = form.persons().labels().collect();
        println!(
            "  {:<10} {} {}",
            palette.dim(persons.join("/")),
            palette.paint(&form.text, ansi::GREEN),
            palette.dim(gloss(form)),
        );
    }

    if let Some(participle) = &paradigm.past_participle {
        palette.section("Past participle");
        println!("  {} {}", palette.paint(&participle.text, ansi::GREEN), palette.dim(gloss(participle)));
    }
    println!();
}

pub fn print_inflection(base: &Word, forms: &[Word], palette: &Palette) {
    println!(
        "\n{}",
        palette.bold(palette.paint(format!("Inflecting: \"{}\" ({})", base, base.part_of_speech), ansi::CYAN))
    );

    palette.section("Forms");
    for form in forms {
        let gender = form.gender().map(|g| g.as_str()).unwrap_or("-");
        let number = form.number().map(|n| n.as_str()).unwrap_or("-");
        println!("  {:<10} {:<9} {}", gender, number, palette.paint(&form.text, ansi::GREEN));
    }
    println!();
}

pub fn print_reduction(input: &[SentenceSlot], reduction: &Reduction, sentence: &str, palette: &Palette) {
    println!("\n{}", palette.bold(palette.paint(format!("Eliding: {}", render_slots(input)), ansi::CYAN)));

    palette.section("Merges");
    if reduction.steps.is_empty() {
        println!("{}", palette.dim("  No contracting pairs"));
    }
    for (i, (step, snapshot)) in reduction.steps.iter().zip(reduction.snapshots()).enumerate() {
        println!(
            "  {} {:<4} {:<12} {} {}",
            palette.dim(format!("step {i}:")),
            palette.dim(snapshot[step.position].id.to_string()),
            palette.paint(format!("\"{}\"", step.merged_text), ansi::GREEN),
            palette.dim("->"),
            render_slots(snapshot),
        );
    }

    palette.section("Sentence");
    println!("  {}", palette.bold(sentence));

    palette.section("Timing");
    println!(
        "  Total: {}  │  Merges: {}",
        palette.paint(format!("{:?}", reduction.total), ansi::GREEN),
        palette.paint(reduction.merge_count().to_string(), ansi::CYAN),
    );
    println!();
}

pub fn print_words(pos: PartOfSpeech, words: &[&Word], palette: &Palette) {
    println!("\n{}", palette.bold(palette.paint(format!("Words: {pos}"), ansi::CYAN)));

    palette.section(&format!("{} entries", words.len()));
    for word in words {
        let tags: Vec<&str> = word.tags.iter().map(String::as_str).collect();
        println!(
            "  {:<14} {:<18} {}",
            palette.paint(&word.text, ansi::GREEN),
            word.translation,
            palette.dim(tags.join(", ")),
        );
    }
    println!();
}

fn gloss(word: &Word) -> String {
    if word.translation.is_empty() { String::new() } else { format!("({})", word.translation) }
}

/// `[word]` per filled slot, `[<placeholder>]` per empty one.
fn render_slots(slots: &[SentenceSlot]) -> String {
    slots
        .iter()
        .map(|slot| match slot.text() {
            Some(text) => format!("[{text}]"),
            None => format!("[<{}>]", slot.placeholder),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_a_no_op_when_disabled() {
        let palette = Palette::new(false);
        assert_eq!(palette.bold(palette.paint("j'ai", ansi::GREEN)), "j'ai");

        let colored = Palette::new(true);
        assert_eq!(colored.dim("x"), "\x1b[2mx\x1b[0m");
    }

    #[test]
    fn slots_render_as_brackets() {
        let slots = vec![
            SentenceSlot::filled(0, Word::new("j'ai", PartOfSpeech::AuxiliaryVerb, "I + have")),
            SentenceSlot::new(1, PartOfSpeech::Noun, "noun"),
        ];
        assert_eq!(render_slots(&slots), "[j'ai][<noun>]");
    }
}
