//! Puzzle data model and canonical text rendering.
//!
//! A [`Puzzle`] is an ordered list of question/answer pairs generated under
//! one latent rule. All pairs but the last are fully revealed demonstrations;
//! the last is the query whose answer is withheld from the rendered text and
//! exposed only through [`Puzzle::answer`].
//!
//! # Symbol domains
//!
//! Within one example the symbol domain is homogeneous: either a sequence of
//! small integers or a sequence of string tokens (single letters or label
//! words). The domain is carried as an explicit tag rather than inferred from
//! the first element at render time, and it determines the separator:
//! integers are joined with single spaces, tokens are concatenated.

/// A sequence of symbols tagged with its domain.
///
/// The tag is chosen once when the sequence is built; rendering never
/// inspects element values to pick a separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolSeq {
    /// Small integers; rendered joined with single spaces.
    Numbers(Vec<u32>),
    /// String tokens (single letters or label words); rendered concatenated
    /// with no separator.
    Tokens(Vec<String>),
}

impl SymbolSeq {
    /// Build a token sequence from single characters.
    pub fn letters<I: IntoIterator<Item = char>>(chars: I) -> Self {
        SymbolSeq::Tokens(chars.into_iter().map(String::from).collect())
    }

    /// Number of symbols in the sequence.
    pub fn len(&self) -> usize {
        match self {
            SymbolSeq::Numbers(v) => v.len(),
            SymbolSeq::Tokens(v) => v.len(),
        }
    }

    /// Whether the sequence holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render to canonical text: integers space-separated, tokens
    /// concatenated.
    pub fn render(&self) -> String {
        match self {
            SymbolSeq::Numbers(v) => v
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            SymbolSeq::Tokens(v) => v.concat(),
        }
    }
}

/// One question/answer pair.
///
/// Invariant (caller contract): `question` and `answer` are never both
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleExample {
    /// The shown sequence.
    pub question: SymbolSeq,
    /// The sequence the rule produces from the question.
    pub answer: SymbolSeq,
    /// Optional descriptive tag. Part of the record, unset by every current
    /// generator.
    pub background: Option<String>,
}

impl PuzzleExample {
    /// Create an example with no background tag.
    pub fn new(question: SymbolSeq, answer: SymbolSeq) -> Self {
        Self {
            question,
            answer,
            background: None,
        }
    }
}

/// Rendering configuration: one formatter per example role.
///
/// The demonstration formatter receives the 1-based example index, the
/// rendered question, and the rendered answer; the query formatter receives
/// the question only. The defaults ignore the index.
#[derive(Clone, Copy)]
pub struct RenderOptions {
    /// Formats one fully revealed demonstration line.
    pub demonstration: fn(index: usize, question: &str, answer: &str) -> String,
    /// Formats the final query line with the answer withheld.
    pub query: fn(question: &str) -> String,
}

fn default_demonstration(_index: usize, question: &str, answer: &str) -> String {
    format!("{} -> {}", question, answer)
}

fn default_query(question: &str) -> String {
    format!("{} -> ", question)
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            demonstration: default_demonstration,
            query: default_query,
        }
    }
}

/// A bundle of examples sharing one latent rule.
///
/// Holds `examplars + 1` examples: the demonstrations followed by the query.
/// Constructed fully by a generator and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    examples: Vec<PuzzleExample>,
    additional_instructions: Option<String>,
}

impl Puzzle {
    /// Create a puzzle from its examples. The last example is the query.
    pub fn new(examples: Vec<PuzzleExample>) -> Self {
        debug_assert!(!examples.is_empty());
        Self {
            examples,
            additional_instructions: None,
        }
    }

    /// Attach free-text instructions shown to the consumer before the
    /// rendered examples.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.additional_instructions = Some(instructions.into());
        self
    }

    /// All examples, demonstrations first, query last.
    pub fn examples(&self) -> &[PuzzleExample] {
        &self.examples
    }

    /// Generator-supplied instructions, if any.
    pub fn additional_instructions(&self) -> Option<&str> {
        self.additional_instructions.as_deref()
    }

    /// The rendered answer of the query example: the ground truth withheld
    /// from the rendered text.
    pub fn answer(&self) -> String {
        self.examples
            .last()
            .map(|e| e.answer.render())
            .unwrap_or_default()
    }

    /// Render all demonstrations, each on its own line, followed by the
    /// query line with the answer withheld.
    pub fn render(&self, options: &RenderOptions) -> String {
        let mut out = String::new();
        let (query, demos) = match self.examples.split_last() {
            Some(split) => split,
            None => return out,
        };

        for (i, example) in demos.iter().enumerate() {
            let question = example.question.render();
            let answer = example.answer.render();
            out.push_str(&(options.demonstration)(i + 1, &question, &answer));
            out.push('\n');
        }

        out.push_str(&(options.query)(&query.question.render()));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters_example(question: &str, answer: &str) -> PuzzleExample {
        PuzzleExample::new(
            SymbolSeq::letters(question.chars()),
            SymbolSeq::letters(answer.chars()),
        )
    }

    #[test]
    fn test_numbers_render_space_separated() {
        let seq = SymbolSeq::Numbers(vec![17, 9, 7, 12]);
        assert_eq!(seq.render(), "17 9 7 12");
    }

    #[test]
    fn test_tokens_render_concatenated() {
        let seq = SymbolSeq::Tokens(vec!["Orange".into(), "Blue".into(), "Brown".into()]);
        assert_eq!(seq.render(), "OrangeBlueBrown");

        let letters = SymbolSeq::letters("CEGI".chars());
        assert_eq!(letters.render(), "CEGI");
    }

    #[test]
    fn test_render_default_templates() {
        let puzzle = Puzzle::new(vec![
            letters_example("CEGI", "K"),
            letters_example("IKMOQ", "S"),
            letters_example("BDFHJ", "L"),
        ]);

        let text = puzzle.render(&RenderOptions::default());
        assert_eq!(text, "CEGI -> K\nIKMOQ -> S\nBDFHJ -> ");
    }

    #[test]
    fn test_render_custom_templates() {
        fn demo(i: usize, q: &str, a: &str) -> String {
            format!("Demo {}: {} gives {}", i, q, a)
        }
        fn query(q: &str) -> String {
            format!("Predict: {}", q)
        }

        let puzzle = Puzzle::new(vec![
            letters_example("AB", "C"),
            letters_example("BC", "D"),
        ]);

        let options = RenderOptions {
            demonstration: demo,
            query,
        };
        assert_eq!(puzzle.render(&options), "Demo 1: AB gives C\nPredict: BC");
    }

    #[test]
    fn test_answer_is_query_answer_only() {
        let puzzle = Puzzle::new(vec![
            letters_example("CEGI", "K"),
            letters_example("IKMOQ", "S"),
        ]);
        assert_eq!(puzzle.answer(), "S");
    }

    #[test]
    fn test_numbers_question_token_answer() {
        // colored_ordering mixes domains across question and answer.
        let example = PuzzleExample::new(
            SymbolSeq::Numbers(vec![17, 9]),
            SymbolSeq::Tokens(vec!["Orange".into(), "Blue".into()]),
        );
        let puzzle = Puzzle::new(vec![example.clone(), example]);
        assert_eq!(
            puzzle.render(&RenderOptions::default()),
            "17 9 -> OrangeBlue\n17 9 -> "
        );
    }

    #[test]
    fn test_instructions_carried() {
        let puzzle =
            Puzzle::new(vec![letters_example("AB", "C")]).with_instructions("Ignore the stars.");
        assert_eq!(puzzle.additional_instructions(), Some("Ignore the stars."));
    }
}
