//! Interactive retrieval-augmented query loop.
//!
//! One cycle per question: read, retrieve the top passages, build the
//! two-message prompt, complete, print the answer with its source citations.
//! Reader and writer are injected so tests can drive a bounded number of
//! iterations; interactively the loop runs until the operator interrupts the
//! process (or closes stdin).

use chatdocs_core::{AppResult, SessionConfig};
use chatdocs_llm::{build_prompt, CompletionClient, CompletionRequest};
use chatdocs_store::{Passage, VectorStore};
use std::io::{BufRead, Write};

/// Number of passages retrieved per query.
pub const RESULT_COUNT: usize = 5;

/// Reminder printed when the operator submits an empty query.
const EMPTY_QUERY_REMINDER: &str = "Please enter a question. Ctrl+C to Quit.\n";

/// An interactive question-answering session over a connected store and
/// completion client.
///
/// Configuration is immutable for the lifetime of the session; every
/// completion call uses the model chosen at startup.
pub struct ChatSession<S, C> {
    config: SessionConfig,
    store: S,
    llm: C,
}

impl<S: VectorStore, C: CompletionClient> ChatSession<S, C> {
    pub fn new(config: SessionConfig, store: S, llm: C) -> Self {
        Self { config, store, llm }
    }

    /// Run the query loop until the input reader is exhausted.
    ///
    /// Empty (or whitespace-only) input re-prompts without touching either
    /// external service. Store and completion faults propagate out and end
    /// the session; the loop deliberately performs no local recovery.
    pub async fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> AppResult<()> {
        loop {
            write!(output, "Query: ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            let query = line.trim();
            if query.is_empty() {
                writeln!(output, "{}", EMPTY_QUERY_REMINDER)?;
                continue;
            }

            writeln!(output, "\nThinking using {}...\n", self.config.model)?;
            output.flush()?;

            self.answer(query, output).await?;
        }

        Ok(())
    }

    /// One retrieve → prompt → complete → print cycle.
    async fn answer<W: Write>(&self, query: &str, output: &mut W) -> AppResult<()> {
        let passages = self.store.query(query, RESULT_COUNT).await?;
        tracing::info!(count = passages.len(), "Passages retrieved");

        let context: Vec<String> = passages.iter().map(|p| p.text.clone()).collect();
        let messages = build_prompt(query, &context);

        let request = CompletionRequest::new(messages, &self.config.model);
        let response = self.llm.complete(&request).await?;

        tracing::debug!(
            "Token usage - Prompt: {}, Completion: {}, Total: {}",
            response.usage.prompt_tokens,
            response.usage.completion_tokens,
            response.usage.total_tokens
        );

        writeln!(output, "{}", response.content)?;
        writeln!(output)?;
        writeln!(output, "Source documents:\n{}", format_sources(&passages))?;
        writeln!(output)?;

        Ok(())
    }
}

/// Render the citation block, one `filename: line N` per passage, in the
/// order the store returned them.
fn format_sources(passages: &[Passage]) -> String {
    passages
        .iter()
        .map(Passage::citation)
        .collect::<Vec<_>>()
        .join("\n")
}
