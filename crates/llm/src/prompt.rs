//! Prompt construction for context-constrained answering.
//!
//! Builds the fixed two-message prompt: a system instruction pinning the
//! model to the supplied context, and a user message carrying the query plus
//! every retrieved passage.

use crate::client::ChatMessage;

/// Fixed system instruction sent with every query.
///
/// Directs the model to answer only from the provided context, to say
/// "I am not sure" and then guess when the context is insufficient, and to
/// format the answer in readable paragraphs.
pub const SYSTEM_INSTRUCTION: &str = "I am going to ask you a question, which I would like you \
    to answer based only on the provided context, and not any other information. If there is \
    not enough information in the context to answer the question, say \"I am not sure\", then \
    try to make a guess. Break your answer up into nicely readable paragraphs.";

/// Build the two-message prompt for a query and its retrieved context.
///
/// Pure and deterministic. The user message is the literal query followed by
/// all passage texts joined with single spaces and no per-passage delimiter;
/// that low-fidelity concatenation is the reference behavior, kept as-is even
/// though adjacent passages can run together.
pub fn build_prompt(query: &str, context: &[String]) -> Vec<ChatMessage> {
    let user = format!(
        "The question is {}. Here is all the context you have:{}",
        query,
        context.join(" ")
    );

    vec![ChatMessage::system(SYSTEM_INSTRUCTION), ChatMessage::user(user)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ChatRole;

    #[test]
    fn test_build_prompt_shape() {
        let messages = build_prompt("what is rust?", &["p1".to_string(), "p2".to_string()]);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, ChatRole::System);
        assert_eq!(messages[0].content, SYSTEM_INSTRUCTION);
        assert_eq!(messages[1].role, ChatRole::User);
    }

    #[test]
    fn test_user_message_exact_concatenation() {
        let context = vec!["first passage".to_string(), "second passage".to_string()];
        let messages = build_prompt("what is rust?", &context);

        assert_eq!(
            messages[1].content,
            "The question is what is rust?. Here is all the context you have:first passage second passage"
        );
    }

    #[test]
    fn test_empty_context() {
        let messages = build_prompt("q", &[]);
        assert_eq!(
            messages[1].content,
            "The question is q. Here is all the context you have:"
        );
    }

    #[test]
    fn test_deterministic() {
        let context = vec!["a".to_string(), "b".to_string()];
        assert_eq!(build_prompt("q", &context), build_prompt("q", &context));
    }
}
