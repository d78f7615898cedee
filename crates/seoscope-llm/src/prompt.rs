//! The SEO improvement prompt sent to the LLM.

/// Default sampling temperature for suggestion generation.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
/// Default completion token limit for suggestion generation.
pub const DEFAULT_MAX_TOKENS: usize = 1024;

/// Build the suggestion prompt from the augmented text and the recommended
/// keyword list.
///
/// The prompt deliberately asks for positive-only feedback plus a meta
/// description; the response is rendered verbatim, never parsed.
pub fn enhancement_prompt(augmented_text: &str, keywords: &[String]) -> String {
    format!(
        "Analyze the following text for SEO optimization and provide only positive feedback and praise.\n\
         Do NOT mention any problems or negative suggestions.\n\
         Show how the suggested keywords improve the text by giving a snippet with a few words before and after the inserted keywords.\n\n\
         {}\n\n\
         Also, suggest a positive meta description based on the text and recommended keywords: {}",
        augmented_text,
        keywords.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_text_and_keywords() {
        let prompt = enhancement_prompt(
            "Dogs are loyal including training.",
            &["dogs".to_string(), "training".to_string()],
        );
        assert!(prompt.contains("Dogs are loyal including training."));
        assert!(prompt.contains("recommended keywords: dogs, training"));
    }

    #[test]
    fn asks_for_positive_only_feedback() {
        let prompt = enhancement_prompt("text", &[]);
        assert!(prompt.contains("only positive feedback"));
        assert!(prompt.contains("meta description"));
    }
}
