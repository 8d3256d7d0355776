use std::fmt::Write;

use crate::models::Category;

pub const SAFETY_MESSAGE: &str = "I’m really sorry that you’re feeling this way. 💔\n\
I’m not a professional, so I can’t handle emergencies.\n\
Please reach out to someone you trust or contact a local helpline\n\
or mental health professional as soon as possible. You deserve support.";

pub const SUGGESTION_HEADER: &str = "Here are a few gentle suggestions that might help:";

pub const CLOSING: &str = "Remember, I’m just an AI assistant, not a professional. \
If these feelings stay for a long time or become very strong, \
please consider talking to a trusted person or a mental health professional.";

pub struct Renderer {
    openings: Vec<(Category, String)>,
}

impl Renderer {
    pub fn new(openings: Vec<(Category, String)>) -> Self {
        Self { openings }
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            (
                Category::Sad,
                "I’m really sorry that you’re feeling sad right now. 💙".to_string(),
            ),
            (
                Category::Stressed,
                "It sounds like you’re feeling quite stressed. 😥".to_string(),
            ),
            (
                Category::Anxious,
                "It seems like you’re feeling anxious or worried. 💭".to_string(),
            ),
            (
                Category::Neutral,
                "Thank you for sharing that with me. 🌼".to_string(),
            ),
        ])
    }

    fn find(&self, category: Category) -> Option<&str> {
        self.openings
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, line)| line.as_str())
    }

    pub fn opening(&self, category: Category) -> &str {
        self.find(category)
            .or_else(|| self.find(Category::Neutral))
            .unwrap_or_default()
    }

    /// `_text` is the original message; kept in the signature so openings can
    /// be personalised later.
    pub fn render(&self, _text: &str, category: Category, suggestions: &[String]) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "{}", self.opening(category));
        let _ = writeln!(output);

        if !suggestions.is_empty() {
            let _ = writeln!(output);
            let _ = writeln!(output, "{SUGGESTION_HEADER}");
            for suggestion in suggestions {
                let _ = writeln!(output, "• {suggestion}");
            }
        }

        let _ = writeln!(output);
        output.push_str(CLOSING);
        output
    }
}
