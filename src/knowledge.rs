use crate::models::Category;

#[derive(Debug, Clone)]
pub struct SuggestionSet {
    pub category: Category,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    sets: Vec<SuggestionSet>,
}

impl KnowledgeBase {
    pub fn new(sets: Vec<SuggestionSet>) -> Self {
        Self { sets }
    }

    pub fn builtin() -> Self {
        fn set(category: Category, suggestions: &[&str]) -> SuggestionSet {
            SuggestionSet {
                category,
                suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
            }
        }

        Self::new(vec![
            set(
                Category::Sad,
                &[
                    "It’s okay to feel sad sometimes. Allow yourself to feel it without judging.",
                    "Try talking to someone you trust or writing down your thoughts in a journal.",
                    "Do one small thing you usually enjoy – music, a walk, drawing, anything gentle.",
                ],
            ),
            set(
                Category::Stressed,
                &[
                    "Break your work into smaller tasks and focus on one thing at a time.",
                    "Take short breaks, drink some water, and stretch your body a little.",
                    "Make a simple to-do list and start with the easiest task first.",
                ],
            ),
            set(
                Category::Anxious,
                &[
                    "Try a breathing exercise: inhale slowly for 4 seconds, hold for 4, exhale for 4.",
                    "Focus on what you can do in the next 10 minutes instead of the whole future.",
                    "Ground yourself: name 5 things you can see, 4 you can touch, 3 you can hear.",
                ],
            ),
            set(
                Category::Neutral,
                &[
                    "Thanks for sharing. You can tell me more about how you feel if you want.",
                    "Taking care of your mind is just as important as taking care of your body.",
                ],
            ),
        ])
    }

    fn find(&self, category: Category) -> Option<&[String]> {
        self.sets
            .iter()
            .find(|set| set.category == category)
            .map(|set| set.suggestions.as_slice())
    }

    /// Suggestions for `category`, or the neutral set when it has none.
    pub fn lookup(&self, category: Category) -> &[String] {
        self.find(category)
            .or_else(|| self.find(Category::Neutral))
            .unwrap_or(&[])
    }

    pub fn lookup_label(&self, label: &str) -> &[String] {
        match label.parse::<Category>() {
            Ok(category) => self.lookup(category),
            Err(err) => {
                tracing::warn!(%err, "falling back to neutral suggestions");
                self.lookup(Category::Neutral)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_suggestions() {
        let kb = KnowledgeBase::builtin();
        for category in [
            Category::Sad,
            Category::Stressed,
            Category::Anxious,
            Category::Neutral,
        ] {
            assert!(!kb.lookup(category).is_empty(), "{category}");
        }
        assert_eq!(kb.lookup(Category::Stressed).len(), 3);
        assert_eq!(kb.lookup(Category::Neutral).len(), 2);
    }

    #[test]
    fn lookup_is_order_stable() {
        let kb = KnowledgeBase::builtin();
        let first = kb.lookup(Category::Anxious).to_vec();
        let second = kb.lookup(Category::Anxious).to_vec();
        assert_eq!(first, second);
        assert!(first[0].starts_with("Try a breathing exercise"));
        assert!(first[2].starts_with("Ground yourself"));
    }

    #[test]
    fn missing_set_falls_back_to_neutral() {
        let kb = KnowledgeBase::new(vec![SuggestionSet {
            category: Category::Neutral,
            suggestions: vec!["Keep going.".to_string()],
        }]);
        assert_eq!(kb.lookup(Category::Sad), ["Keep going.".to_string()]);
    }

    #[test]
    fn empty_base_yields_nothing() {
        let kb = KnowledgeBase::new(Vec::new());
        assert!(kb.lookup(Category::Sad).is_empty());
    }

    #[test]
    fn unknown_label_falls_back_to_neutral() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.lookup_label("furious"), kb.lookup(Category::Neutral));
        assert_eq!(kb.lookup_label("SAD"), kb.lookup(Category::Sad));
    }
}
