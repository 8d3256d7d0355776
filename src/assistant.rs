use crate::emotion::{pick_category, EmotionClassifier};
use crate::error::Result;
use crate::knowledge::KnowledgeBase;
use crate::lexicon::{Lexicon, MatchMode};
use crate::models::{Assessment, Reply, RiskLevel};
use crate::render::{Renderer, SAFETY_MESSAGE};
use crate::risk::RiskDetector;

/// Stateless responder: every call is independent of the ones before it.
pub struct Assistant {
    risk: RiskDetector,
    classifier: EmotionClassifier,
    knowledge: KnowledgeBase,
    renderer: Renderer,
}

impl Assistant {
    pub fn new(
        risk: RiskDetector,
        classifier: EmotionClassifier,
        knowledge: KnowledgeBase,
        renderer: Renderer,
    ) -> Self {
        Self {
            risk,
            classifier,
            knowledge,
            renderer,
        }
    }

    pub fn builtin(mode: MatchMode) -> Result<Self> {
        Ok(Self::new(
            RiskDetector::builtin()?,
            EmotionClassifier::new(&Lexicon::builtin(), mode)?,
            KnowledgeBase::builtin(),
            Renderer::builtin(),
        ))
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// `text` is expected to be trimmed and non-empty.
    pub fn respond(&self, text: &str) -> Reply {
        if self.risk.detect(text).is_high() {
            return Reply::Safety(SAFETY_MESSAGE);
        }

        let category = self.classifier.classify(text);
        let suggestions = self.knowledge.lookup(category);
        Reply::Supportive {
            category,
            text: self.renderer.render(text, category, suggestions),
        }
    }

    pub fn assess(&self, text: &str) -> Assessment {
        let matched_phrase = self.risk.first_match(text).map(str::to_string);
        let risk = if matched_phrase.is_some() {
            RiskLevel::High
        } else {
            RiskLevel::Normal
        };
        if risk.is_high() {
            return Assessment {
                risk,
                matched_phrase,
                category: None,
                scores: None,
            };
        }

        let scores = self.classifier.score(text);
        Assessment {
            risk,
            matched_phrase,
            category: Some(pick_category(&scores)),
            scores: Some(scores),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryScores};
    use crate::render::CLOSING;

    fn assistant() -> Assistant {
        Assistant::builtin(MatchMode::Substring).unwrap()
    }

    #[test]
    fn high_risk_reply_is_exactly_the_safety_message() {
        let reply = assistant().respond("I want to die");
        assert!(reply.is_safety());
        assert_eq!(reply.text(), SAFETY_MESSAGE);
    }

    #[test]
    fn risk_overrides_matching_lexicons() {
        let reply = assistant().respond("so sad, lonely and anxious, I want to kill myself");
        assert_eq!(reply, Reply::Safety(SAFETY_MESSAGE));
    }

    #[test]
    fn stressed_message_gets_stressed_reply() {
        let a = assistant();
        let reply = a.respond("I have so many deadlines and exams, feeling overwhelmed");
        match &reply {
            Reply::Supportive { category, text } => {
                assert_eq!(*category, Category::Stressed);
                assert!(text.starts_with("It sounds like you’re feeling quite stressed."));
                for tip in a.knowledge().lookup(Category::Stressed) {
                    assert!(text.contains(tip.as_str()));
                }
                assert!(text.ends_with(CLOSING));
            }
            Reply::Safety(_) => panic!("unexpected safety reply"),
        }
    }

    #[test]
    fn neutral_message_gets_neutral_reply() {
        let a = assistant();
        let reply = a.respond("the sky is blue");
        assert!(!reply.is_safety());
        assert!(reply.text().starts_with("Thank you for sharing that with me."));
        for tip in a.knowledge().lookup(Category::Neutral) {
            assert!(reply.text().contains(&format!("• {tip}")));
        }
    }

    #[test]
    fn replies_do_not_depend_on_earlier_turns() {
        let a = assistant();
        let first = a.respond("I feel so lonely");
        let _ = a.respond("I want to die");
        assert_eq!(a.respond("I feel so lonely"), first);
    }

    #[test]
    fn assessment_skips_classification_on_high_risk() {
        let assessment = assistant().assess("No reason to live, so sad");
        assert_eq!(assessment.risk, RiskLevel::High);
        assert_eq!(assessment.matched_phrase.as_deref(), Some("no reason to live"));
        assert!(assessment.category.is_none());
        assert!(assessment.scores.is_none());
    }

    #[test]
    fn assessment_reports_scores() {
        let assessment = assistant().assess("worried and scared, also tired");
        assert_eq!(assessment.risk, RiskLevel::Normal);
        assert_eq!(assessment.category, Some(Category::Anxious));
        assert_eq!(
            assessment.scores,
            Some(CategoryScores {
                sad: 1,
                stressed: 0,
                anxious: 2,
            })
        );
    }
}
