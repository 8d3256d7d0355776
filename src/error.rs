use crate::models::Category;

#[derive(Debug, thiserror::Error)]
pub enum ResponderError {
    #[error("invalid risk pattern {phrase:?}: {source}")]
    Pattern {
        phrase: String,
        #[source]
        source: regex::Error,
    },

    #[error("empty trigger in {0} lexicon")]
    EmptyTrigger(Category),

    #[error("unknown category {0:?}")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, ResponderError>;
