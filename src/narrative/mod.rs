mod client;
mod request;
mod rewriter;

pub use request::NarrativeRequest;
pub use rewriter::{HttpNarrativeRewriter, NarrativeError, NarrativeRewriter, RewriterConfig, StaticRewriter};
