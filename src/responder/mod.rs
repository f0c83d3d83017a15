pub mod arithmetic;
pub mod rules;
pub mod source;

pub use rules::{ Rule, RuleContext };
pub use source::{ Clock, RandomSource, SystemClock, ThreadRandom };

use crate::models::chat::ChatMessage;
use log::debug;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub rule: Rule,
    pub reply: String,
}

/// Picks a reply for a conversation by running the rule cascade over the
/// last message. Holds no per-conversation state.
#[derive(Clone)]
pub struct ResponseSelector {
    clock: Arc<dyn Clock>,
    random: Arc<dyn RandomSource>,
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(ThreadRandom))
    }
}

impl ResponseSelector {
    pub fn new(clock: Arc<dyn Clock>, random: Arc<dyn RandomSource>) -> Self {
        Self { clock, random }
    }

    pub fn select(&self, messages: &[ChatMessage]) -> Selection {
        let text = messages
            .last()
            .map(|m| m.content.to_lowercase())
            .unwrap_or_default();
        let ctx = RuleContext {
            clock: self.clock.as_ref(),
            random: self.random.as_ref(),
        };

        for rule in Rule::CASCADE {
            if let Some(reply) = rule.respond(&text, &ctx) {
                debug!("Rule '{}' answered a {}-message conversation", rule, messages.len());
                return Selection { rule, reply };
            }
        }

        // Fallback always answers, so this is only reached if the cascade is edited.
        Selection {
            rule: Rule::Fallback,
            reply: rules::CONVERSATIONAL_REPLIES[0].to_string(),
        }
    }

    pub fn reply(&self, messages: &[ChatMessage]) -> String {
        self.select(messages).reply
    }
}
