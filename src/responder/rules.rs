use super::arithmetic;
use super::source::{ Clock, RandomSource };
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

pub const GREETING_REPLY: &str = "Hello! I'm an AI assistant. How can I help you today?";

pub const IDENTITY_REPLY: &str =
    "I'm an AI language model assistant designed to help answer questions and have conversations. I can assist with a wide variety of topics!";

pub const STATUS_REPLY: &str =
    "I'm functioning well, thank you for asking! I'm here and ready to help you with any questions or tasks you might have.";

pub const CAPABILITIES_REPLY: &str =
    "I can help with various tasks including:\n\n\u{2022} Answering general questions\n\u{2022} Providing explanations\n\u{2022} Having conversations\n\u{2022} Offering suggestions\n\u{2022} Basic calculations\n\u{2022} And much more!\n\nJust ask me anything you'd like to know!";

pub const GRATITUDE_REPLY: &str =
    "You're very welcome! If you have any other questions or need further assistance, feel free to ask!";

pub const FAREWELL_REPLY: &str =
    "Goodbye! It was nice chatting with you. Come back anytime you need assistance!";

pub const PROGRAMMING_REPLY: &str =
    "I'd be happy to help with programming! I can assist with various programming languages and concepts including JavaScript, Python, React, and more. Could you provide more details about what you'd like to know?";

pub const WEATHER_REPLY: &str =
    "I don't have access to real-time weather data, but I can suggest checking weather.com or your local weather service for current conditions and forecasts!";

pub const QUESTION_REPLIES: [&str; 3] = [
    "That's an interesting question! Based on what you're asking, I'd say it depends on the specific context and requirements. Could you provide more details?",
    "Great question! The answer can vary, but generally speaking, it's important to consider multiple factors. What specific aspect are you most interested in?",
    "I appreciate your curiosity! To give you the most accurate answer, I'd need a bit more context about your specific situation.",
];

pub const CONVERSATIONAL_REPLIES: [&str; 4] = [
    "That's interesting! Could you tell me more about that?",
    "I understand. Is there anything specific you'd like to know or discuss about this topic?",
    "Thanks for sharing that with me. How can I assist you further?",
    "I see. What would you like to explore or learn more about?",
];

fn pattern(source: &str) -> Regex {
    Regex::new(source).unwrap_or_else(|e| panic!("invalid rule pattern '{}': {}", source, e))
}

static GREETING: Lazy<Regex> = Lazy::new(|| pattern(r"^(hi|hello|hey|greetings)"));
static IDENTITY: Lazy<Regex> = Lazy::new(|| pattern(r"(who are you|what are you|your name)"));
static STATUS: Lazy<Regex> = Lazy::new(|| pattern(r"(how are you|how's it going)"));
static CAPABILITIES: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(what can you do|help me|capabilities)")
});
static GRATITUDE: Lazy<Regex> = Lazy::new(|| pattern(r"(thank you|thanks|appreciate)"));
static FAREWELL: Lazy<Regex> = Lazy::new(|| pattern(r"(bye|goodbye|see you|farewell)"));
static PROGRAMMING: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(programming|code|coding|javascript|python|react)")
});
static WEATHER: Lazy<Regex> = Lazy::new(|| pattern(r"(weather|temperature|forecast)"));
static DATE_TIME: Lazy<Regex> = Lazy::new(|| pattern(r"(what time|what date|current time)"));

/// Collaborators a rule may consult while producing its reply.
pub struct RuleContext<'a> {
    pub clock: &'a dyn Clock,
    pub random: &'a dyn RandomSource,
}

/// One step of the reply cascade. Rules are tried in [`Rule::CASCADE`] order
/// against the lowercased last message; the first reply produced wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Greeting,
    Identity,
    Status,
    Arithmetic,
    Capabilities,
    Gratitude,
    Farewell,
    Programming,
    Weather,
    DateTime,
    Fallback,
}

impl Rule {
    pub const CASCADE: [Rule; 11] = [
        Rule::Greeting,
        Rule::Identity,
        Rule::Status,
        Rule::Arithmetic,
        Rule::Capabilities,
        Rule::Gratitude,
        Rule::Farewell,
        Rule::Programming,
        Rule::Weather,
        Rule::DateTime,
        Rule::Fallback,
    ];

    /// Fixed reply for rules whose output never varies.
    pub fn canned_reply(self) -> Option<&'static str> {
        match self {
            Rule::Greeting => Some(GREETING_REPLY),
            Rule::Identity => Some(IDENTITY_REPLY),
            Rule::Status => Some(STATUS_REPLY),
            Rule::Capabilities => Some(CAPABILITIES_REPLY),
            Rule::Gratitude => Some(GRATITUDE_REPLY),
            Rule::Farewell => Some(FAREWELL_REPLY),
            Rule::Programming => Some(PROGRAMMING_REPLY),
            Rule::Weather => Some(WEATHER_REPLY),
            Rule::Arithmetic | Rule::DateTime | Rule::Fallback => None,
        }
    }

    fn keywords(self) -> Option<&'static Regex> {
        match self {
            Rule::Greeting => Some(&*GREETING),
            Rule::Identity => Some(&*IDENTITY),
            Rule::Status => Some(&*STATUS),
            Rule::Capabilities => Some(&*CAPABILITIES),
            Rule::Gratitude => Some(&*GRATITUDE),
            Rule::Farewell => Some(&*FAREWELL),
            Rule::Programming => Some(&*PROGRAMMING),
            Rule::Weather => Some(&*WEATHER),
            Rule::Arithmetic | Rule::DateTime | Rule::Fallback => None,
        }
    }

    /// `text` must already be lowercased. `None` means the cascade moves on.
    pub fn respond(self, text: &str, ctx: &RuleContext<'_>) -> Option<String> {
        match self {
            Rule::Arithmetic => arithmetic::answer(text),
            Rule::DateTime => {
                DATE_TIME
                    .is_match(text)
                    .then(|| {
                        format!("The current date and time is: {}", format_local(ctx.clock.now()))
                    })
            }
            Rule::Fallback => Some(fallback(text, ctx.random).to_string()),
            canned => {
                let keywords = canned.keywords()?;
                if keywords.is_match(text) {
                    canned.canned_reply().map(str::to_string)
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::Greeting => "greeting",
            Rule::Identity => "identity",
            Rule::Status => "status",
            Rule::Arithmetic => "arithmetic",
            Rule::Capabilities => "capabilities",
            Rule::Gratitude => "gratitude",
            Rule::Farewell => "farewell",
            Rule::Programming => "programming",
            Rule::Weather => "weather",
            Rule::DateTime => "date_time",
            Rule::Fallback => "fallback",
        };
        write!(f, "{}", name)
    }
}

fn fallback(text: &str, random: &dyn RandomSource) -> &'static str {
    let candidates: &[&'static str] = if text.contains('?') {
        &QUESTION_REPLIES
    } else {
        &CONVERSATIONAL_REPLIES
    };
    // clamp out-of-range picks
    let index = random.pick(candidates.len()).min(candidates.len() - 1);
    candidates[index]
}

/// en-US default rendering, e.g. `10/16/2026, 3:04:05 PM`.
pub fn format_local(at: NaiveDateTime) -> String {
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    struct FixedClock(NaiveDateTime);

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    struct FixedRandom(usize);

    impl RandomSource for FixedRandom {
        fn pick(&self, _len: usize) -> usize {
            self.0
        }
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    fn respond(rule: Rule, text: &str) -> Option<String> {
        let clock = FixedClock(at(15, 4, 5));
        let random = FixedRandom(0);
        let ctx = RuleContext { clock: &clock, random: &random };
        rule.respond(text, &ctx)
    }

    #[test]
    fn greeting_only_matches_prefix() {
        assert_eq!(respond(Rule::Greeting, "hello there").as_deref(), Some(GREETING_REPLY));
        assert_eq!(respond(Rule::Greeting, "greetings, bot").as_deref(), Some(GREETING_REPLY));
        assert_eq!(respond(Rule::Greeting, "oh hi"), None);
    }

    #[test]
    fn keyword_rules_are_substring_alternatives() {
        let cases = [
            (Rule::Identity, "so what are you exactly", IDENTITY_REPLY),
            (Rule::Identity, "tell me your name", IDENTITY_REPLY),
            (Rule::Status, "how's it going today", STATUS_REPLY),
            (Rule::Capabilities, "can you help me", CAPABILITIES_REPLY),
            (Rule::Gratitude, "i appreciate it", GRATITUDE_REPLY),
            (Rule::Farewell, "see you later", FAREWELL_REPLY),
            (Rule::Programming, "i love python", PROGRAMMING_REPLY),
            (Rule::Weather, "what's the forecast", WEATHER_REPLY),
        ];
        for (rule, text, expected) in cases {
            assert_eq!(respond(rule, text).as_deref(), Some(expected), "{} on {:?}", rule, text);
        }
    }

    #[test]
    fn keyword_rules_ignore_unrelated_text() {
        for rule in Rule::CASCADE {
            if rule == Rule::Fallback {
                continue;
            }
            assert_eq!(respond(rule, "the sky is blue"), None, "{} matched", rule);
        }
    }

    #[test]
    fn date_time_uses_injected_clock() {
        assert_eq!(
            respond(Rule::DateTime, "what time is it").as_deref(),
            Some("The current date and time is: 10/16/2026, 3:04:05 PM")
        );
    }

    #[test]
    fn date_time_matches_each_phrase_without_a_keyword_table() {
        assert!(Rule::DateTime.keywords().is_none());
        for text in ["what date is today", "the current time please"] {
            assert!(respond(Rule::DateTime, text).is_some(), "{:?}", text);
        }
        assert_eq!(respond(Rule::DateTime, "timely"), None);
    }

    #[test]
    fn formats_midnight_and_morning() {
        assert_eq!(format_local(at(0, 0, 9)), "10/16/2026, 12:00:09 AM");
        assert_eq!(format_local(at(9, 30, 0)), "10/16/2026, 9:30:00 AM");
    }

    #[test]
    fn fallback_picks_from_question_set_on_question_mark() {
        assert_eq!(respond(Rule::Fallback, "why?").as_deref(), Some(QUESTION_REPLIES[0]));
        assert_eq!(respond(Rule::Fallback, "ok").as_deref(), Some(CONVERSATIONAL_REPLIES[0]));
    }

    #[test]
    fn fallback_clamps_out_of_range_picks() {
        let random = FixedRandom(99);
        assert_eq!(fallback("why?", &random), QUESTION_REPLIES[2]);
        assert_eq!(fallback("ok", &random), CONVERSATIONAL_REPLIES[3]);
    }
}
