//! Tone table and prompt rendering.

use std::fmt;
use std::str::FromStr;

use crate::error::RedactumError;

/// Instruction used when the requested tone is not in the table.
pub const FALLBACK_INSTRUCTION: &str = "Rewrite this text in a professional tone.";

const QUALITY_RULES: &str = "CRITICAL RULES - Apply ALL of these:

PUNCTUATION & STRUCTURE:
- Max 1 em dash per 500 words
- Vary list lengths (2-5 items), avoid triadic patterns
- No emoji formatting
- Avoid generic templates

SENTENCE CONSTRUCTION:
- Max 1 \"Not just X, but Y\" per document
- Ban: \"To clarify\", \"In summary\", \"In other words\"
- Each sentence must add value

VOCABULARY - BANNED WORDS:
Delve, Elevate, Innovative, Cutting-edge, Practical solutions, Transformative, Leverage, Robust, Seamless

Use concrete, domain-specific language. Vary sentence length.

AUTHENTICITY:
- No exaggerated praise without specific actions
- Replace generic claims with concrete details
- Allow natural cognitive movement

QUALITY:
- Simulate multi-step writing (outline → draft → edit)
- Use conditional phrasing for unverifiable claims
- Post-process for concision";

/// Writing tone applied by `redactum refine`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tone {
    Formal,
    #[default]
    Professional,
    Neutral,
    Straightforward,
    Friendly,
    Casual,
    Persuasive,
    Authoritative,
    Empathetic,
    Inspirational,
}

impl Tone {
    pub const ALL: [Tone; 10] = [
        Tone::Formal,
        Tone::Professional,
        Tone::Neutral,
        Tone::Straightforward,
        Tone::Friendly,
        Tone::Casual,
        Tone::Persuasive,
        Tone::Authoritative,
        Tone::Empathetic,
        Tone::Inspirational,
    ];

    /// Identifier used on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Professional => "professional",
            Tone::Neutral => "neutral",
            Tone::Straightforward => "straightforward",
            Tone::Friendly => "friendly",
            Tone::Casual => "casual",
            Tone::Persuasive => "persuasive",
            Tone::Authoritative => "authoritative",
            Tone::Empathetic => "empathetic",
            Tone::Inspirational => "inspirational",
        }
    }

    /// One-line summary for `redactum tones`.
    pub fn description(self) -> &'static str {
        match self {
            Tone::Formal => "Structured, precise, impersonal - for academic, legal, and official communication",
            Tone::Professional => "Polished and business-appropriate - for corporate emails, proposals, reports",
            Tone::Neutral => "Objective and factual with minimal emotion - for documentation and informational writing",
            Tone::Straightforward => "Concise, direct, and action-focused - clear instructions or decisions",
            Tone::Friendly => "Warm, approachable, and reader-focused - for customer communication and community writing",
            Tone::Casual => "Relaxed, conversational, informal - for blogs, internal chats, informal updates",
            Tone::Persuasive => "Designed to influence or convince - for sales, marketing, arguments",
            Tone::Authoritative => "Confident, decisive, expert-level voice - for leadership, policy, expert commentary",
            Tone::Empathetic => "Emotionally aware and supportive - for support, HR, sensitive topics",
            Tone::Inspirational => "Motivating and uplifting - for speeches, branding, mission statements",
        }
    }

    /// The rewrite instruction placed in the prompt.
    pub fn instruction(self) -> &'static str {
        match self {
            Tone::Formal => "Rewrite this text in a formal tone. Use precise language, maintain objectivity, and follow standard conventions for academic, legal, or official contexts. Avoid contractions and colloquialisms.",
            Tone::Professional => "Rewrite this text in a professional tone suitable for business communication. Be courteous, clear, and maintain appropriate workplace etiquette without being overly stiff.",
            Tone::Neutral => "Rewrite this text in a neutral tone. Present facts objectively without emotional language or bias. Focus on clarity and informational value.",
            Tone::Straightforward => "Rewrite this text in a straightforward tone. Be direct and concise. Remove unnecessary words and get straight to the point with clear action items.",
            Tone::Friendly => "Rewrite this text in a friendly tone. Be warm and approachable while remaining respectful. Connect with the reader personally without being overly casual.",
            Tone::Casual => "Rewrite this text in a casual tone. Use conversational language, contractions, and a relaxed style suitable for informal contexts like blogs or team chats.",
            Tone::Persuasive => "Rewrite this text in a persuasive tone. Present compelling arguments, highlight benefits, and guide the reader toward a specific conclusion or action.",
            Tone::Authoritative => "Rewrite this text in an authoritative tone. Project confidence and expertise. Be decisive and command respect through knowledgeable, well-reasoned statements.",
            Tone::Empathetic => "Rewrite this text in an empathetic tone. Show understanding and emotional awareness. Be supportive and considerate of the reader's feelings and perspective.",
            Tone::Inspirational => "Rewrite this text in an inspirational tone. Motivate and uplift the reader. Use encouraging language that inspires action and conveys a sense of purpose.",
        }
    }

    /// Case-insensitive lookup by id.
    pub fn from_name(name: &str) -> Option<Tone> {
        let name = name.trim().to_ascii_lowercase();
        Tone::ALL.into_iter().find(|t| t.id() == name)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tone {
    type Err = RedactumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::from_name(s).ok_or_else(|| RedactumError::Config(format!("unknown tone '{}'", s)))
    }
}

/// Build the editor prompt for `text`.
///
/// `None` stands for a tone the table does not know; it gets the generic
/// professional instruction.
pub fn render_prompt(tone: Option<Tone>, text: &str) -> String {
    let instruction = tone.map(Tone::instruction).unwrap_or(FALLBACK_INSTRUCTION);
    format!(
        "You are a professional editor and writing coach.\n\n\
         TONE REQUIREMENT:\n{}\n\n\
         QUALITY CONTROL RULES:\n{}\n\n\
         ORIGINAL TEXT:\n{}\n\n\
         REFINED TEXT:",
        instruction, QUALITY_RULES, text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tone_is_professional() {
        assert_eq!(Tone::default(), Tone::Professional);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Tone::from_name("formal"), Some(Tone::Formal));
        assert_eq!(Tone::from_name(" Casual "), Some(Tone::Casual));
        assert_eq!(Tone::from_name("sarcastic"), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "sarcastic".parse::<Tone>().unwrap_err();
        assert!(err.to_string().contains("unknown tone 'sarcastic'"));
    }

    #[test]
    fn test_ids_round_trip() {
        for tone in Tone::ALL {
            assert_eq!(Tone::from_name(tone.id()), Some(tone));
            assert_eq!(tone.to_string(), tone.id());
        }
    }

    #[test]
    fn test_instructions_mention_their_tone() {
        for tone in Tone::ALL {
            assert!(
                tone.instruction().contains(tone.id()),
                "{} instruction does not name the tone",
                tone
            );
            assert!(!tone.description().is_empty());
        }
    }

    #[test]
    fn test_render_prompt_layout() {
        let prompt = render_prompt(Some(Tone::Friendly), "hey team, ship it");
        assert!(prompt.starts_with("You are a professional editor and writing coach.\n\nTONE REQUIREMENT:\n"));
        assert!(prompt.contains(Tone::Friendly.instruction()));
        assert!(prompt.contains("QUALITY CONTROL RULES:\nCRITICAL RULES"));
        assert!(prompt.contains("ORIGINAL TEXT:\nhey team, ship it\n\n"));
        assert!(prompt.ends_with("REFINED TEXT:"));
    }

    #[test]
    fn test_render_prompt_unknown_tone_uses_fallback() {
        let prompt = render_prompt(None, "text");
        assert!(prompt.contains(&format!("TONE REQUIREMENT:\n{}\n", FALLBACK_INSTRUCTION)));
    }
}
