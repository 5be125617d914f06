use serde::Serialize;

pub const GENERIC_EXPLANATION: &str = "Grammatical modification of the word";

/// Plain-language explanation for a grammatical gloss
pub fn explanation(gloss: &str) -> Option<&'static str> {
    Some(match gloss {
        // Verb forms
        "passive voice, present tense, 3rd person neuter" => {
            "Action is being done to the subject (it is being done)"
        }
        "causative passive continuous present" => {
            "Someone is causing the action to be done continuously"
        }
        "passive continuous present" => "Action is continuously being done",
        "causative present, honorific" => "Making someone do the action (respectful form)",
        "causative continuous past, honorific" => "Was making someone do the action (respectful)",
        "continuous past, honorific" => "Was doing the action continuously (respectful form)",
        "negative present tense" => "Action is not happening now",
        "conditional past" => "If the action had happened in the past",
        "necessity/want" => "Need to do or want to do the action",
        "possibility/may" => "Might or could do the action",

        // Noun cases
        "locative case (in/at)" => "Shows location - where something is happening",
        "locative case (on/above)" => "Shows position - on top of something",
        "locative case (inside)" => "Shows position - inside something",
        "plural locative" => "Location involving multiple items",
        "dative case (to/for)" => "Shows direction or beneficiary - to whom or for what",
        "plural dative case" => "Direction or benefit involving multiple recipients",
        "ablative case (from)" => "Shows origin or source - from where something comes",
        "plural ablative case" => "Origin involving multiple sources",
        "genitive case (of/possessive)" => "Shows ownership or relationship",
        "plural genitive case" => "Possession involving multiple owners",
        "associative case (with)" => "Shows companionship or accompaniment",
        "honorific plural (they)" => "Respectful way to refer to multiple people",

        // Adjectives and participles
        "past participle adjective" => "Describes something based on a completed action",
        "present participle adjective" => "Describes something based on an ongoing action",
        "comparative adjectival (like that which)" => "Comparing to something similar",

        // Complex forms
        "being/existing as (present participle)" => "Currently in the state of being",
        "having been (past participle)" => "Previously was in that state",
        "because (causal)" => "Shows the reason why something happens",
        "basic inflection" => "Simple grammatical change to the word",
        _ => return None,
    })
}

/// Coarse grouping of a gloss for display
pub fn categorize(gloss: &str) -> &'static str {
    let has = |needle: &str| gloss.contains(needle);

    if has("tense") || has("passive") || has("causative") {
        "verb"
    } else if has("case") || has("plural") || has("genitive") {
        "noun"
    } else if has("adjective") || has("participle") {
        "adjective"
    } else if has("adverbial") || has("because") || has("why") {
        "adverb"
    } else {
        "other"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrammarExplanation {
    pub term: String,
    pub explanation: String,
    pub category: &'static str,
}

pub fn explain<S: AsRef<str>>(glosses: &[S]) -> Vec<GrammarExplanation> {
    glosses
        .iter()
        .map(|g| {
            let g = g.as_ref();
            GrammarExplanation {
                term: g.to_string(),
                explanation: explanation(g).unwrap_or(GENERIC_EXPLANATION).to_string(),
                category: categorize(g),
            }
        })
        .collect()
}
