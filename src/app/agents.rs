//! Agent definitions: the fixed personas every turn is sent through.
//!
//! Each agent carries a name, the label its reply is printed under, and the
//! instructions sent as the system prompt. The set is built once at startup
//! and never changes.

use crate::util::dedent;

/// One request profile sent to the completion provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Agent {
    /// Short identifier (e.g. "TweetAnswerer").
    pub name: String,
    /// Console label the reply is printed under.
    pub label: String,
    /// The instructions sent as the system prompt.
    pub instructions: String,
    /// Model override; `None` uses the client's configured model.
    pub model: Option<String>,
}

impl Agent {
    pub fn new(name: &str, label: &str, instructions: &str) -> Self {
        Agent {
            name: name.to_string(),
            label: label.to_string(),
            instructions: dedent(instructions),
            model: None,
        }
    }

    #[cfg(test)]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Ordered, read-only set of agents. Iteration order is display order.
#[derive(Clone, Debug)]
pub struct AgentRegistry {
    agents: Vec<Agent>,
}

impl AgentRegistry {
    pub fn new(agents: Vec<Agent>) -> Self {
        AgentRegistry { agents }
    }

    /// The four built-in agents, in display order.
    pub fn builtin() -> Self {
        Self::new(vec![
            tweet_answerer(),
            sentiment_analyzer(),
            english_tutor(),
            banking_assistant(),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Agent> {
        self.agents.iter().find(|agent| agent.name == name)
    }
}

fn tweet_answerer() -> Agent {
    Agent::new(
        "TweetAnswerer",
        "Answer",
        "
        You are a concise and witty question-answering assistant with two tasks:
        1. Answer general knowledge questions in a tweet-like format (1-2 sentences, end with #QuickFact).
        2. If the input includes 'fact-check:', verify the statement's accuracy and respond concisely with the result, ending with #FactCheck.
        Keep responses short and engaging.
        ",
    )
}

fn sentiment_analyzer() -> Agent {
    Agent::new(
        "SentimentAnalyzer",
        "Sentiment",
        "
        You analyze the sentiment of user questions.
        Respond with a single sentence stating whether the sentiment is positive, negative, or neutral, ending with #SentimentAnalysis.
        ",
    )
}

fn english_tutor() -> Agent {
    Agent::new(
        "EnglishTutor",
        "English Lesson",
        "
        You are an English tutor providing concise lessons or corrections.
        If the input is a question about English (e.g., grammar, vocabulary, or usage), provide a brief explanation or example.
        If the input is a sentence, correct any English errors and explain the correction briefly, ending with #EnglishLesson.
        Keep responses short and clear.
        ",
    )
}

fn banking_assistant() -> Agent {
    Agent::new(
        "BankingAssistant",
        "Banking Info",
        "
        You are a banking assistant for First Citizen's Bank, answering basic banking-related questions.
        Provide concise answers about accounts, loans, or services in 1-2 sentences.
        Include 'Member FDIC. Terms apply.' and 'For details: firstcitizens.com or 1-800-FCB-HELP' in each response, ending with #BankingBasics.
        ",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_registry_is_ordered_by_display_label() {
        let registry = AgentRegistry::builtin();
        let labels: Vec<&str> = registry.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Answer", "Sentiment", "English Lesson", "Banking Info"]
        );
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn builtin_prompts_are_dedented() {
        let registry = AgentRegistry::builtin();
        let tutor = registry.get("EnglishTutor").expect("tutor");
        assert!(tutor.instructions.starts_with("You are an English tutor"));
        assert!(tutor.instructions.lines().all(|line| !line.starts_with(' ')));
        assert!(tutor.model.is_none());

        let bank = registry.get("BankingAssistant").expect("bank");
        assert!(bank.instructions.contains("Member FDIC. Terms apply."));
        assert!(bank.instructions.ends_with("#BankingBasics."));
    }

    #[test]
    fn get_misses_unknown_names() {
        assert!(AgentRegistry::builtin().get("Poet").is_none());
    }
}
