//! Prompt text sent to the dialogue service.

use crate::models::{
    AgentProfile, AgentTurn, ChatMessage, ChatRole, InterviewAnswers, PersonalityProfile,
    PlayerSetup, QuestMessage, QuestPartner, QuestRole, QuizExchange,
};

/// Recent chat lines included in an avatar prompt
const CHAT_HISTORY_WINDOW: usize = 10;

fn numbered_exchanges(exchanges: &[QuizExchange]) -> String {
    exchanges
        .iter()
        .enumerate()
        .map(|(i, e)| format!("Q{n}: {}\nA{n}: {}", e.question, e.answer, n = i + 1))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Ask for the next interview question
pub fn interview_prompt(setup: Option<&PlayerSetup>, exchanges: &[QuizExchange]) -> String {
    let profile_line = match setup {
        Some(s) => format!(
            "Name: {}. Gender: {}. Looking for: {}.",
            s.name,
            s.gender,
            s.looking_for_gender.as_str()
        ),
        None => "Player setup unavailable.".to_string(),
    };

    let previous = if exchanges.is_empty() {
        "No previous Q&A yet.".to_string()
    } else {
        format!("Previous Q&A:\n{}", numbered_exchanges(exchanges))
    };

    [
        "You are a dating personality interviewer chatbot.",
        "Ask exactly one concise next question to learn personality and relationship style.",
        "Rules:",
        "- Ask one question only.",
        "- Avoid repeating prior topics.",
        "- Keep it under 20 words.",
        "- Return plain text question only, no labels.",
        "",
        profile_line.as_str(),
        previous.as_str(),
    ]
    .join("\n")
}

/// Let the player's own avatar answer a chat message in first person
pub fn avatar_chat_prompt(
    message: &str,
    personality: &PersonalityProfile,
    answers: &InterviewAnswers,
    quiz_conversation: &[QuizExchange],
    history: &[ChatMessage],
) -> String {
    let interview = if quiz_conversation.is_empty() {
        answers
            .iter()
            .map(|(id, answer)| format!("{}: {}", id, answer))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        numbered_exchanges(quiz_conversation)
    };

    let recent = history
        .iter()
        .skip(history.len().saturating_sub(CHAT_HISTORY_WINDOW))
        .map(|m| {
            let who = match m.role {
                ChatRole::Avatar => "Avatar",
                ChatRole::User => "User",
            };
            format!("{}: {}", who, m.text)
        })
        .collect::<Vec<_>>()
        .join("\n");
    let recent = if recent.is_empty() {
        "No prior history.".to_string()
    } else {
        format!("Recent chat history:\n{}", recent)
    };

    [
        "You are the user's own avatar chatting in first person.".to_string(),
        "Tone: warm, casual, supportive, concise, no emojis.".to_string(),
        "Use the player's personality profile to keep voice consistent.".to_string(),
        "Reply in 1-3 sentences and include one useful next-step suggestion when relevant.".to_string(),
        String::new(),
        "Personality profile:".to_string(),
        format!("coreVibe: {}", personality.core_vibe),
        format!("communicationStyle: {}", personality.communication_style),
        format!("relationshipFocus: {}", personality.relationship_focus),
        format!("loveStyle: {}", personality.love_style),
        format!("topVibes: {}", personality.top_vibes.join(", ")),
        format!("tags: {}", personality.tags.join(", ")),
        String::new(),
        "Interview context:".to_string(),
        interview,
        String::new(),
        recent,
        format!("Latest user message: {}", message),
    ]
    .join("\n")
}

/// One in-persona turn of an agent conversation, answered as JSON
pub fn turn_prompt(
    speaker: &AgentProfile,
    counterpart: &AgentProfile,
    incoming: &str,
    history: &[AgentTurn],
) -> String {
    let log = history
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{}. {}: {} [score:{}]", i + 1, t.speaker, t.text, t.score))
        .collect::<Vec<_>>()
        .join("\n");
    let log = if log.is_empty() {
        "Conversation log: none.".to_string()
    } else {
        format!("Conversation log:\n{}", log)
    };

    [
        format!("You are {}.", speaker.name),
        "Stay fully in this persona.".to_string(),
        format!(
            "Profile: {} years old, {}, {}m tall.",
            speaker.age, speaker.occupation, speaker.height_m
        ),
        format!("Personality: {}", speaker.personality_summary),
        format!("Preferences: {}", speaker.preference_summary),
        format!(
            "The other avatar is {}. Their profile: {}. Preferences: {}",
            counterpart.name, counterpart.personality_summary, counterpart.preference_summary
        ),
        format!("Incoming message from {}: {}", counterpart.name, incoming),
        log,
        "Respond naturally in 1-2 sentences.".to_string(),
        "Also evaluate compatibility from your viewpoint as integer score 1-10.".to_string(),
        r#"Return strict JSON: {"response":"...","score":7}"#.to_string(),
    ]
    .join("\n")
}

fn partner_line(candidate: &QuestPartner) -> String {
    format!("Partner profile: {}, vibe {}.", candidate.name, candidate.vibe)
}

fn quest_history(candidate: &QuestPartner, history: &[QuestMessage], heading: &str) -> Option<String> {
    if history.is_empty() {
        return None;
    }
    let lines = history
        .iter()
        .map(|m| {
            let who = match m.role {
                QuestRole::User => "User",
                QuestRole::Partner => candidate.name.as_str(),
            };
            format!("{}: {}", who, m.text)
        })
        .collect::<Vec<_>>()
        .join("\n");
    Some(format!("{}:\n{}", heading, lines))
}

pub fn truth_setup_prompt(candidate: &QuestPartner, statements: &[String], lie_index: u8) -> String {
    [
        "Create a 2-truths-1-lie set for a dating game partner.".to_string(),
        partner_line(candidate),
        format!(
            "User submitted: {}. User lie index: {}.",
            statements.join(" | "),
            lie_index
        ),
        "Return strict JSON with keys: partnerStatements(string[3]), partnerLieIndex(number 0-2), partnerGuess(number 0-2), partnerReason(string).".to_string(),
    ]
    .join("\n")
}

pub fn hot_take_prompt(candidate: &QuestPartner, opinions: &[String]) -> String {
    [
        "Generate partner hot takes and ratings for a dating game.".to_string(),
        partner_line(candidate),
        format!("User hot takes: {}.", opinions.join(" | ")),
        "Return strict JSON with keys: partnerOpinions(string[3]), partnerRatingsForUser(number[3], each 1-5).".to_string(),
    ]
    .join("\n")
}

pub fn fill_blank_prompt(candidate: &QuestPartner, starters: &[String], answers: &[String]) -> String {
    [
        "Generate partner fill-in-the-blank answers and guesses for a dating game.".to_string(),
        partner_line(candidate),
        format!("Sentence starters: {}.", starters.join(" | ")),
        format!("User real answers: {}.", answers.join(" | ")),
        "Return strict JSON with keys: partnerAnswers(string[5]), partnerGuessesForUser(string[5]).".to_string(),
    ]
    .join("\n")
}

/// In-quest chat reply from the partner's point of view
pub fn quest_chat_prompt(
    candidate: &QuestPartner,
    quest_title: &str,
    starter: &str,
    context: &str,
    history: &[QuestMessage],
    message: &str,
) -> String {
    [
        format!("You are {}, the partner avatar in a dating mini-game.", candidate.name),
        format!("Quest: {}", quest_title),
        format!("Conversation starter prompt: {}", starter),
        format!("Game context: {}", context),
        "Reply naturally in 1-3 short sentences.".to_string(),
        "Be curious, warm, and specific to the game context.".to_string(),
        quest_history(candidate, history, "Recent history")
            .unwrap_or_else(|| "No prior messages.".to_string()),
        format!("User message: {}", message),
    ]
    .join("\n")
}

pub fn decision_prompt(
    candidate: &QuestPartner,
    quest_title: &str,
    context: &str,
    history: &[QuestMessage],
    user_interested: bool,
) -> String {
    [
        format!(
            "You are {}, deciding if you want to continue engagement after a dating game conversation.",
            candidate.name
        ),
        format!("Quest: {}", quest_title),
        format!("Context: {}", context),
        format!("User interest: {}", if user_interested { "yes" } else { "no" }),
        quest_history(candidate, history, "Conversation history")
            .unwrap_or_else(|| "No history.".to_string()),
        r#"Return strict JSON: {"partnerInterested":true|false,"reason":"short reason"}"#.to_string(),
    ]
    .join("\n")
}
