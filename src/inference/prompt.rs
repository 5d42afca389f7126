/// Builds the instruction prompt sent to the text-generation model.
///
/// All three inputs are embedded verbatim. Nothing is escaped, so a message
/// can steer the model away from the tutoring instructions.
pub fn build_prompt(language: &str, topic: &str, message: &str) -> String {
    format!(
        "You are an expert {language} language teacher and I am a student. \
         Teach me {language} focusing on the topic of {topic}. \
         Keep your responses concise, engaging, and relevant to the topic. \
         If I make a mistake, gently correct me and provide examples. \
         The student says: \"{message}\"."
    )
}
