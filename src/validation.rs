//! Input validation for outbound messages

/// Longest message the webhook accepts
const MAX_MESSAGE_LEN: usize = 500;

/// Validates an outbound chat message before it is sent to the bot
pub fn validate_outbound_text(text: &str) -> Result<(), String> {
    if text.trim().is_empty() {
        return Err("Message cannot be empty".to_string());
    }

    if text.chars().count() > MAX_MESSAGE_LEN {
        return Err(format!(
            "Message too long (max {} characters)",
            MAX_MESSAGE_LEN
        ));
    }

    // Control characters would corrupt the transcript log and the wire JSON
    if text.contains(|c: char| c.is_control() && c != '\n') {
        return Err("Message contains invalid characters".to_string());
    }

    Ok(())
}
