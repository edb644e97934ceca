/// System prompt sent ahead of the transcript unless the config overrides it.
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are Sky-GPT, a helpful AI assistant. You help users brainstorm, \
     write, code, and chat. Be concise and direct.";
