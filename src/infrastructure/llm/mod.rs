mod openai_dialogue_client;

pub use openai_dialogue_client::OpenAiDialogueClient;
