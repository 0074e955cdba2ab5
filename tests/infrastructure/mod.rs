mod elevenlabs_synthesizer_test;
mod http_email_client_test;
mod memory_archive_test;
mod object_store_archive_test;
mod openai_dialogue_client_test;
mod openai_whisper_engine_test;
mod transcript_sanitizer_test;
