mod elevenlabs_synthesizer;

pub use elevenlabs_synthesizer::ElevenLabsSynthesizer;
