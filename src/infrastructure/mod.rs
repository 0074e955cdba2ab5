pub mod audio;
pub mod email;
pub mod llm;
pub mod observability;
pub mod persistence;
pub mod speech;
