// Adapters layer: concrete implementations for external systems.

pub mod openai;

pub use openai::OpenAiClient;
