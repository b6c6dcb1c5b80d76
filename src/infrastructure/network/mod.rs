pub mod gemini;
pub mod http;
