pub mod genai;
pub mod speech;
pub mod translation;
pub mod vocabulary;
