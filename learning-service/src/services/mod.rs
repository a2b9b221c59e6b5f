pub mod prompts;
pub mod providers;
pub mod structured;

pub use providers::{CompletionProvider, ProviderError};
pub use structured::{generate_structured, strip_code_fences, StructuredError};
