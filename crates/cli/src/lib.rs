//! Interactive shell for recording and searching warehouse stock entries.

pub mod config;
pub mod console;
pub mod errors;
pub mod render;
pub mod session;

pub use config::{OutputFormat, ShellConfig};
pub use console::{CapturedOutput, InputProvider, OutputSink, ScriptedInput, StdinInput, StdoutSink};
pub use errors::InputParseError;
pub use render::Renderer;
pub use session::{Session, SessionReport};
