pub mod engine;

pub use engine::{collect, InquirePrompter, Prompter, ScriptedPrompter};
