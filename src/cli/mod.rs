//! Interactive surface: colored output helpers, dialoguer prompts, the
//! entry-session state machine, and a scripted prompt source for tests.

pub mod io;
pub mod output;
pub mod session;
pub mod test_mode;

pub use io::DialoguerPrompt;
pub use session::{collect_income, run_entry_loop, EntryPrompt, SessionState};
pub use test_mode::ScriptedPrompt;
