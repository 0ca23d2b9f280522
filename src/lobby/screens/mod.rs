//! Individual screen implementations.

mod account;
mod brain_teasers;
mod main_menu;
mod memory;
mod number;
mod pattern;
mod trivia;
mod verification;
mod word_puzzle;

pub use account::{SignInScreen, SignUpScreen};
pub use brain_teasers::BrainTeasersScreen;
pub use main_menu::MainMenuScreen;
pub use memory::MemoryScreen;
pub use number::NumberScreen;
pub use pattern::PatternScreen;
pub use trivia::TriviaScreen;
pub use verification::VerificationScreen;
pub use word_puzzle::WordPuzzleScreen;
