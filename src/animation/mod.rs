pub mod counter;
pub mod typing;

pub use counter::CounterAnimation;
pub use typing::TypingAnimator;
