pub mod generator;
pub mod session;

pub use generator::{QuestionId, QuizGenerator, QuizQuestion};
pub use session::QuizSession;
