pub mod game;
pub mod renderer;

pub use game::GuessGame;
pub use renderer::GuessRenderer;
