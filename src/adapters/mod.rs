// Adapters layer: concrete implementations for external systems (job board APIs, console output).

pub mod console;
pub mod headhunter;
pub mod http;
pub mod superjob;

pub use console::{AsciiTablePresenter, JsonPresenter};
pub use headhunter::HeadHunterClient;
pub use superjob::SuperJobClient;
