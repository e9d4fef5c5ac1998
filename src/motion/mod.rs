pub mod ease;
pub mod stage;
pub mod trajectory;
