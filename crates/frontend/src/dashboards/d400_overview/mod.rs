pub mod cards;
pub mod ui;
