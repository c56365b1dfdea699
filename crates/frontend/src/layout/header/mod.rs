pub mod header;
pub mod login_card;
