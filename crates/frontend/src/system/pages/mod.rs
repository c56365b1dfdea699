pub mod landing;
pub mod landing_content;
pub mod not_found;
pub mod sign_in;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
pub use sign_in::SignInPage;
