pub mod context;
pub mod guard;
pub mod provider;
pub mod redirect;
pub mod storage;
pub mod user_button;

pub use context::{use_session, SessionContext, SessionProvider};
pub use guard::{SignedIn, SignedOut};
pub use provider::{Credentials, IdentityProvider, LocalIdentityProvider};
pub use redirect::{after_sign_in, sign_in_path, with_redirect};
pub use user_button::UserButton;
