// Service exports
pub mod password;
pub mod sessions;
pub mod store;

pub use password::{hash_password, verify_password, PasswordError};
pub use sessions::SessionManager;
pub use store::{DonationLog, StoreError, UserStore};
