//! Admin account entity and role enumeration.

pub mod model;
pub mod role;

pub use model::{Admin, AdminProfileUpdate, LoginFailure, NewAdmin};
pub use role::Role;
