//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod claim_repo;
pub mod item_repo;
pub mod profile_repo;
pub mod session_repo;

pub use claim_repo::ClaimRepo;
pub use item_repo::ItemRepo;
pub use profile_repo::ProfileRepo;
pub use session_repo::SessionRepo;
