pub mod clock;
pub mod login;
pub mod rate_limit;
pub mod slug;
pub mod standings;
pub mod stats;
