pub mod clock;
pub mod service;

pub use clock::Clock;
pub use clock::ManualClock;
pub use clock::SystemClock;
pub use service::TokenService;
pub use service::DEFAULT_TOKEN_TTL_HOURS;
