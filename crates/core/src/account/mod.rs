//! Account access: sign-in, plain sign-up, verification and password recovery

pub mod ports;
pub mod rules;
pub mod service;

pub use ports::AccountPort;
pub use service::AccountService;
