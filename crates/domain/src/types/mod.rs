//! Domain types and models
//!
//! Wire shapes follow the backend: camelCase JSON for auth, profile and
//! event payloads, snake_case for the ticket and language endpoints.

pub mod auth;
pub mod event;
pub mod organization;
pub mod stats;
pub mod ticket;
pub mod user;

pub use auth::{
    EmailRequest, EventmakerRegistration, LoginRequest, MessageResponse, RefreshTokenRequest,
    ResetPasswordRequest, UserRegistration, VerifyResetCodeRequest,
};
pub use event::{Event, EventDraft, EventStatistics};
pub use organization::{
    EventmakerProfile, Organization, OrganizationPage, OrganizationUpdate, ProfileComment,
    SocialLinks,
};
pub use stats::EventsOverview;
pub use ticket::{TicketCheckRequest, TicketCheckResponse, TicketVerdict};
pub use user::{
    Address, CurrentLanguage, Language, LanguageSelection, OrganizationDetails, UserProfile,
};
