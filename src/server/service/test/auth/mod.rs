use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    service::{auth::AuthService, test::wrap},
    token::{JwtCodec, PURPOSE_AUTH},
};
use test_utils::{builder::TestBuilder, factory};

mod login;
mod register;

/// Cheapest legal bcrypt cost, plenty for tests.
const TEST_BCRYPT_COST: u32 = 4;

fn codec() -> JwtCodec {
    JwtCodec::new("test-secret")
}
