//! One-way password hashing.
//!
//! Passwords are stored as Argon2id PHC strings, so the algorithm parameters
//! and salt travel with the hash. An account created without a password gets
//! an unusable marker instead, which no input ever verifies against.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use model::entities::user;
use rand::{distributions::Alphanumeric, Rng};

use crate::error::Result;

/// Marks a stored password that can never be used to sign in.
pub const UNUSABLE_PASSWORD_PREFIX: char = '!';
const UNUSABLE_PASSWORD_SUFFIX_LENGTH: usize = 40;

/// Encodes a raw password for storage. `None` yields an unusable password.
pub fn make_password(raw: Option<&str>) -> Result<String> {
    let Some(raw) = raw else {
        return Ok(unusable_password());
    };
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(raw.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Checks a raw password against a stored encoding.
pub fn check_password(raw: &str, encoded: &str) -> bool {
    if !is_password_usable(encoded) {
        return false;
    }
    match PasswordHash::new(encoded) {
        Ok(parsed) => Argon2::default()
            .verify_password(raw.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

pub fn is_password_usable(encoded: &str) -> bool {
    !encoded.starts_with(UNUSABLE_PASSWORD_PREFIX)
}

fn unusable_password() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(UNUSABLE_PASSWORD_SUFFIX_LENGTH)
        .map(char::from)
        .collect();
    format!("{}{}", UNUSABLE_PASSWORD_PREFIX, suffix)
}

/// Password helpers on the stored user record.
pub trait PasswordExt {
    fn has_usable_password(&self) -> bool;
    fn check_password(&self, raw: &str) -> bool;
}

impl PasswordExt for user::Model {
    fn has_usable_password(&self) -> bool {
        is_password_usable(&self.password)
    }

    fn check_password(&self, raw: &str) -> bool {
        check_password(raw, &self.password)
    }
}
