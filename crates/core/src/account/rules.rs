//! Local checks for the sign-in, sign-up and recovery screens

use eventpass_common::validation::{StringValidator, ValidationError, Validator};
use eventpass_domain::constants::RESET_CODE_LENGTH;

use crate::registration::rules::{check_email, check_new_password, PASSWORD_REQUIRED};

pub const CODE_REQUIRED: &str = "Reset code is required";
pub const CODE_INVALID: &str = "Reset code must be 4 digits";

/// Field key of the new password on the reset screen
pub const NEW_PASSWORD: &str = "newPassword";
pub const CONFIRM_PASSWORD: &str = "confirmPassword";

/// Login only checks presence and email shape; the server decides the rest.
pub fn validate_login(email: &str, password: &str) -> ValidationError {
    let mut v = Validator::new();
    check_email(&mut v, "email", email);
    v.require("password", password, PASSWORD_REQUIRED);
    v.into_errors()
}

pub fn validate_email(email: &str) -> ValidationError {
    let mut v = Validator::new();
    check_email(&mut v, "email", email);
    v.into_errors()
}

pub fn validate_reset_code(code: &str) -> ValidationError {
    let mut v = Validator::new();
    if v.require("code", code, CODE_REQUIRED) {
        let digits = StringValidator::new()
            .exact_length(RESET_CODE_LENGTH)
            .digits_only()
            .message(CODE_INVALID);
        v.validate_field("code", code, &digits);
    }
    v.into_errors()
}

pub fn validate_new_password(password: &str, confirm: &str) -> ValidationError {
    let mut v = Validator::new();
    check_new_password(&mut v, NEW_PASSWORD, CONFIRM_PASSWORD, password, confirm);
    v.into_errors()
}
