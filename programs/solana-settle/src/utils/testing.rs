use anchor_lang::error::{Error, ERROR_CODE_OFFSET};
use anchor_lang::prelude::*;
use std::fmt::Debug;
use crate::errors::SettleError;

pub fn error_code(err: &Error) -> Option<u32> {
    match err {
        Error::AnchorError(e) => Some(e.error_code_number),
        Error::ProgramError(_) => None,
    }
}

#[track_caller]
pub fn assert_err<T: Debug>(result: Result<T>, expected: SettleError) {
    let name = expected.to_string();
    match result {
        Ok(value) => panic!("expected `{name}`, got Ok({value:?})"),
        Err(err) => assert_eq!(
            error_code(&err),
            Some(expected as u32 + ERROR_CODE_OFFSET),
            "expected `{name}`, got {err:?}"
        ),
    }
}
