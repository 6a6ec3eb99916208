use anchor_lang::prelude::*;

use crate::errors::ErrorCode;

pub mod rewards;

pub use rewards::*;

pub fn now_ts() -> Result<i64> {
    Ok(Clock::get()?.unix_timestamp)
}

/// A claim is paid in full or not at all.
pub fn assert_covers(pot_balance: u64, amount: u64) -> Result<()> {
    require!(pot_balance >= amount, ErrorCode::InsufficientBalance);

    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    use anchor_lang::error::Error;
    use std::fmt::Debug;

    use crate::errors::ErrorCode;

    fn error_code_number(err: &Error) -> Option<u32> {
        match err {
            Error::AnchorError(e) => Some(e.error_code_number),
            Error::ProgramError(_) => None,
        }
    }

    pub fn assert_error<T: Debug>(result: anchor_lang::Result<T>, expected: ErrorCode) {
        let err = result.expect_err("expected an error");
        let expected: Error = expected.into();

        assert_eq!(
            error_code_number(&err),
            error_code_number(&expected),
            "got {:?}, expected {:?}",
            err,
            expected
        );
    }
}
