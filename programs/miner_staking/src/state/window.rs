use anchor_lang::prelude::*;

use crate::errors::ErrorCode;

/// Global period during which new positions may be opened.
/// Positions opened inside it keep accruing until their own end_ts.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, InitSpace, AnchorSerialize, AnchorDeserialize)]
pub struct StakingWindow {
    pub start_ts: i64,

    pub end_ts: i64,
}

impl StakingWindow {
    pub fn new(start_ts: i64, end_ts: i64) -> Result<Self> {
        let window = Self { start_ts, end_ts };
        window.validate()?;

        Ok(window)
    }

    pub fn validate(&self) -> Result<()> {
        require!(self.start_ts < self.end_ts, ErrorCode::InvalidWindowConfig);

        Ok(())
    }

    pub fn is_active(&self, now: i64) -> bool {
        now >= self.start_ts && now < self.end_ts
    }

    pub fn assert_active(&self, now: i64) -> Result<()> {
        require!(self.is_active(now), ErrorCode::InvalidWindow);

        Ok(())
    }

    /// Claims only need the window to have opened; they outlive its end.
    pub fn assert_started(&self, now: i64) -> Result<()> {
        require!(now >= self.start_ts, ErrorCode::InvalidWindow);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::assert_error;

    #[test]
    fn rejects_empty_window() {
        assert!(StakingWindow::new(100, 100).is_err());
        assert!(StakingWindow::new(200, 100).is_err());
        assert!(StakingWindow::new(100, 101).is_ok());
    }

    #[test]
    fn end_is_exclusive() {
        let window = StakingWindow::new(1_000, 2_000).unwrap();

        assert!(!window.is_active(999));
        assert!(window.is_active(1_000));
        assert!(window.is_active(1_999));
        assert!(!window.is_active(2_000));

        assert_error(window.assert_active(2_000), ErrorCode::InvalidWindow);
        assert_error(StakingWindow::new(5, 5), ErrorCode::InvalidWindowConfig);
    }

    #[test]
    fn claims_stay_open_after_end() {
        let window = StakingWindow::new(1_000, 2_000).unwrap();

        assert_error(window.assert_started(999), ErrorCode::InvalidWindow);
        window.assert_started(1_000).unwrap();
        window.assert_started(5_000).unwrap();
    }
}
