use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Caller is not the pool manager")]
    Unauthorized,

    #[msg("Invalid time")]
    InvalidWindow,

    #[msg("Staking window start must be before its end")]
    InvalidWindowConfig,

    #[msg("Invalid target timestamp")]
    InvalidTarget,

    #[msg("The output factor is the same")]
    DuplicateOutputFactor,

    #[msg("The future output factor does not exist")]
    NoFutureOutputFactor,

    #[msg("Invalid output factor schedule")]
    InvalidSchedule,

    #[msg("No output factor has been recorded")]
    NoRecords,

    #[msg("Output factor index out of range")]
    OutOfRange,

    #[msg("Output factor log is full")]
    OutputFactorLogFull,

    #[msg("Not supported")]
    Unsupported,

    #[msg("Already supported")]
    AlreadySupported,

    #[msg("Already mining")]
    AlreadyMining,

    #[msg("Mining is paused")]
    Paused,

    #[msg("Reward pot balance cannot cover the claim")]
    InsufficientBalance,

    #[msg("Position does not belong to the caller")]
    NotOwner,

    #[msg("Hash rates have already been set")]
    HashRatesAlreadySet,

    #[msg("Hash rates have not been set")]
    HashRatesNotSet,

    #[msg("Hash rates can only be set before the staking window opens")]
    HashRatesLocked,

    #[msg("Reward scale must be positive")]
    InvalidRewardScale,

    #[msg("Unknown miner type")]
    InvalidMinerType,

    #[msg("Invalid mining count")]
    InvalidMiningCount,

    #[msg("Claim batch is empty, too large, or its lists differ in length")]
    InvalidClaimBatch,

    #[msg("Math operation overflow")]
    MathOverflow,
}
