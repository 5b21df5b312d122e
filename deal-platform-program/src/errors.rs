use anchor_lang::prelude::*;

#[error_code]
pub enum PlatformError {
    /// Used when the transaction signer does not match the authority recorded
    /// on the targeted account (e.g. a non-owner calling `set_collection_mint`).
    #[msg("Signer is not the authorized authority for this account.")]
    Unauthorized,

    /// Used when a supplied account does not match the address implied by the
    /// other inputs (wrong back-reference between a deal, listing or mint).
    #[msg("Address Mismatch: the supplied account does not match the derived address.")]
    AddressMismatch,

    /// Used when a counter increment or lamport computation would overflow.
    /// Arithmetic always fails closed, it never wraps.
    #[msg("Math Overflow: the arithmetic operation overflowed.")]
    MathOverflow,

    /// Used when a deal has no coupons left (`minted == total_supply`).
    #[msg("Sold Out: every coupon for this deal has already been minted.")]
    SoldOut,

    /// Used when the on-chain clock is past a deal's expiry timestamp.
    #[msg("Deal Expired: this deal is past its expiry and no longer mints coupons.")]
    DealExpired,

    /// Used when a coupon mint already has a redemption record.
    #[msg("Already Redeemed: this coupon has already been redeemed.")]
    AlreadyRedeemed,

    /// Used for domain-invalid arguments: out-of-range rating, oversized
    /// strings, zero total supply, non-positive expiry, zero listing price,
    /// or a redeem attempt without the coupon token in hand.
    #[msg("Invalid Input: an argument violates the program's domain constraints.")]
    InvalidInput,
}
