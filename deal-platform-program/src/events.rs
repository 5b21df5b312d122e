use anchor_lang::prelude::*;

// --- Merchant Events ---

/// Emitted when a new `Merchant` PDA is created.
/// This signifies that a new merchant has been registered on the platform.
#[event]
#[derive(Debug, Clone)]
pub struct MerchantRegistered {
    /// The public key of the merchant's wallet, the sole authority over the profile.
    pub merchant: Pubkey,
    /// The public key of the `Merchant` PDA that was registered.
    pub merchant_pda: Pubkey,
    /// The display name recorded on the profile.
    pub name: String,
    /// The Unix timestamp (in seconds) when the registration occurred.
    pub ts: i64,
}

/// Emitted when a merchant links an NFT collection to their profile.
#[event]
#[derive(Debug, Clone)]
pub struct CollectionMintSet {
    /// The public key of the merchant's wallet that authorized the update.
    pub merchant: Pubkey,
    /// The public key of the `Merchant` PDA that was updated.
    pub merchant_pda: Pubkey,
    /// The mint address of the linked collection.
    pub collection_mint: Pubkey,
    /// The Unix timestamp of the update.
    pub ts: i64,
}

/// Emitted when a merchant publishes a new deal.
#[event]
#[derive(Debug, Clone)]
pub struct DealCreated {
    /// The public key of the merchant's wallet that created the deal.
    pub merchant: Pubkey,
    /// The public key of the `Deal` PDA that was created.
    pub deal_pda: Pubkey,
    /// The merchant-assigned deal identifier.
    pub deal_id: u64,
    /// The maximum number of coupons that can be minted for the deal.
    pub total_supply: u32,
    /// The deal's expiry as a Unix timestamp.
    pub expiry: i64,
    /// The Unix timestamp of the creation.
    pub ts: i64,
}

// --- Coupon Events ---

/// Emitted when a coupon is counted against a deal's supply.
#[event]
#[derive(Debug, Clone)]
pub struct CouponMinted {
    /// The wallet the coupon was minted for.
    pub user: Pubkey,
    /// The `Deal` PDA whose counter was incremented.
    pub deal_pda: Pubkey,
    /// The merchant-assigned deal identifier.
    pub deal_id: u64,
    /// The deal's cumulative minted count after this operation.
    pub minted: u32,
    /// The Unix timestamp of the mint.
    pub ts: i64,
}

/// Emitted when an externally minted coupon NFT is verified and counted
/// against a deal's supply.
#[event]
#[derive(Debug, Clone)]
pub struct MintVerified {
    /// The wallet that minted the NFT.
    pub user: Pubkey,
    /// The `Deal` PDA whose counter was incremented.
    pub deal_pda: Pubkey,
    /// The merchant-assigned deal identifier.
    pub deal_id: u64,
    /// The mint address of the coupon NFT produced by the external token program.
    pub mint: Pubkey,
    /// The deal's cumulative minted count after this operation.
    pub minted: u32,
    /// The Unix timestamp of the verification.
    pub ts: i64,
}

/// Emitted when a coupon is redeemed: the NFT is burned and the single-use
/// redemption record is written in the same instruction.
#[event]
#[derive(Debug, Clone)]
pub struct CouponRedeemed {
    /// The wallet that redeemed (and held) the coupon.
    pub user: Pubkey,
    /// The mint of the burned coupon NFT.
    pub token_mint: Pubkey,
    /// The `RedeemLog` PDA that now marks the mint as redeemed.
    pub redeem_pda: Pubkey,
    /// The Unix timestamp of the redemption.
    pub ts: i64,
}

// --- Review Events ---

/// Emitted when a user reviews a deal.
#[event]
#[derive(Debug, Clone)]
pub struct ReviewAdded {
    /// The reviewing wallet.
    pub user: Pubkey,
    /// The reviewed `Deal` PDA.
    pub deal_pda: Pubkey,
    /// The `Review` PDA that was created.
    pub review_pda: Pubkey,
    /// The merchant-assigned deal identifier.
    pub deal_id: u64,
    /// The rating, between 1 and 5 inclusive.
    pub rating: u8,
    /// The Unix timestamp of the review.
    pub ts: i64,
}

// --- Marketplace Events ---

/// Emitted when a coupon NFT is listed for sale and moved into escrow.
#[event]
#[derive(Debug, Clone)]
pub struct NftListed {
    /// The listing wallet, which keeps ownership of the listing record.
    pub seller: Pubkey,
    /// The mint of the listed NFT.
    pub nft_mint: Pubkey,
    /// The `Listing` PDA that was created.
    pub listing_pda: Pubkey,
    /// The asking price in lamports.
    pub price: u64,
    /// The Unix timestamp of the listing.
    pub ts: i64,
}

/// Emitted when a listed NFT is purchased: payment, delivery and listing
/// closure happen in one instruction.
#[event]
#[derive(Debug, Clone)]
pub struct NftSold {
    /// The purchasing wallet.
    pub buyer: Pubkey,
    /// The wallet that received the payment.
    pub seller: Pubkey,
    /// The mint of the sold NFT.
    pub nft_mint: Pubkey,
    /// The `Listing` PDA that was closed by the sale.
    pub listing_pda: Pubkey,
    /// The price paid in lamports.
    pub price: u64,
    /// The Unix timestamp of the sale.
    pub ts: i64,
}
