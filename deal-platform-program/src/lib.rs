//! # Deal Platform Program
//!
//! The core on-chain smart contract for a merchant deal and coupon platform.
//!
//! This Anchor program lets merchants register on-chain profiles, publish
//! discount deals with a bounded coupon supply, and link an NFT collection;
//! lets users mint and redeem coupons and review deals; and runs a small
//! escrow-backed marketplace for resale of coupon NFTs.
//!
//! ## Key Concepts
//!
//! - **Deterministic addressing:** every persistent record lives at a PDA
//!   derived from a short seed tag and its identifying keys:
//!   - [`Merchant`]: `["merchant", wallet]`: one profile per wallet.
//!   - [`Deal`]: `["deal", wallet, deal_id]`: keyed by a merchant-assigned id.
//!   - [`Review`]: `["review", deal_pda, user]`: one review per (deal, user).
//!   - [`RedeemLog`]: `["redeem", mint]`: one redemption per coupon NFT.
//!   - [`Listing`]: `["listing", mint, seller]`: one listing per (mint, seller).
//!   Clients precompute every address before submission; the program only
//!   ever accepts accounts that re-derive from the other supplied inputs.
//!
//! - **Single-use redemption:** redeeming a coupon burns the NFT and writes
//!   the `RedeemLog` in the same instruction, so a coupon leaves circulation
//!   the moment it is spent and can never be redeemed twice.
//!
//! - **Key-less escrow custody:** a listed NFT is held by a token account
//!   owned by the `["escrow", mint]` PDA. The PDA has no private key; its
//!   authority to release the NFT on purchase is exercised through
//!   derivation-based CPI signing.
//!
//! - **Event-Driven Architecture:** every state-changing instruction emits a
//!   typed event (e.g. [`DealCreated`], [`CouponRedeemed`]) so off-chain
//!   indexers can follow the platform without re-deriving state.
//!
//! ## Modules
//!
//! - [`instructions`]: Contains the business logic for each on-chain instruction.
//! - [`state`]: Defines the data structures for all on-chain accounts (PDAs).
//! - [`events`]: Declares all on-chain events emitted by the program.
//! - [`errors`]: Defines custom errors for clear and specific failure modes.

#![allow(deprecated)]
#![allow(unexpected_cfgs)]
#![allow(elided_lifetimes_in_paths)]

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;
use errors::*;
use events::*;
use state::*;

declare_id!("GwdDwHnuCHmjDCWfaZHbEYoejMa3HHyponSDKP1yTXyb");

/// # Deal Platform Instruction Interface
///
/// Each public function in this module corresponds to a callable on-chain
/// instruction. The detailed logic for each instruction is implemented in the
/// [`instructions`] module.
#[program]
pub mod deal_platform_program {
    use super::*;

    // --- Merchant Instructions ---

    /// Initializes a new `Merchant` PDA for the signing wallet.
    /// See [`instructions::register_merchant`] for details.
    pub fn register_merchant(
        ctx: Context<RegisterMerchant>,
        name: String,
        uri: String,
    ) -> Result<()> {
        instructions::register_merchant(ctx, name, uri)
    }

    /// Links an NFT collection mint to an existing `Merchant` profile.
    /// See [`instructions::set_collection_mint`] for details.
    pub fn set_collection_mint(
        ctx: Context<SetCollectionMint>,
        collection_mint: Pubkey,
    ) -> Result<()> {
        instructions::set_collection_mint(ctx, collection_mint)
    }

    /// Publishes a new `Deal` under the signing merchant's profile.
    /// See [`instructions::create_deal`] for details.
    #[allow(clippy::too_many_arguments)]
    pub fn create_deal(
        ctx: Context<CreateDeal>,
        deal_id: u64,
        title: String,
        description: String,
        discount_percent: u8,
        expiry: i64,
        total_supply: u32,
        image_uri: String,
        metadata_uri: String,
    ) -> Result<()> {
        instructions::create_deal(
            ctx,
            deal_id,
            title,
            description,
            discount_percent,
            expiry,
            total_supply,
            image_uri,
            metadata_uri,
        )
    }

    // --- Coupon Instructions ---

    /// Mints a coupon against a deal's bounded supply.
    /// See [`instructions::mint_coupon`] for details.
    pub fn mint_coupon(ctx: Context<MintCoupon>, deal_id: u64) -> Result<()> {
        instructions::mint_coupon(ctx, deal_id)
    }

    /// Counts a coupon NFT minted by the external token-metadata flow.
    /// See [`instructions::verify_and_count_mint`] for details.
    pub fn verify_and_count_mint(
        ctx: Context<MintCoupon>,
        deal_id: u64,
        mint: Pubkey,
    ) -> Result<()> {
        instructions::verify_and_count_mint(ctx, deal_id, mint)
    }

    /// Redeems a coupon by burning the NFT and writing the single-use log.
    /// See [`instructions::redeem_coupon`] for details.
    pub fn redeem_coupon(ctx: Context<RedeemCoupon>) -> Result<()> {
        instructions::redeem_coupon(ctx)
    }

    /// Wire-compatible alias of `redeem_coupon` for older clients.
    /// See [`instructions::redeem_and_burn`] for details.
    pub fn redeem_and_burn(ctx: Context<RedeemCoupon>) -> Result<()> {
        instructions::redeem_and_burn(ctx)
    }

    // --- Review Instructions ---

    /// Records a user's review of a deal.
    /// See [`instructions::add_review`] for details.
    pub fn add_review(
        ctx: Context<AddReview>,
        deal_id: u64,
        rating: u8,
        comment: String,
    ) -> Result<()> {
        instructions::add_review(ctx, deal_id, rating, comment)
    }

    // --- Marketplace Instructions ---

    /// Lists a coupon NFT for sale, moving it into program escrow.
    /// See [`instructions::list_nft`] for details.
    pub fn list_nft(ctx: Context<ListNft>, price: u64) -> Result<()> {
        instructions::list_nft(ctx, price)
    }

    /// Purchases a listed NFT: payment, delivery and listing closure in one
    /// atomic instruction. See [`instructions::buy_nft`] for details.
    pub fn buy_nft(ctx: Context<BuyNft>) -> Result<()> {
        instructions::buy_nft(ctx)
    }
}
