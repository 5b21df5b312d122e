use crate::errors::PlatformError;
use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

/// Maximum byte length of a merchant display name.
pub const MAX_NAME_LEN: usize = 64;
/// Maximum byte length of any URI stored on-chain (profile, image, metadata).
pub const MAX_URI_LEN: usize = 200;
/// Maximum byte length of a deal title.
pub const MAX_TITLE_LEN: usize = 80;
/// Maximum byte length of a deal description.
pub const MAX_DESC_LEN: usize = 512;
/// Maximum byte length of a review comment.
pub const MAX_COMMENT_LEN: usize = 280;

// --- Account Data Structs ---

/// The on-chain profile of a merchant. Its address is derived from the
/// merchant's wallet key, so there is exactly one profile per wallet.
/// `total_deals` is the source of truth for the next deal id by convention.
#[account]
#[derive(InitSpace, Debug)]
pub struct Merchant {
    /// The merchant's wallet key; the only authority allowed to create deals
    /// under this profile or link a collection mint. Immutable after creation.
    pub merchant: Pubkey,
    /// Display name shown to buyers.
    #[max_len(MAX_NAME_LEN)]
    pub name: String,
    /// Optional external profile URI (empty string if unset).
    #[max_len(MAX_URI_LEN)]
    pub uri: String,
    /// Number of deals created so far; incremented by `create_deal` only.
    pub total_deals: u32,
    /// Mint of an optional linked NFT collection; `Pubkey::default()` until
    /// set via `set_collection_mint`.
    pub collection_mint: Pubkey,
}

/// A single discount deal published by a merchant. Keyed by
/// `["deal", merchant_wallet, deal_id]`; after creation only `minted` changes.
#[account]
#[derive(InitSpace, Debug)]
pub struct Deal {
    /// Merchant-assigned identifier, also part of the PDA seeds.
    pub deal_id: u64,
    /// Back-reference to the owning merchant's wallet key.
    pub merchant: Pubkey,
    #[max_len(MAX_TITLE_LEN)]
    pub title: String,
    #[max_len(MAX_DESC_LEN)]
    pub description: String,
    /// Discount in whole percent, at most 100.
    pub discount_percent: u8,
    /// Unix timestamp after which coupons can no longer be minted.
    pub expiry: i64,
    /// Maximum number of coupons that may ever be minted.
    pub total_supply: u32,
    /// Cumulative number of coupons minted. Monotonic; never exceeds
    /// `total_supply` and is not decremented by redemption.
    pub minted: u32,
    /// Off-chain image pointer for the coupon NFT (empty string if unset).
    #[max_len(MAX_URI_LEN)]
    pub image_uri: String,
    /// Off-chain metadata pointer for the coupon NFT (empty string if unset).
    #[max_len(MAX_URI_LEN)]
    pub metadata_uri: String,
}

/// A user's review of a deal. Keyed by `["review", deal_pda, user]`, so each
/// (deal, user) pair can hold at most one review.
#[account]
#[derive(InitSpace, Debug)]
pub struct Review {
    /// The reviewing wallet.
    pub user: Pubkey,
    /// The reviewed `Deal` PDA.
    pub deal: Pubkey,
    /// Rating between 1 and 5 inclusive.
    pub rating: u8,
    #[max_len(MAX_COMMENT_LEN)]
    pub comment: String,
    /// Unix timestamp set at creation; the record is never mutated afterwards.
    pub created_at: i64,
}

/// Single-use redemption record. Keyed by `["redeem", mint]`, so each coupon
/// NFT can be redeemed at most once; written in the same instruction that
/// burns the token.
#[account]
#[derive(InitSpace, Debug)]
pub struct RedeemLog {
    /// The mint of the burned coupon NFT.
    pub token_mint: Pubkey,
    /// The wallet that redeemed the coupon.
    pub user: Pubkey,
    /// Unix timestamp of the redemption.
    pub redeemed_at: i64,
}

/// An active marketplace listing. Keyed by `["listing", mint, seller]`; the
/// listed NFT is held by the escrow token account (authority
/// `["escrow", mint]`) for the lifetime of the listing, and the account is
/// closed back to the seller on purchase.
#[account]
#[derive(InitSpace, Debug)]
pub struct Listing {
    /// The selling wallet; receives the payment and all rent refunds.
    pub seller: Pubkey,
    /// The mint of the listed NFT.
    pub nft_mint: Pubkey,
    /// Asking price in lamports; always greater than zero.
    pub price: u64,
    /// Unix timestamp of the listing.
    pub created_at: i64,
}

// --- Instruction Accounts Structs ---

// --- Merchant Instructions ---

/// Defines the accounts required for the `register_merchant` instruction.
#[derive(Accounts)]
pub struct RegisterMerchant<'info> {
    /// The `Signer` (the merchant's wallet) who will own the new profile.
    #[account(mut)]
    pub payer: Signer<'info>,
    /// The new `Merchant` account to be initialized. Its address is a PDA
    /// derived from the `payer`'s key, so a wallet can register only once.
    #[account(
        init,
        payer = payer,
        space = 8 + Merchant::INIT_SPACE,
        seeds = [b"merchant", payer.key().as_ref()],
        bump
    )]
    pub merchant_profile: Account<'info, Merchant>,
    /// The Solana System Program, required by Anchor for account creation (`init`).
    pub system_program: Program<'info, System>,
}

/// Defines the accounts for the `set_collection_mint` instruction.
#[derive(Accounts)]
pub struct SetCollectionMint<'info> {
    /// The `Signer` (the merchant's wallet) who must own the `merchant_profile`.
    pub payer: Signer<'info>,
    /// The `Merchant` account to be updated. Constraints verify the authority
    /// and the account's PDA seeds.
    #[account(
        mut,
        seeds = [b"merchant", payer.key().as_ref()],
        bump,
        constraint = merchant_profile.merchant == payer.key() @ PlatformError::Unauthorized
    )]
    pub merchant_profile: Account<'info, Merchant>,
}

/// Defines the accounts for the `create_deal` instruction.
#[derive(Accounts)]
#[instruction(deal_id: u64)]
pub struct CreateDeal<'info> {
    /// The `Signer` (the merchant's wallet) publishing the deal and paying rent.
    #[account(mut)]
    pub payer: Signer<'info>,
    /// The merchant's profile. Constraints verify the authority and the PDA
    /// seeds; its `total_deals` counter is incremented on success.
    #[account(
        mut,
        seeds = [b"merchant", payer.key().as_ref()],
        bump,
        constraint = merchant_profile.merchant == payer.key() @ PlatformError::Unauthorized
    )]
    pub merchant_profile: Account<'info, Merchant>,
    /// The new `Deal` account. Its address is a PDA derived from the merchant
    /// wallet and the merchant-assigned `deal_id`.
    #[account(
        init,
        payer = payer,
        space = 8 + Deal::INIT_SPACE,
        seeds = [b"deal", payer.key().as_ref(), &deal_id.to_le_bytes()],
        bump
    )]
    pub deal: Account<'info, Deal>,
    /// The Solana System Program, required by Anchor for account creation (`init`).
    pub system_program: Program<'info, System>,
}

// --- Coupon Instructions ---

/// Defines the accounts for the `mint_coupon` and `verify_and_count_mint`
/// instructions, which share one contract: both count a coupon against the
/// deal's supply.
#[derive(Accounts)]
#[instruction(deal_id: u64)]
pub struct MintCoupon<'info> {
    /// The wallet minting the coupon.
    pub user: Signer<'info>,
    /// The profile of the merchant owning the deal. Only used to resolve the
    /// merchant wallet key that the deal PDA is derived from.
    #[account(seeds = [b"merchant", merchant_profile.merchant.as_ref()], bump)]
    pub merchant_profile: Account<'info, Merchant>,
    /// The `Deal` whose `minted` counter is incremented. The seeds constraint
    /// re-derives the address from the merchant wallet and `deal_id`.
    #[account(
        mut,
        seeds = [b"deal", merchant_profile.merchant.as_ref(), &deal_id.to_le_bytes()],
        bump,
        constraint = deal.merchant == merchant_profile.merchant @ PlatformError::AddressMismatch
    )]
    pub deal: Account<'info, Deal>,
}

/// Defines the accounts for the `redeem_coupon` and `redeem_and_burn`
/// instructions. Redemption burns the coupon NFT and writes the single-use
/// `RedeemLog` in one atomic instruction.
#[derive(Accounts)]
pub struct RedeemCoupon<'info> {
    /// The redeeming wallet; must hold the coupon token and pays the log rent.
    #[account(mut)]
    pub user: Signer<'info>,
    /// The coupon NFT mint; its supply drops to zero with the burn.
    #[account(mut)]
    pub mint: Account<'info, Mint>,
    /// The user's token account for the coupon mint; must hold exactly one
    /// token, which is burned.
    #[account(
        mut,
        token::mint = mint,
        token::authority = user
    )]
    pub user_token_account: Account<'info, TokenAccount>,
    /// The SPL Token program, target of the burn CPI.
    pub token_program: Program<'info, Token>,
    /// The new `RedeemLog`. Its address is a PDA derived from the mint alone,
    /// so a second redemption of the same mint fails at creation.
    #[account(
        init,
        payer = user,
        space = 8 + RedeemLog::INIT_SPACE,
        seeds = [b"redeem", mint.key().as_ref()],
        bump
    )]
    pub redeem_log: Account<'info, RedeemLog>,
    /// The Solana System Program, required by Anchor for account creation (`init`).
    pub system_program: Program<'info, System>,
}

// --- Review Instructions ---

/// Defines the accounts for the `add_review` instruction.
#[derive(Accounts)]
#[instruction(deal_id: u64)]
pub struct AddReview<'info> {
    /// The reviewing wallet; pays the review account rent.
    #[account(mut)]
    pub user: Signer<'info>,
    /// The profile of the merchant owning the reviewed deal; resolves the
    /// merchant wallet key for the deal PDA derivation.
    #[account(seeds = [b"merchant", merchant_profile.merchant.as_ref()], bump)]
    pub merchant_profile: Account<'info, Merchant>,
    /// The reviewed `Deal`; must exist but is not mutated.
    #[account(
        seeds = [b"deal", merchant_profile.merchant.as_ref(), &deal_id.to_le_bytes()],
        bump,
        constraint = deal.merchant == merchant_profile.merchant @ PlatformError::AddressMismatch
    )]
    pub deal: Account<'info, Deal>,
    /// The new `Review`. Its address is a PDA derived from the deal PDA and
    /// the reviewer, so each (deal, user) pair can review at most once.
    #[account(
        init,
        payer = user,
        space = 8 + Review::INIT_SPACE,
        seeds = [b"review", deal.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub review: Account<'info, Review>,
    /// The Solana System Program, required by Anchor for account creation (`init`).
    pub system_program: Program<'info, System>,
}

// --- Marketplace Instructions ---

/// Defines the accounts for the `list_nft` instruction. Creating the listing
/// record and moving the NFT into escrow happen in the same instruction.
#[derive(Accounts)]
pub struct ListNft<'info> {
    /// The selling wallet; pays rent for the listing and the escrow token account.
    #[account(mut)]
    pub seller: Signer<'info>,
    /// The mint of the NFT being listed.
    pub mint: Account<'info, Mint>,
    /// The new `Listing`. Its address is a PDA derived from the mint and the
    /// seller, so a (mint, seller) pair can have at most one active listing.
    #[account(
        init,
        payer = seller,
        space = 8 + Listing::INIT_SPACE,
        seeds = [b"listing", mint.key().as_ref(), seller.key().as_ref()],
        bump
    )]
    pub listing: Account<'info, Listing>,
    /// The seller's token account holding the NFT; the token moves out of it
    /// into escrow.
    #[account(
        mut,
        token::mint = mint,
        token::authority = seller
    )]
    pub seller_token_account: Account<'info, TokenAccount>,
    /// CHECK: key-less PDA derived from the mint; it carries no data and acts
    /// only as the owner of the escrow token account and as the CPI signer
    /// that releases the NFT on purchase.
    #[account(seeds = [b"escrow", mint.key().as_ref()], bump)]
    pub escrow_authority: UncheckedAccount<'info>,
    /// The escrow's associated token account for the mint; custodies the NFT
    /// while the listing is active.
    #[account(
        init_if_needed,
        payer = seller,
        associated_token::mint = mint,
        associated_token::authority = escrow_authority
    )]
    pub escrow_token_account: Account<'info, TokenAccount>,
    /// The Associated Token program, required to create the escrow token account.
    pub associated_token_program: Program<'info, AssociatedToken>,
    /// The SPL Token program, target of the deposit transfer CPI.
    pub token_program: Program<'info, Token>,
    /// The Solana System Program, required by Anchor for account creation (`init`).
    pub system_program: Program<'info, System>,
}

/// Defines the accounts for the `buy_nft` instruction. Payment, NFT delivery
/// and listing closure all happen in the same instruction.
#[derive(Accounts)]
pub struct BuyNft<'info> {
    /// The purchasing wallet; pays the listing price and any token account rent.
    #[account(mut)]
    pub buyer: Signer<'info>,
    /// The selling wallet; receives the payment and the rent refunds from the
    /// closed listing and escrow token accounts.
    #[account(mut)]
    pub seller: SystemAccount<'info>,
    /// The mint of the NFT being purchased.
    pub mint: Account<'info, Mint>,
    /// The `Listing` being purchased. Constraints re-derive the PDA from the
    /// mint and seller and verify both back-references; the `close` directive
    /// returns its rent to the seller once the purchase succeeds.
    #[account(
        mut,
        close = seller,
        seeds = [b"listing", mint.key().as_ref(), seller.key().as_ref()],
        bump,
        constraint = listing.seller == seller.key() @ PlatformError::Unauthorized,
        constraint = listing.nft_mint == mint.key() @ PlatformError::AddressMismatch
    )]
    pub listing: Account<'info, Listing>,
    /// CHECK: key-less PDA derived from the mint; its derivation-based signing
    /// authority releases the NFT out of escrow.
    #[account(seeds = [b"escrow", mint.key().as_ref()], bump)]
    pub escrow_authority: UncheckedAccount<'info>,
    /// The escrow token account holding the listed NFT; emptied and closed to
    /// the seller.
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = escrow_authority
    )]
    pub escrow_token_account: Account<'info, TokenAccount>,
    /// The buyer's associated token account for the mint, created on demand.
    #[account(
        init_if_needed,
        payer = buyer,
        associated_token::mint = mint,
        associated_token::authority = buyer
    )]
    pub buyer_token_account: Account<'info, TokenAccount>,
    /// The Associated Token program, required to create the buyer's token account.
    pub associated_token_program: Program<'info, AssociatedToken>,
    /// The SPL Token program, target of the release and close CPIs.
    pub token_program: Program<'info, Token>,
    /// The Solana System Program, target of the lamport payment CPI.
    pub system_program: Program<'info, System>,
}
