use super::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Burn, CloseAccount, Transfer};

// --- Merchant Instructions ---

/// Initializes a new `Merchant` PDA for a wallet.
/// The profile starts with zero deals and no linked collection; its address
/// is a pure function of the wallet key, so a second registration for the
/// same wallet fails at account creation and leaves the profile untouched.
pub fn register_merchant(ctx: Context<RegisterMerchant>, name: String, uri: String) -> Result<()> {
    require!(
        name.as_bytes().len() <= MAX_NAME_LEN,
        PlatformError::InvalidInput
    );
    require!(
        uri.as_bytes().len() <= MAX_URI_LEN,
        PlatformError::InvalidInput
    );

    let merchant_profile = &mut ctx.accounts.merchant_profile;
    merchant_profile.merchant = ctx.accounts.payer.key();
    merchant_profile.name = name;
    merchant_profile.uri = uri;
    merchant_profile.total_deals = 0;
    merchant_profile.collection_mint = Pubkey::default();

    emit!(MerchantRegistered {
        merchant: merchant_profile.merchant,
        merchant_pda: merchant_profile.key(),
        name: merchant_profile.name.clone(),
        ts: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

/// Links an NFT collection mint to an existing `Merchant` profile.
/// Only the profile's owner may call this; the field can be overwritten.
pub fn set_collection_mint(ctx: Context<SetCollectionMint>, collection_mint: Pubkey) -> Result<()> {
    let merchant_profile = &mut ctx.accounts.merchant_profile;
    merchant_profile.collection_mint = collection_mint;

    emit!(CollectionMintSet {
        merchant: merchant_profile.merchant,
        merchant_pda: merchant_profile.key(),
        collection_mint,
        ts: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

/// Publishes a new `Deal` under the signing merchant's profile.
/// The deal id is merchant-assigned (by convention `total_deals + 1`); the
/// program enforces only address determinism plus the domain bounds, and
/// bumps `total_deals` with checked arithmetic.
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
    require!(
        title.as_bytes().len() <= MAX_TITLE_LEN,
        PlatformError::InvalidInput
    );
    require!(
        description.as_bytes().len() <= MAX_DESC_LEN,
        PlatformError::InvalidInput
    );
    require!(
        image_uri.as_bytes().len() <= MAX_URI_LEN,
        PlatformError::InvalidInput
    );
    require!(
        metadata_uri.as_bytes().len() <= MAX_URI_LEN,
        PlatformError::InvalidInput
    );
    require!(discount_percent <= 100, PlatformError::InvalidInput);
    require!(total_supply > 0, PlatformError::InvalidInput);
    // The on-chain clock, not the submitter, decides expiry at mint time;
    // creation only sanity-checks that the timestamp is plausible.
    require!(expiry > 0, PlatformError::InvalidInput);

    let deal = &mut ctx.accounts.deal;
    deal.deal_id = deal_id;
    deal.merchant = ctx.accounts.payer.key();
    deal.title = title;
    deal.description = description;
    deal.discount_percent = discount_percent;
    deal.expiry = expiry;
    deal.total_supply = total_supply;
    deal.minted = 0;
    deal.image_uri = image_uri;
    deal.metadata_uri = metadata_uri;

    let merchant_profile = &mut ctx.accounts.merchant_profile;
    merchant_profile.total_deals = merchant_profile
        .total_deals
        .checked_add(1)
        .ok_or(PlatformError::MathOverflow)?;

    emit!(DealCreated {
        merchant: deal.merchant,
        deal_pda: deal.key(),
        deal_id,
        total_supply,
        expiry,
        ts: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

// --- Coupon Instructions ---

/// Counts one coupon against the deal's supply, failing closed when the deal
/// is sold out or past its expiry per the on-chain clock. Returns the new
/// cumulative minted count.
fn count_coupon(deal: &mut Account<Deal>) -> Result<u32> {
    require!(deal.minted < deal.total_supply, PlatformError::SoldOut);

    let now = Clock::get()?.unix_timestamp;
    require!(now <= deal.expiry, PlatformError::DealExpired);

    deal.minted = deal
        .minted
        .checked_add(1)
        .ok_or(PlatformError::MathOverflow)?;
    Ok(deal.minted)
}

/// Mints a coupon for the signing user by incrementing the deal's counter.
/// Sold-out and expired deals reject the mint; `minted` never exceeds
/// `total_supply`.
pub fn mint_coupon(ctx: Context<MintCoupon>, deal_id: u64) -> Result<()> {
    let minted = count_coupon(&mut ctx.accounts.deal)?;

    emit!(CouponMinted {
        user: ctx.accounts.user.key(),
        deal_pda: ctx.accounts.deal.key(),
        deal_id,
        minted,
        ts: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

/// Counts a coupon NFT that was minted by the external token-metadata flow.
/// Same supply and expiry rules as `mint_coupon`; the NFT's mint key is
/// recorded in the emitted event for off-chain indexing.
pub fn verify_and_count_mint(ctx: Context<MintCoupon>, deal_id: u64, mint: Pubkey) -> Result<()> {
    let minted = count_coupon(&mut ctx.accounts.deal)?;

    emit!(MintVerified {
        user: ctx.accounts.user.key(),
        deal_pda: ctx.accounts.deal.key(),
        deal_id,
        mint,
        minted,
        ts: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

/// Redeems a coupon: burns the single token held by the caller and writes the
/// `RedeemLog` PDA in the same instruction. If the burn fails no log is
/// created, and a mint with an existing log cannot be redeemed again.
fn burn_and_log(ctx: Context<RedeemCoupon>) -> Result<()> {
    // Ownership proof: the caller must hold the coupon right now.
    require!(
        ctx.accounts.user_token_account.amount == 1,
        PlatformError::InvalidInput
    );

    let cpi_accounts = Burn {
        mint: ctx.accounts.mint.to_account_info(),
        from: ctx.accounts.user_token_account.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
    };
    token::burn(
        CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts),
        1,
    )?;

    let now = Clock::get()?.unix_timestamp;
    let redeem_log = &mut ctx.accounts.redeem_log;
    redeem_log.token_mint = ctx.accounts.mint.key();
    redeem_log.user = ctx.accounts.user.key();
    redeem_log.redeemed_at = now;

    emit!(CouponRedeemed {
        user: redeem_log.user,
        token_mint: redeem_log.token_mint,
        redeem_pda: redeem_log.key(),
        ts: now,
    });
    Ok(())
}

/// Canonical redemption entry point. See [`burn_and_log`].
pub fn redeem_coupon(ctx: Context<RedeemCoupon>) -> Result<()> {
    burn_and_log(ctx)
}

/// Kept for wire compatibility with older clients; identical contract and
/// semantics to [`redeem_coupon`].
pub fn redeem_and_burn(ctx: Context<RedeemCoupon>) -> Result<()> {
    burn_and_log(ctx)
}

// --- Review Instructions ---

/// Records a user's review of a deal. The rating must be 1..=5 and the
/// comment at most `MAX_COMMENT_LEN` bytes; the review PDA is keyed by
/// (deal, user), so a second review from the same wallet fails at creation
/// and the first review is left unchanged.
pub fn add_review(ctx: Context<AddReview>, deal_id: u64, rating: u8, comment: String) -> Result<()> {
    require!(rating >= 1 && rating <= 5, PlatformError::InvalidInput);
    require!(
        comment.as_bytes().len() <= MAX_COMMENT_LEN,
        PlatformError::InvalidInput
    );

    let now = Clock::get()?.unix_timestamp;
    let review = &mut ctx.accounts.review;
    review.user = ctx.accounts.user.key();
    review.deal = ctx.accounts.deal.key();
    review.rating = rating;
    review.comment = comment;
    review.created_at = now;

    emit!(ReviewAdded {
        user: review.user,
        deal_pda: review.deal,
        review_pda: review.key(),
        deal_id,
        rating,
        ts: now,
    });
    Ok(())
}

// --- Marketplace Instructions ---

/// Lists a coupon NFT for sale: creates the `Listing` PDA and moves the token
/// from the seller into the escrow token account in one instruction. The
/// escrow authority is a key-less PDA derived from the mint, so custody never
/// depends on a held secret.
pub fn list_nft(ctx: Context<ListNft>, price: u64) -> Result<()> {
    require!(price > 0, PlatformError::InvalidInput);

    let now = Clock::get()?.unix_timestamp;
    let listing = &mut ctx.accounts.listing;
    listing.seller = ctx.accounts.seller.key();
    listing.nft_mint = ctx.accounts.mint.key();
    listing.price = price;
    listing.created_at = now;

    let cpi_accounts = Transfer {
        from: ctx.accounts.seller_token_account.to_account_info(),
        to: ctx.accounts.escrow_token_account.to_account_info(),
        authority: ctx.accounts.seller.to_account_info(),
    };
    token::transfer(
        CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts),
        1,
    )?;

    emit!(NftListed {
        seller: listing.seller,
        nft_mint: listing.nft_mint,
        listing_pda: listing.key(),
        price,
        ts: now,
    });
    Ok(())
}

/// Purchases a listed NFT: pays the seller `listing.price` lamports, releases
/// the NFT from escrow to the buyer with the escrow PDA as CPI signer, closes
/// the emptied escrow token account, and closes the listing: all in one
/// instruction. An underfunded buyer aborts the whole purchase with no
/// partial effect.
pub fn buy_nft(ctx: Context<BuyNft>) -> Result<()> {
    let price = ctx.accounts.listing.price;

    let cpi_accounts = system_program::Transfer {
        from: ctx.accounts.buyer.to_account_info(),
        to: ctx.accounts.seller.to_account_info(),
    };
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            cpi_accounts,
        ),
        price,
    )?;

    let mint_key = ctx.accounts.mint.key();
    let signer_seeds: &[&[&[u8]]] =
        &[&[b"escrow", mint_key.as_ref(), &[ctx.bumps.escrow_authority]]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.escrow_token_account.to_account_info(),
        to: ctx.accounts.buyer_token_account.to_account_info(),
        authority: ctx.accounts.escrow_authority.to_account_info(),
    };
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        ),
        1,
    )?;

    // The escrow token account is empty now; reclaim its rent for the seller.
    let cpi_accounts = CloseAccount {
        account: ctx.accounts.escrow_token_account.to_account_info(),
        destination: ctx.accounts.seller.to_account_info(),
        authority: ctx.accounts.escrow_authority.to_account_info(),
    };
    token::close_account(CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    ))?;

    emit!(NftSold {
        buyer: ctx.accounts.buyer.key(),
        seller: ctx.accounts.seller.key(),
        nft_mint: mint_key,
        listing_pda: ctx.accounts.listing.key(),
        price,
        ts: Clock::get()?.unix_timestamp,
    });
    Ok(())
}
