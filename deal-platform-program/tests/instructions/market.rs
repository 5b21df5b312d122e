#![allow(dead_code)]

use super::*;

// --- PDA derivations ---

pub fn listing_pda(mint: &Pubkey, seller: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[b"listing", mint.as_ref(), seller.as_ref()],
        &deal_platform_program::ID,
    )
    .0
}

pub fn escrow_authority_pda(mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[b"escrow", mint.as_ref()], &deal_platform_program::ID).0
}

pub fn escrow_token_account(mint: &Pubkey) -> Pubkey {
    get_associated_token_address(&escrow_authority_pda(mint), mint)
}

// --- Happy-path helpers ---

pub fn list_nft(svm: &mut LiteSVM, seller: &Keypair, mint: &Pubkey, price: u64) -> Pubkey {
    let (list_ix, listing_pda) = ix_list_nft(&seller.pubkey(), mint, price);
    build_and_send_tx(svm, vec![list_ix], seller, vec![]);
    listing_pda
}

pub fn buy_nft(svm: &mut LiteSVM, buyer: &Keypair, seller: &Pubkey, mint: &Pubkey) {
    let buy_ix = ix_buy_nft(&buyer.pubkey(), seller, mint);
    build_and_send_tx(svm, vec![buy_ix], buyer, vec![]);
}

// --- Instruction builders ---

pub fn ix_list_nft(seller: &Pubkey, mint: &Pubkey, price: u64) -> (Instruction, Pubkey) {
    let listing_pda = listing_pda(mint, seller);
    let escrow_authority = escrow_authority_pda(mint);

    let data = platform_instruction::ListNft { price }.data();

    let accounts = platform_accounts::ListNft {
        seller: *seller,
        listing: listing_pda,
        mint: *mint,
        seller_token_account: get_associated_token_address(seller, mint),
        escrow_authority,
        escrow_token_account: get_associated_token_address(&escrow_authority, mint),
        associated_token_program: anchor_spl::associated_token::ID,
        token_program: anchor_spl::token::ID,
        system_program: system_program::ID,
    }
    .to_account_metas(None);

    let ix = Instruction {
        program_id: deal_platform_program::ID,
        accounts,
        data,
    };

    (ix, listing_pda)
}

pub fn ix_buy_nft(buyer: &Pubkey, seller: &Pubkey, mint: &Pubkey) -> Instruction {
    let escrow_authority = escrow_authority_pda(mint);

    let data = platform_instruction::BuyNft {}.data();

    let accounts = platform_accounts::BuyNft {
        buyer: *buyer,
        seller: *seller,
        listing: listing_pda(mint, seller),
        mint: *mint,
        escrow_authority,
        escrow_token_account: get_associated_token_address(&escrow_authority, mint),
        buyer_token_account: get_associated_token_address(buyer, mint),
        associated_token_program: anchor_spl::associated_token::ID,
        token_program: anchor_spl::token::ID,
        system_program: system_program::ID,
    }
    .to_account_metas(None);

    Instruction {
        program_id: deal_platform_program::ID,
        accounts,
        data,
    }
}
