#![allow(dead_code)]

use super::*;

// --- PDA derivations ---

pub fn merchant_pda(authority: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[b"merchant", authority.as_ref()], &deal_platform_program::ID).0
}

pub fn deal_pda(merchant_wallet: &Pubkey, deal_id: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[b"deal", merchant_wallet.as_ref(), &deal_id.to_le_bytes()],
        &deal_platform_program::ID,
    )
    .0
}

// --- Happy-path helpers ---

pub fn register_merchant(
    svm: &mut LiteSVM,
    authority: &Keypair,
    name: &str,
    uri: &str,
) -> Pubkey {
    let (register_ix, merchant_pda) = ix_register_merchant(authority, name, uri);
    build_and_send_tx(svm, vec![register_ix], authority, vec![]);
    merchant_pda
}

pub fn set_collection_mint(svm: &mut LiteSVM, authority: &Keypair, collection_mint: Pubkey) {
    let set_ix = ix_set_collection_mint(&authority.pubkey(), collection_mint);
    build_and_send_tx(svm, vec![set_ix], authority, vec![]);
}

#[allow(clippy::too_many_arguments)]
pub fn create_deal(
    svm: &mut LiteSVM,
    authority: &Keypair,
    deal_id: u64,
    title: &str,
    description: &str,
    discount_percent: u8,
    expiry: i64,
    total_supply: u32,
) -> Pubkey {
    let (create_ix, deal_pda) = ix_create_deal(
        &authority.pubkey(),
        deal_id,
        title,
        description,
        discount_percent,
        expiry,
        total_supply,
        "https://example.com/coupon.png",
        "https://example.com/coupon.json",
    );
    build_and_send_tx(svm, vec![create_ix], authority, vec![]);
    deal_pda
}

// --- Instruction builders ---

pub fn ix_register_merchant(authority: &Keypair, name: &str, uri: &str) -> (Instruction, Pubkey) {
    let merchant_pda = merchant_pda(&authority.pubkey());

    let data = platform_instruction::RegisterMerchant {
        name: name.to_string(),
        uri: uri.to_string(),
    }
    .data();

    let accounts = platform_accounts::RegisterMerchant {
        payer: authority.pubkey(),
        merchant_profile: merchant_pda,
        system_program: system_program::ID,
    }
    .to_account_metas(None);

    let ix = Instruction {
        program_id: deal_platform_program::ID,
        accounts,
        data,
    };

    (ix, merchant_pda)
}

pub fn ix_set_collection_mint(authority: &Pubkey, collection_mint: Pubkey) -> Instruction {
    let merchant_pda = merchant_pda(authority);

    let data = platform_instruction::SetCollectionMint { collection_mint }.data();

    let accounts = platform_accounts::SetCollectionMint {
        payer: *authority,
        merchant_profile: merchant_pda,
    }
    .to_account_metas(None);

    Instruction {
        program_id: deal_platform_program::ID,
        accounts,
        data,
    }
}

/// Builds a `set_collection_mint` instruction that targets another wallet's
/// merchant profile. Used by authorization failure tests.
pub fn ix_set_collection_mint_for_profile(
    signer: &Pubkey,
    profile_owner: &Pubkey,
    collection_mint: Pubkey,
) -> Instruction {
    let data = platform_instruction::SetCollectionMint { collection_mint }.data();

    let accounts = platform_accounts::SetCollectionMint {
        payer: *signer,
        merchant_profile: merchant_pda(profile_owner),
    }
    .to_account_metas(None);

    Instruction {
        program_id: deal_platform_program::ID,
        accounts,
        data,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn ix_create_deal(
    authority: &Pubkey,
    deal_id: u64,
    title: &str,
    description: &str,
    discount_percent: u8,
    expiry: i64,
    total_supply: u32,
    image_uri: &str,
    metadata_uri: &str,
) -> (Instruction, Pubkey) {
    let merchant_pda = merchant_pda(authority);
    let deal_pda = deal_pda(authority, deal_id);

    let data = platform_instruction::CreateDeal {
        deal_id,
        title: title.to_string(),
        description: description.to_string(),
        discount_percent,
        expiry,
        total_supply,
        image_uri: image_uri.to_string(),
        metadata_uri: metadata_uri.to_string(),
    }
    .data();

    let accounts = platform_accounts::CreateDeal {
        payer: *authority,
        merchant_profile: merchant_pda,
        deal: deal_pda,
        system_program: system_program::ID,
    }
    .to_account_metas(None);

    let ix = Instruction {
        program_id: deal_platform_program::ID,
        accounts,
        data,
    };

    (ix, deal_pda)
}
