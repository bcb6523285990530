fn main() {
    multiversx_sc_meta_lib::cli_main::<membership_nft::AbiProvider>();
}
