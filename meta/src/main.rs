fn main() {
    multiversx_sc_meta_lib::cli_main::<nft_dao::AbiProvider>();
}
