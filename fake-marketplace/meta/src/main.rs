fn main() {
    multiversx_sc_meta_lib::cli_main::<fake_marketplace::AbiProvider>();
}
