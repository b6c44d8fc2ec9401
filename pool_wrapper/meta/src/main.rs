fn main() {
    multiversx_sc_meta_lib::cli_main::<pool_wrapper::AbiProvider>();
}
