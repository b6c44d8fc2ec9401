fn main() {
    multiversx_sc_meta_lib::cli_main::<gas_refund::AbiProvider>();
}
