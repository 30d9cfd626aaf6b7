fn main() {
    multiversx_sc_meta_lib::cli_main::<wiki_stake_dao::AbiProvider>();
}
