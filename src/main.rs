//! Binary target used by `cargo stylus export-abi` to print the Solidity ABI.

#![cfg_attr(all(target_arch = "wasm32", not(feature = "export-abi")), no_main)]

#[cfg(feature = "export-abi")]
fn main() {
    dhv_tokensale::print_from_args();
}

#[cfg(all(not(target_arch = "wasm32"), not(feature = "export-abi")))]
fn main() {}
