#![no_main]
use libfuzzer_sys::fuzz_target;
use pegsolve_core::decode;

fuzz_target!(|data: &[u8]| {
    let _ = decode(data);
});
