use std::env::remove_var;
use trycmd::TestCases;

#[ctor::ctor]
fn initialize() {
    unsafe {
        remove_var("RUST_LOG");
    }
}

#[cfg_attr(
    target_os = "windows",
    ignore = "`cmd` is found via the system directory regardless of `PATH`"
)]
#[test]
fn trycmd() {
    TestCases::new().case("tests/trycmd/*.toml");
}
