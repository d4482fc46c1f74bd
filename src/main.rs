#[allow(clippy::exit)]
fn main() {
    std::process::exit(ggufy_shim::shim_main())
}
