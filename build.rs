use copy_to_output::copy_to_output;

fn main() {
    let profile = std::env::var("PROFILE").expect("cargo always sets PROFILE for build scripts");
    copy_to_output("lynx.toml", &profile).expect("unable to copy lynx.toml to the output directory");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=lynx.toml");
}
