use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Copy the sample apps.json to the output directory
    let out_dir = match env::var("OUT_DIR") {
        Ok(dir) => dir,
        Err(_) => return,
    };
    // OUT_DIR is something like target/release/build/elevate-tray-xxx/out
    // We want the profile directory the executable lands in: target/release/
    let out_path = Path::new(&out_dir);

    // Navigate up: out -> elevate-tray-xxx -> build -> release
    if let Some(profile_dir) = out_path.ancestors().nth(3) {
        let src = Path::new("apps.json");
        let dst = profile_dir.join("apps.json");

        println!("cargo:rerun-if-changed=apps.json");
        // Never clobber a list the user already edited next to the binary
        if src.exists() && !dst.exists() {
            if let Err(e) = fs::copy(src, &dst) {
                println!("cargo:warning=Failed to copy apps.json: {}", e);
            }
        }
    }
}
