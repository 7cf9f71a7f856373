use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=FITDECK_VERSION");

    println!("cargo:rustc-env=FITDECK_VERSION={}", build_version());
}

fn build_version() -> String {
    // CI and container builds pass the version in explicitly
    if let Some(version) = std::env::var("FITDECK_VERSION")
        .ok()
        .filter(|v| !v.is_empty())
    {
        return version;
    }

    let described = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string());

    match described {
        Some(v) if !v.is_empty() => v,
        _ => env!("CARGO_PKG_VERSION").to_string(),
    }
}
