use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");

    // Dev builds report `<version>@<hash>`; tagged or non-git builds just the version.
    let hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_default();
    let version = env!("CARGO_PKG_VERSION");
    let tagged = git(&["tag", "--points-at", "HEAD"])
        .map(|tags| tags.lines().any(|t| t == version || t == format!("v{}", version)))
        .unwrap_or(false);

    println!("cargo:rustc-env=GIT_HASH={}", if tagged { "" } else { hash.as_str() });
}
