use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!value.is_empty()).then_some(value)
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
    println!("cargo:rerun-if-env-changed=PAYGATE_PAYMENT_PATH");
    println!("cargo:rerun-if-env-changed=PAYGATE_STORAGE_PREFIX");

    let sha = git(&["rev-parse", "--short=12", "HEAD"]).unwrap_or_else(|| "unknown".to_string());
    let dirty = git(&["status", "--porcelain"]).is_some();

    println!("cargo:rustc-env=PAYGATE_WEB_GIT_SHA={sha}");
    println!("cargo:rustc-env=PAYGATE_WEB_GIT_DIRTY={dirty}");
}
