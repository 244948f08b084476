fn main() {
    // Only the device build exports the ESP-IDF sysenv; host test builds
    // run with `--no-default-features`.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
