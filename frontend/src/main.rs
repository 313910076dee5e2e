fn main() {
    #[cfg(target_arch = "wasm32")]
    gitam_hub_frontend::start();
}
