fn main() {
    #[cfg(feature = "csr")]
    bubblemap_client::start();
}
