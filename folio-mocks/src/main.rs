fn main() {
    dioxus::launch(folio_mocks::App);
}
