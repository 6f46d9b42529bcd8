fn main() {
    tsvload::app::cli::run();
}
