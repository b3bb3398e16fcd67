fn main() {
    reqcurl::cli::run();
}
