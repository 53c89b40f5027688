fn main() {
    epf_release::app::cli::run();
}
