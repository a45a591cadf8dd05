fn main() {
    devsetup::app::cli::run();
}
