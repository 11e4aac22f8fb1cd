fn main() {
    manifestgen::app::cli::run_scoop();
}
