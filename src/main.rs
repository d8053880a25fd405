fn main() {
    // Delegate to CLI runner; errors are printed nicely here.
    match cfmt::cli::run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
