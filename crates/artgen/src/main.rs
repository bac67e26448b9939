//! The `art-gen` binary.

#![forbid(unsafe_code)]

fn main() {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Failed to create tokio runtime: {err}");
            std::process::exit(1);
        }
    };

    let code = runtime.block_on(artgen_cli::run(std::env::args().collect()));
    std::process::exit(code);
}
