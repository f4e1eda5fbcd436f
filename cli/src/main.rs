use std::ffi::OsString;

fn main() {
    let mut args = std::env::args_os();
    let program = args.next();
    let args: Vec<OsString> = args.collect();

    cask_cli::init_tracing();

    match cask_cli::run(&args) {
        Ok(never) => match never {},
        Err(err) => cask_cli::report_and_exit(
            program.as_deref(),
            args.first().map(OsString::as_os_str),
            &err,
        ),
    }
}
