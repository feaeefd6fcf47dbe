fn main() {
    match uninformed::solver() {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    }
}
