fn main() {
    match npuzzle::run() {
        Ok(_) => {}
        Err(e) => eprintln!("{}", e),
    }
}
