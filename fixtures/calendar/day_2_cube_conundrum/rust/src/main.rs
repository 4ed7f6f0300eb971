fn main() {
    println!("cube conundrum");
}
