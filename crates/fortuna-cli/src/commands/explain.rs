pub fn run() {
    println!("Quantum Fortuna");
    println!("===============\n");
    println!("{}", fortuna_core::rng_explanation());
    super::print_disclaimer();
}
