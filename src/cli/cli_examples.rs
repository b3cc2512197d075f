use super::cli_main::get_user_input;
use crate::Examples::shock_examples::shock_examples;
use std::io::{self, Write};

pub fn examples_menu() {
    loop {
        println!("\n=== Examples ===");
        println!("1. Accretion shock in radiative equilibrium");
        println!("2. Accretion shock with radiation injected upstream");
        println!("3. Subcritical shock, full model");
        println!("4. Closed-form relations and opacity table");
        println!("0. Back to main menu");
        print!("Enter your choice: ");
        let _ = io::stdout().flush();

        let choice = get_user_input();
        match choice.trim() {
            "1" => shock_examples(0),
            "2" => shock_examples(1),
            "3" => shock_examples(2),
            "4" => shock_examples(3),
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
