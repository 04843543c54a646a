//! Calculator Demo
//!
//! Drives the calculator page through the mock DOM, then runs the shared
//! driver specifications.
//!
//! Run with: cargo run -p calculator-ui --example calculator_demo
//! Set `RUST_LOG=debug` to see each operation logged.

use calculator_ui::driver::{run_full_specification, CalculatorDriver};
use calculator_ui::telemetry::init_tracing;
use calculator_ui::wasm::WasmDriver;

fn main() {
    init_tracing();

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║              Calculator UI Demo - Mock DOM                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let mut driver = WasmDriver::new();

    println!("Mock DOM Structure:");
    for elem in driver.dom().elements() {
        let text = if elem.text_content.is_empty() {
            String::new()
        } else {
            format!(" \"{}\"", elem.text_content)
        };
        println!(
            "   <{}> #{}{} [{}]",
            elem.tag,
            elem.id,
            text,
            elem.classes.join(" ")
        );
    }
    println!();

    println!("1. change #input1 = 8, #input2 = 4");
    driver.change_input("input1", Some("8"));
    driver.change_input("input2", Some("4"));

    for label in ["+", "-", "×", "÷"] {
        driver.click_text(label);
        println!("   click '{label}' -> #output = {:?}", driver.output_element_text());
    }

    println!("\n2. change #input1 = null, click '+'");
    driver.change_input("input1", None);
    driver.click_text("+");
    println!("   #output = {:?}", driver.output_element_text());

    println!("\n3. click 'c'");
    driver.click_text("c");
    println!("   #input1 = {:?}", driver.first_value());
    println!("   #input2 = {:?}", driver.second_value());
    println!("   #output = {:?}", driver.output_element_text());

    println!("\n4. DOM event history:");
    for (i, event) in driver.dom().event_history().iter().enumerate() {
        println!("   [{i}] {:?}", event);
    }

    println!();
    print!("Running run_full_specification() ... ");
    run_full_specification(&mut WasmDriver::new());
    println!("PASSED");
}
