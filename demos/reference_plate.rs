use shearbolt::{generate, MaterialConstants};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Plate steel from the reference double-shear connection
    let steel = MaterialConstants::new(200_000.0, 343.0, 431.0, 10.7, 100.0);

    // Fit the hardening law and tabulate the breakpoints
    let curves = generate(&steel)?;
    println!("n = {:.4}", curves.curve.hardening_exponent());

    // Print the table the plasticity model receives
    for (idx, row) in curves.plasticity.rows().iter().enumerate() {
        println!("{:>2}: {row}", idx + 1);
    }

    Ok(())
}
