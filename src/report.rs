use shearbolt::{uniform_strain, MaterialCurves};
use std::fmt::Write;

/// Render the fitted curve as a text report.
///
/// The engineering columns show where each breakpoint sits on the Ramberg-Osgood curve;
/// the true columns are the values the solver receives, at table precision.
#[must_use]
pub fn render_curve(curves: &MaterialCurves) -> String {
    let mut output = String::new();
    let constants = &curves.constants;

    writeln!(
        &mut output,
        "Hardening fit (E = {} MPa, Fty = {} MPa, Ftu = {} MPa, Sr = {} %, Scu = {} %)",
        constants.elastic_modulus,
        constants.yield_strength,
        constants.ultimate_strength,
        constants.rupture_strain,
        constants.ultimate_compressive_strain
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Uniform strain at rupture: {:.4} %",
        100.0 * uniform_strain(constants)
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Hardening exponent n = {:.6}",
        curves.curve.hardening_exponent()
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "{:>5} {:>12} {:>12} {:>14} {:>16}",
        "point", "eng stress", "eng strain", "true stress", "true pl. strain"
    )
    .expect("writing to string cannot fail");
    for (idx, (point, row)) in curves
        .curve
        .points()
        .iter()
        .zip(curves.plasticity.rows())
        .enumerate()
    {
        writeln!(
            &mut output,
            "{:>5} {:>12.4} {:>12.6} {:>14.6} {:>16.9}",
            idx + 1,
            point.engineering_stress,
            point.engineering_strain,
            row.true_stress,
            row.true_plastic_strain
        )
        .expect("writing to string cannot fail");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use shearbolt::{generate, MaterialConstants};

    #[test]
    fn reports_exponent_and_every_point() {
        let curves = generate(&MaterialConstants::default()).expect("valid steel");
        let report = render_curve(&curves);
        assert!(report.contains("Hardening exponent n = 17.336793"));
        assert!(report.contains("Uniform strain at rupture: 10.4845 %"));
        assert_eq!(report.lines().count(), 4 + 20);
        let last = report.lines().last().expect("point rows present");
        assert!(last.trim_start().starts_with("20"));
        assert!(last.ends_with("862.000000      0.688837181"));
    }
}
